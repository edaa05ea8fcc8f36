//! Single-pass iterator over a fixed array.

use crate::cursor::Cursor;
use crate::error::IterError;

/// Walks a fixed, non-empty array from the first element to the last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayIterator<T: Clone> {
    items: Vec<T>,
    index: usize,
    has_value: bool,
}

impl<T: Clone> ArrayIterator<T> {
    /// Wraps the given elements. Fails on an empty array.
    pub fn new(items: Vec<T>) -> Result<Self, IterError> {
        if items.is_empty() {
            return Err(IterError::EmptyArray);
        }
        Ok(Self {
            items,
            index: 0,
            has_value: false,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone> Cursor for ArrayIterator<T> {
    type Item = T;

    fn init(&mut self) {
        self.index = 0;
        self.has_value = true;
    }

    fn has_value(&self) -> bool {
        self.has_value
    }

    fn value(&mut self) -> T {
        self.items[self.index].clone()
    }

    fn next(&mut self) {
        if !self.has_value {
            return;
        }
        if self.index + 1 < self.items.len() {
            self.index += 1;
        } else {
            self.has_value = false;
        }
    }

    fn stop(&mut self) {
        self.has_value = false;
    }
}
