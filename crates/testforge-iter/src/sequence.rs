//! Ordered alternation over child cursors.

use crate::cursor::{BoxedCursor, CloneCursor, Cursor};

/// Union of mutually exclusive alternatives: the first child that still has a
/// value supplies the current value, and each `next()` advances exactly that
/// child, leaving the rest untouched.
///
/// Earlier children take priority when several report a value at once. This
/// is deliberately *not* a round-robin; callers relying on interleaving
/// should compose differently.
pub struct Sequence<T> {
    children: Vec<BoxedCursor<T>>,
    stopped: bool,
}

impl<T: 'static> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            children: self.children.clone(),
            stopped: self.stopped,
        }
    }
}

impl<T: 'static> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Sequence<T> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            stopped: false,
        }
    }

    /// Appends an alternative; earlier children take priority.
    pub fn push(&mut self, child: impl CloneCursor<T> + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn active(&self) -> Option<usize> {
        self.children.iter().position(|c| c.has_value())
    }
}

impl<T: 'static> Cursor for Sequence<T> {
    type Item = T;

    fn init(&mut self) {
        self.stopped = false;
        for child in &mut self.children {
            child.init();
        }
    }

    fn has_value(&self) -> bool {
        !self.stopped && self.active().is_some()
    }

    /// Value of the first child that currently has one. After exhaustion the
    /// first child's stale value is returned; calling `value()` on a sequence
    /// constructed without children is a contract violation.
    fn value(&mut self) -> T {
        let index = self.active().unwrap_or(0);
        self.children[index].value()
    }

    fn next(&mut self) {
        if self.stopped {
            return;
        }
        if let Some(index) = self.active() {
            self.children[index].next();
        }
    }

    fn stop(&mut self) {
        self.stopped = true;
        for child in &mut self.children {
            child.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::collect_all;
    use crate::range::IntRangeIterator;

    fn two_ranges() -> Sequence<i32> {
        let mut seq = Sequence::new();
        seq.push(IntRangeIterator::new(0i32, 2, 1).unwrap());
        seq.push(IntRangeIterator::new(10i32, 11, 1).unwrap());
        seq
    }

    #[test]
    fn drains_children_in_priority_order() {
        let mut seq = two_ranges();
        assert_eq!(collect_all(&mut seq), vec![0, 1, 2, 10, 11]);
    }

    #[test]
    fn exhausts_only_when_all_children_do() {
        let mut seq = two_ranges();
        seq.init();
        for _ in 0..4 {
            assert!(seq.has_value());
            seq.next();
        }
        assert!(seq.has_value());
        seq.next();
        assert!(!seq.has_value());
    }

    #[test]
    fn advances_exactly_one_child_per_call() {
        let mut seq = two_ranges();
        seq.init();
        seq.next();
        // Second child must still be at its first value.
        assert_eq!(seq.value(), 1);
        seq.next();
        seq.next();
        assert_eq!(seq.value(), 10);
    }

    #[test]
    fn empty_sequence_has_no_value() {
        let mut seq: Sequence<i32> = Sequence::new();
        seq.init();
        assert!(!seq.has_value());
    }

    #[test]
    fn stop_is_unconditional_until_reinit() {
        let mut seq = two_ranges();
        seq.init();
        seq.stop();
        assert!(!seq.has_value());
        seq.next();
        assert!(!seq.has_value());

        seq.init();
        assert!(seq.has_value());
    }

    #[test]
    fn clone_freezes_position() {
        let mut seq = two_ranges();
        seq.init();
        seq.next();

        let mut copy = seq.clone();
        seq.next();

        assert_eq!(copy.value(), 1);
        assert_eq!(seq.value(), 2);
    }
}
