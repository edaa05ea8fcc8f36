//! Floating-point views over integer bit-pattern ranges.
//!
//! Both iterators step an inner integer range over raw IEEE bit patterns and
//! present the current pattern in natural numeric form, so float-typed
//! enumeration reuses the integer combinator machinery unchanged.

use crate::cursor::Cursor;
use crate::error::IterError;
use crate::range::IntRangeIterator;

/// Enumerates `f32` values by their raw bit patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Float32Iterator {
    inner: IntRangeIterator<i32>,
}

impl Float32Iterator {
    /// Range over raw bit patterns `[min_bits, max_bits]` with step
    /// `inc_bits`, compared as signed 32-bit integers.
    pub fn from_bits(min_bits: i32, max_bits: i32, inc_bits: i32) -> Result<Self, IterError> {
        Ok(Self {
            inner: IntRangeIterator::new(min_bits, max_bits, inc_bits)?,
        })
    }

    /// Raw IEEE bit pattern of the current value.
    pub fn bits(&self) -> u32 {
        self.inner.bits() as u32
    }
}

impl Cursor for Float32Iterator {
    type Item = f32;

    fn init(&mut self) {
        self.inner.init();
    }

    fn has_value(&self) -> bool {
        self.inner.has_value()
    }

    fn value(&mut self) -> f32 {
        f32::from_bits(self.bits())
    }

    fn next(&mut self) {
        self.inner.next();
    }

    fn stop(&mut self) {
        self.inner.stop();
    }
}

/// Enumerates `f64` values by their raw bit patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Float64Iterator {
    inner: IntRangeIterator<i64>,
}

impl Float64Iterator {
    /// Range over raw bit patterns `[min_bits, max_bits]` with step
    /// `inc_bits`, compared as signed 64-bit integers.
    pub fn from_bits(min_bits: i64, max_bits: i64, inc_bits: i64) -> Result<Self, IterError> {
        Ok(Self {
            inner: IntRangeIterator::new(min_bits, max_bits, inc_bits)?,
        })
    }

    pub fn bits(&self) -> u64 {
        self.inner.bits()
    }
}

impl Cursor for Float64Iterator {
    type Item = f64;

    fn init(&mut self) {
        self.inner.init();
    }

    fn has_value(&self) -> bool {
        self.inner.has_value()
    }

    fn value(&mut self) -> f64 {
        f64::from_bits(self.bits())
    }

    fn next(&mut self) {
        self.inner.next();
    }

    fn stop(&mut self) {
        self.inner.stop();
    }
}
