//! Numeric range iterators over signed integer widths.
//!
//! One generic [`IntRangeIterator`] replaces a per-width type family: the
//! width is chosen through the [`RangeInt`] parameter, and every instance
//! also exposes a sign-preserving widened (`i64`) view plus a fixed-width
//! bit-pattern (`u64` / hex) projection, so combinators can compose narrow
//! iterators and read their values uniformly.

use std::fmt;

use crate::cursor::Cursor;
use crate::error::IterError;

/// Signed integer widths a range iterator can enumerate.
///
/// Implemented for `i8`, `i16`, `i32` and `i64`; not meant to be implemented
/// outside this crate.
pub trait RangeInt: Copy + Ord + fmt::Debug + fmt::Display + 'static {
    /// Width in bits.
    const BITS: u32;
    /// The zero of the type, used for increment validation.
    const ZERO: Self;

    /// Sign-preserving widening to `i64`.
    fn widened(self) -> i64;
    /// Zero-extended fixed-width bit pattern.
    fn bits(self) -> u64;
    /// `self - rhs`, `None` on underflow.
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    /// `self + rhs`; callers guarantee the sum is representable.
    fn add(self, rhs: Self) -> Self;
}

macro_rules! impl_range_int {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl RangeInt for $t {
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;

            fn widened(self) -> i64 {
                self as i64
            }

            fn bits(self) -> u64 {
                (self as $u) as u64
            }

            fn checked_sub(self, rhs: Self) -> Option<Self> {
                <$t>::checked_sub(self, rhs)
            }

            fn add(self, rhs: Self) -> Self {
                self + rhs
            }
        }
    )*};
}

impl_range_int!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);

/// Widths whose doubling still fits a `u64` bit pattern.
///
/// Bounds pair-packing compositions: two `i64` halves have no 128-bit
/// container, so `i64` deliberately does not implement this.
pub trait NarrowInt: RangeInt {}

impl NarrowInt for i8 {}
impl NarrowInt for i16 {}
impl NarrowInt for i32 {}

/// Sign-preserving widening of any supported width to `i64`.
pub fn sign_extend<T: RangeInt>(value: T) -> i64 {
    value.widened()
}

/// Zero-extended bit pattern of any supported width.
pub fn zero_extend<T: RangeInt>(value: T) -> u64 {
    value.bits()
}

/// Reinterprets the low `width` bits of a packed pattern as a signed value.
pub fn sign_extend_bits(bits: u64, width: u32) -> i64 {
    let shift = 64 - width;
    ((bits << shift) as i64) >> shift
}

/// Enumerates `min, min+inc, …` up to the largest value not exceeding `max`.
///
/// Requires `min <= max` and `inc > 0` at construction. The advance check is
/// written as `value > max - inc` (with the subtraction checked) so values
/// near the representable maximum never overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntRangeIterator<T: RangeInt> {
    min: T,
    max: T,
    inc: T,
    value: T,
    has_value: bool,
}

pub type Int8RangeIterator = IntRangeIterator<i8>;
pub type Int16RangeIterator = IntRangeIterator<i16>;
pub type Int32RangeIterator = IntRangeIterator<i32>;
pub type Int64RangeIterator = IntRangeIterator<i64>;

impl<T: RangeInt> IntRangeIterator<T> {
    /// Creates a range iterator over `[min, max]` with step `inc`.
    pub fn new(min: T, max: T, inc: T) -> Result<Self, IterError> {
        if min > max {
            return Err(IterError::EmptyRange {
                min: min.widened(),
                max: max.widened(),
            });
        }
        if inc <= T::ZERO {
            return Err(IterError::NonPositiveIncrement(inc.widened()));
        }

        Ok(Self {
            min,
            max,
            inc,
            value: min,
            has_value: false,
        })
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn inc(&self) -> T {
        self.inc
    }

    /// Moves the cursor to an explicit position inside `[min, max]`.
    pub fn set_value(&mut self, value: T) -> Result<(), IterError> {
        if value < self.min || value > self.max {
            return Err(IterError::ValueOutOfRange {
                value: value.widened(),
                min: self.min.widened(),
                max: self.max.widened(),
            });
        }
        self.value = value;
        Ok(())
    }

    /// Current value widened to `i64`, sign preserved.
    pub fn widened(&self) -> i64 {
        self.value.widened()
    }

    /// Current value as a zero-extended fixed-width bit pattern.
    pub fn bits(&self) -> u64 {
        self.value.bits()
    }

    /// Current bit pattern as fixed-width hex, e.g. `ff` for `-1i8`.
    pub fn hex(&self) -> String {
        format!("{:0width$x}", self.bits(), width = (T::BITS / 4) as usize)
    }
}

impl<T: RangeInt> Cursor for IntRangeIterator<T> {
    type Item = T;

    fn init(&mut self) {
        self.value = self.min;
        self.has_value = true;
    }

    fn has_value(&self) -> bool {
        self.has_value
    }

    fn value(&mut self) -> T {
        self.value
    }

    fn next(&mut self) {
        if !self.has_value {
            return;
        }
        // max - inc underflowing means every value is past the limit.
        match self.max.checked_sub(self.inc) {
            Some(limit) if self.value <= limit => self.value = self.value.add(self.inc),
            _ => self.has_value = false,
        }
    }

    fn stop(&mut self) {
        self.has_value = false;
    }
}
