//! Packed views over pairs of narrow range iterators.

use crate::cursor::Cursor;
use crate::product::Product;
use crate::range::{sign_extend_bits, IntRangeIterator, NarrowInt};

/// Composes two narrow range iterators into one value of twice the width,
/// high half first.
///
/// The pair is enumerated as a [`Product`] (low half fastest) and the current
/// tuple is packed into a single bit pattern, e.g. two 8-bit iterators read
/// as one 16-bit value. [`wide_value`](PackedPairIterator::wide_value) gives
/// the same pattern reinterpreted as a signed number of the doubled width.
#[derive(Clone)]
pub struct PackedPairIterator<T: NarrowInt> {
    product: Product<T>,
}

impl<T: NarrowInt> PackedPairIterator<T> {
    pub fn new(high: IntRangeIterator<T>, low: IntRangeIterator<T>) -> Self {
        let mut product = Product::new();
        product.push(high);
        product.push(low);
        Self { product }
    }

    /// Packed bit pattern reinterpreted as signed, sign bit taken from the
    /// high half.
    pub fn wide_value(&mut self) -> i64 {
        sign_extend_bits(self.value(), 2 * T::BITS)
    }
}

impl<T: NarrowInt> Cursor for PackedPairIterator<T> {
    type Item = u64;

    fn init(&mut self) {
        self.product.init();
    }

    fn has_value(&self) -> bool {
        self.product.has_value()
    }

    /// `(high << BITS) | low`, both halves zero-extended.
    fn value(&mut self) -> u64 {
        let pair = self.product.value();
        (pair[0].bits() << T::BITS) | pair[1].bits()
    }

    fn next(&mut self) {
        self.product.next();
    }

    fn stop(&mut self) {
        self.product.stop();
    }
}
