//! Lazy combinatorial iterators for test-program generation.
//!
//! This crate is the enumeration substrate of testforge: a library of
//! stateful, composable cursors that lazily walk finite search spaces. All of
//! them share one explicit lifecycle contract ([`Cursor`]) — init, probe,
//! read, advance, stop — and deep-clone at their current position, which is
//! how callers checkpoint an enumeration and how combinators snapshot child
//! state.
//!
//! # Module Structure
//!
//! - [`cursor`] — the shared lazy-iteration contract and boxed cloning
//! - [`range`] — signed integer ranges with widened and bit-pattern views
//! - [`packed`] — two narrow ranges composed into one double-width value
//! - [`float`] — `f32`/`f64` enumeration over raw IEEE bit patterns
//! - [`array`] — single pass over a fixed array
//! - [`product`] — Cartesian product (mixed-radix odometer)
//! - [`sequence`] — ordered alternation of alternatives
//! - [`index_array`] — k-combinations as strictly increasing index tuples
//! - [`bracket`] — bounded-depth bracket expressions via level sequences
//!
//! # Determinism
//!
//! Every cursor here is fully deterministic; randomness only enters the
//! picture in the template-generation layer built on top, and there through
//! injected seeded generators.

pub mod array;
pub mod bracket;
pub mod cursor;
pub mod error;
pub mod float;
pub mod index_array;
pub mod packed;
pub mod product;
pub mod range;
pub mod sequence;

pub use array::ArrayIterator;
pub use bracket::{Bracket, BracketExpressionIterator};
pub use cursor::{BoxedCursor, CloneCursor, Cursor};
pub use error::IterError;
pub use float::{Float32Iterator, Float64Iterator};
pub use index_array::IndexArrayIterator;
pub use packed::PackedPairIterator;
pub use product::Product;
pub use range::{
    sign_extend, sign_extend_bits, zero_extend, Int16RangeIterator, Int32RangeIterator,
    Int64RangeIterator, Int8RangeIterator, IntRangeIterator, NarrowInt, RangeInt,
};
pub use sequence::Sequence;
