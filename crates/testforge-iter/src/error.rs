//! Construction-time parameter errors.
//!
//! Invalid parameters fail immediately at construction; iteration itself
//! never errors — `next()` on an exhausted cursor is a defined no-op.

use thiserror::Error;

/// Errors from iterator construction and explicit position changes.
///
/// Numeric fields are widened to `i64` so one enum serves every integer
/// width.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IterError {
    #[error("invalid range: min {min} exceeds max {max}")]
    EmptyRange { min: i64, max: i64 },

    #[error("increment must be positive, got {0}")]
    NonPositiveIncrement(i64),

    #[error("value {value} outside range [{min}, {max}]")]
    ValueOutOfRange { value: i64, min: i64, max: i64 },

    #[error("array iterator needs at least one element")]
    EmptyArray,

    #[error("combination size must be positive")]
    ZeroSize,

    #[error("combination size {size} exceeds range cardinality {cardinality}")]
    SizeExceedsRange { size: usize, cardinality: usize },

    #[error("bracket count must be positive")]
    NoBrackets,

    #[error("invalid depth bounds: min {min} exceeds max {max}")]
    InvalidDepthBounds { min: usize, max: usize },
}
