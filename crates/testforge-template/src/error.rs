//! Construction-time parameter errors for template generators.

use testforge_iter::IterError;
use thiserror::Error;

/// Errors from template-generator construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template size must be positive")]
    NonPositiveTemplateSize,

    #[error("invalid repetition bounds: min {min} exceeds max {max}")]
    InvalidRepetitionBounds { min: usize, max: usize },

    #[error("invalid template size bounds: min {min} exceeds max {max}")]
    InvalidSizeBounds { min: usize, max: usize },

    #[error("bracket expression: {0}")]
    Bracket(#[from] IterError),
}
