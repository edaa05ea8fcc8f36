//! Template generators for combinatorial test-program construction.
//!
//! A template is a [`Program`](testforge_model::Program) whose instructions
//! are drawn from caller-registered equivalence classes. This crate builds
//! the generation layer on top of the `testforge-iter` cursors: a shared
//! [`TemplateIterator`] contract, the class registry with per-position order
//! constraints, and the concrete generators that enumerate templates as
//! Cartesian products, constrained sequences, multisets, sets and bracket
//! structures.
//!
//! # Module Structure
//!
//! - [`equivalence`] — equivalence classes and their factorization
//! - [`registry`] — instruction registration plus order constraints
//! - [`contract`] — the [`TemplateIterator`] trait
//! - [`product`] — coverage-driven Cartesian-product enumeration
//! - [`sequence`] — product enumeration filtered by position constraints
//! - [`multiset`] — repetition-count vectors with randomized instances
//! - [`bracket`] — templates shaped as bracket expressions
//!
//! # Determinism
//!
//! Product and sequence generators are fully deterministic. Multiset and set
//! generators randomize instance selection, but only through a caller-seeded
//! [`ChaCha8Rng`](rand_chacha::ChaCha8Rng), so a fixed seed reproduces a run
//! exactly.

pub mod bracket;
pub mod contract;
pub mod equivalence;
pub mod error;
pub mod multiset;
pub mod product;
pub mod registry;
pub mod sequence;

pub use bracket::BracketTemplateIterator;
pub use contract::TemplateIterator;
pub use equivalence::{EquivalenceClass, InstructionFactorization};
pub use error::TemplateError;
pub use multiset::{MultisetTemplateIterator, SetTemplateIterator};
pub use product::ProductTemplateIterator;
pub use registry::TemplateRegistry;
pub use sequence::SequenceTemplateIterator;
