//! Instruction-level data model consumed by the testforge enumeration core.
//!
//! The enumeration crates never interpret what an instruction *does*; they
//! arrange opaque [`Instruction`] payloads into [`Program`] values. Everything
//! behavioural — preconditions, register usage, execution — lives behind the
//! [`Situation`] trait and the opaque [`Processor`] / [`GeneratorContext`]
//! handles, which the core stores and forwards without looking inside.
//!
//! # Module Structure
//!
//! - [`instruction`] — the atomic test action and its metadata
//! - [`program`] — an ordered, appendable sequence of instructions
//! - [`situation`] — opaque per-instruction setup logic

pub mod instruction;
pub mod program;
pub mod situation;

pub use instruction::Instruction;
pub use program::Program;
pub use situation::{BracketSituation, GeneratorContext, Processor, Situation};
