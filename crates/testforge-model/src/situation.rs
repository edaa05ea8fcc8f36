//! Opaque per-instruction setup logic.
//!
//! A [`Situation`] describes how to prepare processor state so that the
//! instruction it is attached to exercises a particular case. The enumeration
//! core only stores situations on instructions and forwards the
//! [`init`](Situation::init) / [`use_registers`](Situation::use_registers)
//! hooks; it never interprets them.

use std::any::Any;
use std::fmt;

/// Opaque handle to the processor model under test.
///
/// Supplied by the caller, forwarded untouched by the enumeration core.
pub trait Processor {
    /// Processor name, for logging only.
    fn name(&self) -> &str;
}

/// Opaque handle to the caller's generation context (register allocation,
/// memory layout, and so on).
pub trait GeneratorContext {}

/// Per-instruction setup logic.
///
/// Implementations are cloned together with the instruction carrying them,
/// so every generated template owns an independent situation object.
pub trait Situation: fmt::Debug {
    /// Situation name, for diagnostics.
    fn name(&self) -> &str;

    /// Prepares processor state for the attached instruction.
    fn init(&mut self, _processor: &mut dyn Processor, _context: &mut dyn GeneratorContext) {}

    /// Releases auxiliary registers claimed during construction.
    fn use_registers(
        &mut self,
        _processor: &mut dyn Processor,
        _context: &mut dyn GeneratorContext,
    ) {
    }

    /// Deep copy behind the trait object.
    fn clone_boxed(&self) -> Box<dyn Situation>;

    /// Downcast support for callers that attach extra state to a concrete
    /// situation type (e.g. bracket numbering).
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl Clone for Box<dyn Situation> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

/// Situation carried by bracket instructions.
///
/// Generators that lay out bracket structures stamp each opening and closing
/// instruction with the pair's sequential number, so the caller can match
/// them up when constructing the final program.
#[derive(Debug, Clone, Default)]
pub struct BracketSituation {
    bracket_number: usize,
}

impl BracketSituation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bracket_number(&self) -> usize {
        self.bracket_number
    }

    pub fn set_bracket_number(&mut self, number: usize) {
        self.bracket_number = number;
    }
}

impl Situation for BracketSituation {
    fn name(&self) -> &str {
        "bracket"
    }

    fn clone_boxed(&self) -> Box<dyn Situation> {
        Box::new(self.clone())
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
