//! The template-generator contract.

use testforge_iter::Cursor;
use testforge_model::{GeneratorContext, Processor, Program};

use crate::registry::TemplateRegistry;

/// A cursor over test templates.
///
/// Extends the base [`Cursor`] contract with the instruction registry and
/// with [`randomize`](Self::randomize), which re-samples the concrete
/// representatives chosen within the *current* combinatorial position without
/// advancing the enumeration — "which slot assignment" and "which instance of
/// that slot" stay decoupled.
pub trait TemplateIterator: Cursor<Item = Program> {
    fn registry(&self) -> &TemplateRegistry;

    fn registry_mut(&mut self) -> &mut TemplateRegistry;

    /// Varies instance selection within the current combinatorial position.
    /// A no-op for generators whose `value()` is already randomized.
    fn randomize(&mut self);

    /// Forwards auxiliary construction to each generated instruction's
    /// situation. Returns `false` if construction cannot proceed (the
    /// default pass-through always succeeds).
    fn construct(
        &self,
        processor: &mut dyn Processor,
        context: &mut dyn GeneratorContext,
        template: &mut Program,
    ) -> bool {
        for instruction in template.iter_mut() {
            if let Some(situation) = instruction.situation_mut() {
                situation.init(processor, context);
            }
        }
        true
    }

    /// Forwards auxiliary-register release to each generated instruction's
    /// situation.
    fn use_registers(
        &self,
        processor: &mut dyn Processor,
        context: &mut dyn GeneratorContext,
        template: &mut Program,
    ) {
        for instruction in template.iter_mut() {
            if let Some(situation) = instruction.situation_mut() {
                situation.use_registers(processor, context);
            }
        }
    }
}
