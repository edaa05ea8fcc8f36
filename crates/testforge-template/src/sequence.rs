//! Order-constrained product template generation.

use testforge_iter::Cursor;
use testforge_model::Program;

use crate::contract::TemplateIterator;
use crate::error::TemplateError;
use crate::product::ProductTemplateIterator;
use crate::registry::TemplateRegistry;

/// A [`ProductTemplateIterator`] that additionally honors the registry's
/// order-constraint table: a template is emitted only if every position holds
/// an instruction allowed at that position.
///
/// Non-conforming templates are filtered by retrying the underlying advance;
/// the retries terminate because each one strictly advances the finite base
/// enumeration.
#[derive(Debug, Clone)]
pub struct SequenceTemplateIterator {
    inner: ProductTemplateIterator,
}

impl SequenceTemplateIterator {
    pub fn new(template_size: usize) -> Result<Self, TemplateError> {
        Ok(Self {
            inner: ProductTemplateIterator::new(template_size)?,
        })
    }

    pub fn template_size(&self) -> usize {
        self.inner.template_size()
    }

    /// Whether every cell of the current template selects an instruction
    /// permitted at that position.
    fn conforms(&self) -> bool {
        self.inner
            .current_selection()
            .iter()
            .enumerate()
            .all(|(position, selected)| match selected {
                Some(instruction) => self
                    .inner
                    .registry()
                    .position_allowed(instruction.name(), position),
                None => true,
            })
    }

    fn seek_conforming(&mut self) {
        while self.inner.has_value() && !self.conforms() {
            self.inner.advance();
        }
    }
}

impl Cursor for SequenceTemplateIterator {
    type Item = Program;

    fn init(&mut self) {
        self.inner.init();
        self.seek_conforming();
    }

    fn has_value(&self) -> bool {
        self.inner.has_value()
    }

    fn value(&mut self) -> Program {
        self.inner.value()
    }

    fn next(&mut self) {
        if !self.inner.has_value() {
            return;
        }
        self.inner.advance();
        self.seek_conforming();
    }

    fn stop(&mut self) {
        self.inner.stop();
    }
}

impl TemplateIterator for SequenceTemplateIterator {
    fn registry(&self) -> &TemplateRegistry {
        self.inner.registry()
    }

    fn registry_mut(&mut self) -> &mut TemplateRegistry {
        self.inner.registry_mut()
    }

    fn randomize(&mut self) {
        self.inner.randomize();
    }
}
