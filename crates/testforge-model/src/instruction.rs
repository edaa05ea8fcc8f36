//! The atomic test action arranged by template generators.

use crate::situation::Situation;

/// An instruction registered with a template generator.
///
/// Instructions are pure payload to the enumeration core: a name, a mutable
/// equivalence-class tag, an optional [`Situation`], and cloning. Generators
/// never share instruction objects between emitted templates — `value()`
/// appends clones, so callers own what they receive.
#[derive(Debug, Clone, Default)]
pub struct Instruction {
    name: String,
    equivalence_class: Option<String>,
    comment: Option<String>,
    situation: Option<Box<dyn Situation>>,
}

impl Instruction {
    /// Creates an instruction with the given name and no situation.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            equivalence_class: None,
            comment: None,
            situation: None,
        }
    }

    /// Attaches a situation, builder-style.
    pub fn with_situation(mut self, situation: Box<dyn Situation>) -> Self {
        self.situation = Some(situation);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The equivalence class this instruction was registered into, if any.
    pub fn equivalence_class(&self) -> Option<&str> {
        self.equivalence_class.as_deref()
    }

    pub fn set_equivalence_class(&mut self, class: impl Into<String>) {
        self.equivalence_class = Some(class.into());
    }

    /// Free-text annotation carried through to generated templates.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = Some(comment.into());
    }

    pub fn situation(&self) -> Option<&dyn Situation> {
        self.situation.as_deref()
    }

    pub fn situation_mut(&mut self) -> Option<&mut (dyn Situation + 'static)> {
        self.situation.as_deref_mut()
    }

    pub fn set_situation(&mut self, situation: Box<dyn Situation>) {
        self.situation = Some(situation);
    }
}
