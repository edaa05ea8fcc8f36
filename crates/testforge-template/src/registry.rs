//! Instruction registration shared by every template generator.
//!
//! A [`TemplateRegistry`] pairs the equivalence-class factorization with the
//! positional order-constraint table. Ordered maps keep all lookups
//! deterministic.

use std::collections::{BTreeMap, BTreeSet};

use testforge_model::{Instruction, Situation};

use crate::equivalence::{EquivalenceClass, InstructionFactorization};

/// Equivalence classes plus the order-constraint table.
///
/// The table maps an instruction name to the set of template positions it may
/// occupy; no entry means the instruction is unconstrained. Entries accumulate
/// by set union across registrations and are never narrowed.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    factorization: InstructionFactorization,
    order: BTreeMap<String, BTreeSet<usize>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn factorization(&self) -> &InstructionFactorization {
        &self.factorization
    }

    pub fn count_classes(&self) -> usize {
        self.factorization.count_classes()
    }

    pub fn count_instructions(&self) -> usize {
        self.factorization.count_instructions()
    }

    /// Registers an instruction into its own anonymous class.
    pub fn register(&mut self, instruction: Instruction) {
        self.factorization.register(instruction);
    }

    /// Registers an instruction, attaching a situation first.
    pub fn register_with_situation(
        &mut self,
        mut instruction: Instruction,
        situation: Box<dyn Situation>,
    ) {
        instruction.set_situation(situation);
        self.register(instruction);
    }

    /// Registers an instruction into the named class.
    pub fn register_in_class(&mut self, class: &str, instruction: Instruction) {
        self.factorization.register_in_class(class, instruction);
    }

    /// Registers an anonymous instruction restricted to the given template
    /// positions; an empty slice means unconstrained.
    pub fn register_at(&mut self, positions: &[usize], instruction: Instruction) {
        self.allow_positions(instruction.name(), positions);
        self.register(instruction);
    }

    /// Registers into a named class, restricted to the given positions.
    pub fn register_in_class_at(
        &mut self,
        class: &str,
        positions: &[usize],
        instruction: Instruction,
    ) {
        self.allow_positions(instruction.name(), positions);
        self.register_in_class(class, instruction);
    }

    /// Registers a whole class batch.
    pub fn register_class(&mut self, class: EquivalenceClass) {
        self.factorization.register_class(class);
    }

    /// Registers a class batch restricted to the given positions.
    pub fn register_class_at(&mut self, positions: &[usize], class: EquivalenceClass) {
        for instruction in class.iter() {
            self.allow_positions(instruction.name(), positions);
        }
        self.register_class(class);
    }

    /// Re-registers every instruction of another registry, keeping each
    /// instruction's class tag (untagged instructions become anonymous).
    pub fn absorb(&mut self, other: &TemplateRegistry) {
        for index in 0..other.count_instructions() {
            let instruction = other
                .factorization
                .instruction(index)
                .expect("index below count")
                .clone();
            match instruction.equivalence_class().map(str::to_string) {
                Some(class) => self.register_in_class(&class, instruction),
                None => self.register(instruction),
            }
        }
    }

    /// Like [`absorb`](Self::absorb), additionally pinning every absorbed
    /// instruction to the given positions.
    pub fn absorb_at(&mut self, positions: &[usize], other: &TemplateRegistry) {
        for index in 0..other.count_instructions() {
            let name = other
                .factorization
                .instruction(index)
                .expect("index below count")
                .name()
                .to_string();
            self.allow_positions(&name, positions);
        }
        self.absorb(other);
    }

    /// Widens the allowed-position set of an instruction name (set union).
    pub fn allow_positions(&mut self, name: &str, positions: &[usize]) {
        if positions.is_empty() {
            return;
        }
        self.order
            .entry(name.to_string())
            .or_default()
            .extend(positions.iter().copied());
    }

    /// Allowed positions for an instruction name; `None` means any position.
    pub fn allowed_positions(&self, name: &str) -> Option<&BTreeSet<usize>> {
        self.order.get(name)
    }

    /// Whether the named instruction may occupy the given template position.
    pub fn position_allowed(&self, name: &str, position: usize) -> bool {
        self.order
            .get(name)
            .map_or(true, |set| set.contains(&position))
    }

    /// Removes all registered instructions and constraints.
    pub fn clear(&mut self) {
        self.factorization.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconstrained_instruction_fits_anywhere() {
        let mut registry = TemplateRegistry::new();
        registry.register(Instruction::new("nop"));

        assert!(registry.position_allowed("nop", 0));
        assert!(registry.position_allowed("nop", 17));
        assert!(registry.allowed_positions("nop").is_none());
    }

    #[test]
    fn positions_accumulate_by_union() {
        let mut registry = TemplateRegistry::new();
        registry.register_at(&[0], Instruction::new("sync"));
        registry.register_at(&[2, 3], Instruction::new("sync"));

        let allowed = registry.allowed_positions("sync").unwrap();
        assert_eq!(allowed.iter().copied().collect::<Vec<_>>(), vec![0, 2, 3]);
        assert!(!registry.position_allowed("sync", 1));
    }

    #[test]
    fn empty_position_slice_means_unconstrained() {
        let mut registry = TemplateRegistry::new();
        registry.register_at(&[], Instruction::new("nop"));
        assert!(registry.allowed_positions("nop").is_none());
    }

    #[test]
    fn absorb_keeps_class_tags() {
        let mut source = TemplateRegistry::new();
        source.register_in_class("alu", Instruction::new("add"));
        source.register_in_class("alu", Instruction::new("sub"));
        source.register(Instruction::new("nop"));

        let mut target = TemplateRegistry::new();
        target.absorb(&source);

        assert_eq!(target.count_classes(), 2);
        assert_eq!(
            target
                .factorization()
                .class_by_name("alu")
                .map(|c| c.len()),
            Some(2)
        );
    }

    #[test]
    fn absorb_at_pins_positions() {
        let mut source = TemplateRegistry::new();
        source.register_in_class("mem", Instruction::new("lw"));

        let mut target = TemplateRegistry::new();
        target.absorb_at(&[1], &source);

        assert!(target.position_allowed("lw", 1));
        assert!(!target.position_allowed("lw", 0));
    }

    #[test]
    fn clear_resets_both_tables() {
        let mut registry = TemplateRegistry::new();
        registry.register_at(&[0], Instruction::new("sync"));
        registry.clear();

        assert_eq!(registry.count_instructions(), 0);
        assert!(registry.allowed_positions("sync").is_none());
    }
}
