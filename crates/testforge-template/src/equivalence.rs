//! Equivalence classes of interchangeable instructions.
//!
//! What makes two instructions "equivalent" is entirely the caller's call;
//! this module only groups what was registered. An
//! [`InstructionFactorization`] owns an ordered list of classes: named
//! classes merge on repeated registration, anonymous classes never do.

use std::collections::BTreeMap;

use testforge_model::Instruction;

/// An ordered, optionally named group of interchangeable instructions.
#[derive(Debug, Clone, Default)]
pub struct EquivalenceClass {
    name: Option<String>,
    instructions: Vec<Instruction>,
}

impl EquivalenceClass {
    /// Creates an empty anonymous class.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Creates an empty named class.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            instructions: Vec::new(),
        }
    }

    /// Creates an anonymous class holding a single instruction.
    pub fn from_instruction(instruction: Instruction) -> Self {
        Self {
            name: None,
            instructions: vec![instruction],
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }

    /// Appends an instruction; a named class stamps its name onto the
    /// instruction's class tag.
    pub fn add(&mut self, mut instruction: Instruction) {
        if let Some(name) = &self.name {
            instruction.set_equivalence_class(name.clone());
        }
        self.instructions.push(instruction);
    }

    /// Appends every instruction of another class, in order.
    pub fn add_all(&mut self, other: EquivalenceClass) {
        for instruction in other.instructions {
            self.add(instruction);
        }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// First instruction with the given name, if any.
    pub fn instruction_by_name(&self, name: &str) -> Option<&Instruction> {
        self.instructions.iter().find(|i| i.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter()
    }
}

/// Ordered collection of equivalence classes with name lookup.
///
/// Append-only: classes accumulate until an explicit [`clear`](Self::clear).
/// Name uniqueness is enforced only among named classes — registering into an
/// existing name merges, while anonymous classes always append.
#[derive(Debug, Clone, Default)]
pub struct InstructionFactorization {
    classes: Vec<EquivalenceClass>,
    name_to_index: BTreeMap<String, usize>,
}

impl InstructionFactorization {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of equivalence classes.
    pub fn count_classes(&self) -> usize {
        self.classes.len()
    }

    /// Total number of registered instructions across all classes.
    pub fn count_instructions(&self) -> usize {
        self.classes.iter().map(|c| c.len()).sum()
    }

    /// Number of instructions in one class.
    pub fn count_in_class(&self, index: usize) -> usize {
        self.classes.get(index).map_or(0, |c| c.len())
    }

    pub fn class(&self, index: usize) -> Option<&EquivalenceClass> {
        self.classes.get(index)
    }

    pub fn class_by_name(&self, name: &str) -> Option<&EquivalenceClass> {
        self.name_to_index.get(name).map(|&i| &self.classes[i])
    }

    /// Instruction by flat index across classes, in registration order.
    pub fn instruction(&self, mut index: usize) -> Option<&Instruction> {
        for class in &self.classes {
            if index < class.len() {
                return class.get(index);
            }
            index -= class.len();
        }
        None
    }

    /// Instruction by class index and offset within the class.
    pub fn instruction_in(&self, class: usize, index: usize) -> Option<&Instruction> {
        self.classes.get(class).and_then(|c| c.get(index))
    }

    /// Instruction by class name and instruction name.
    pub fn instruction_by_name(&self, class: &str, name: &str) -> Option<&Instruction> {
        self.class_by_name(class)
            .and_then(|c| c.instruction_by_name(name))
    }

    /// Registers one instruction into its own fresh anonymous class.
    pub fn register(&mut self, instruction: Instruction) {
        self.classes
            .push(EquivalenceClass::from_instruction(instruction));
    }

    /// Registers one instruction into the named class, creating it on first
    /// use.
    pub fn register_in_class(&mut self, class: &str, instruction: Instruction) {
        if class.is_empty() {
            self.register(instruction);
            return;
        }
        let index = *self
            .name_to_index
            .entry(class.to_string())
            .or_insert_with(|| {
                self.classes.push(EquivalenceClass::named(class));
                self.classes.len() - 1
            });
        self.classes[index].add(instruction);
    }

    /// Registers a batch: a named class merges into its namesake, an
    /// anonymous class appends as-is.
    pub fn register_class(&mut self, class: EquivalenceClass) {
        match class.name() {
            None => self.classes.push(class),
            Some(name) => {
                let index = *self
                    .name_to_index
                    .entry(name.to_string())
                    .or_insert_with(|| {
                        self.classes.push(EquivalenceClass::named(name));
                        self.classes.len() - 1
                    });
                self.classes[index].add_all(class);
            }
        }
    }

    /// Removes every class and instruction.
    pub fn clear(&mut self) {
        self.classes.clear();
        self.name_to_index.clear();
    }
}
