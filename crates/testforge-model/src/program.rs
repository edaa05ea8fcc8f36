//! Ordered, appendable instruction sequences.

use crate::instruction::Instruction;

/// An ordered sequence of instructions — the output value of every template
/// generator.
///
/// A program is a value, not shared state: generators rebuild one from
/// scratch on each `value()` call, so callers may mutate what they receive
/// without affecting the generator.
#[derive(Debug, Clone, Default)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Creates an empty program.
    pub fn new() -> Self {
        Self {
            instructions: Vec::new(),
        }
    }

    /// Creates a single-instruction program.
    pub fn from_instruction(instruction: Instruction) -> Self {
        Self {
            instructions: vec![instruction],
        }
    }

    /// Appends one instruction.
    pub fn append(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Appends every instruction of another program, in order.
    pub fn append_program(&mut self, program: Program) {
        self.instructions.extend(program.instructions);
    }

    /// Number of instructions.
    pub fn count(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Instruction> {
        self.instructions.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Instruction> {
        self.instructions.iter_mut()
    }

    /// Removes all instructions.
    pub fn clear(&mut self) {
        self.instructions.clear();
    }

    /// Instruction names in program order, mostly for test assertions and
    /// logging.
    pub fn names(&self) -> Vec<&str> {
        self.instructions.iter().map(|i| i.name()).collect()
    }
}
