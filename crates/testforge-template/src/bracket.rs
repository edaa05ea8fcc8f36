//! Templates shaped as well-formed bracket structures.

use log::warn;
use testforge_iter::{Bracket, BracketExpressionIterator, Cursor};
use testforge_model::{BracketSituation, Instruction, Program, Situation};

use crate::contract::TemplateIterator;
use crate::error::TemplateError;
use crate::registry::TemplateRegistry;

/// Enumerates templates built from matched opening/closing instruction pairs.
///
/// Each template is one well-formed bracket expression from a wrapped
/// [`BracketExpressionIterator`]: every opening bracket becomes a clone of the
/// registered opening instruction, every closing bracket a clone of the
/// closing one, and an empty pair additionally receives a clone of the bracket
/// body program between the two. Opening and closing clones carrying a
/// [`BracketSituation`] are stamped with the pair's sequential number so the
/// caller can match them up later.
#[derive(Debug, Clone)]
pub struct BracketTemplateIterator {
    registry: TemplateRegistry,
    opening: Option<Instruction>,
    closing: Option<Instruction>,
    body: Option<Program>,
    expression: BracketExpressionIterator,
}

impl BracketTemplateIterator {
    /// Creates a generator over expressions with `number` bracket pairs and
    /// maximum nesting level within `[min_depth, max_depth]`.
    pub fn new(number: usize, min_depth: usize, max_depth: usize) -> Result<Self, TemplateError> {
        Ok(Self {
            registry: TemplateRegistry::new(),
            opening: None,
            closing: None,
            body: None,
            expression: BracketExpressionIterator::new(number, min_depth, max_depth)?,
        })
    }

    /// Nesting depth left unrestricted.
    pub fn unrestricted(number: usize) -> Result<Self, TemplateError> {
        Ok(Self {
            registry: TemplateRegistry::new(),
            opening: None,
            closing: None,
            body: None,
            expression: BracketExpressionIterator::unrestricted(number)?,
        })
    }

    /// Sets the instruction used for every opening bracket.
    pub fn register_opening_bracket(&mut self, instruction: Instruction) {
        self.registry.register(instruction.clone());
        self.opening = Some(instruction);
    }

    pub fn register_opening_bracket_with_situation(
        &mut self,
        mut instruction: Instruction,
        situation: Box<dyn Situation>,
    ) {
        instruction.set_situation(situation);
        self.register_opening_bracket(instruction);
    }

    /// Sets the instruction used for every closing bracket.
    pub fn register_closing_bracket(&mut self, instruction: Instruction) {
        self.registry.register(instruction.clone());
        self.closing = Some(instruction);
    }

    pub fn register_closing_bracket_with_situation(
        &mut self,
        mut instruction: Instruction,
        situation: Box<dyn Situation>,
    ) {
        instruction.set_situation(situation);
        self.register_closing_bracket(instruction);
    }

    /// Sets the program spliced inside every empty bracket pair.
    pub fn register_bracket_body(&mut self, body: Program) {
        self.body = Some(body);
    }

    /// Stamps the pair number when the instruction carries a
    /// [`BracketSituation`]; other situations are left alone.
    fn set_bracket_number(instruction: &mut Instruction, number: usize) {
        if let Some(situation) = instruction.situation_mut() {
            if let Some(bracket) = situation.as_any_mut().downcast_mut::<BracketSituation>() {
                bracket.set_bracket_number(number);
            }
        }
    }
}

impl Cursor for BracketTemplateIterator {
    type Item = Program;

    fn init(&mut self) {
        if self.opening.is_none() || self.closing.is_none() {
            warn!("bracket instructions are not registered, no templates will be produced");
            self.expression.stop();
            return;
        }
        self.expression.init();
    }

    fn has_value(&self) -> bool {
        self.expression.has_value()
    }

    fn value(&mut self) -> Program {
        let opening = self.opening.as_ref().expect("checked at init");
        let closing = self.closing.as_ref().expect("checked at init");
        let expression = self.expression.value();

        let mut template = Program::new();
        let mut next_number = 0;
        let mut stack: Vec<usize> = Vec::with_capacity(self.expression.number());

        for (i, bracket) in expression.iter().enumerate() {
            match bracket {
                Bracket::Open => {
                    let mut instruction = opening.clone();
                    Self::set_bracket_number(&mut instruction, next_number);
                    template.append(instruction);

                    stack.push(next_number);
                    next_number += 1;

                    let empty_pair = expression.get(i + 1) == Some(&Bracket::Close);
                    if empty_pair {
                        if let Some(body) = &self.body {
                            template.append_program(body.clone());
                        }
                    }
                }
                Bracket::Close => {
                    let mut instruction = closing.clone();
                    let number = stack.pop().expect("expression is well formed");
                    Self::set_bracket_number(&mut instruction, number);
                    template.append(instruction);
                }
            }
        }
        template
    }

    fn next(&mut self) {
        self.expression.next();
    }

    fn stop(&mut self) {
        self.expression.stop();
    }
}

impl TemplateIterator for BracketTemplateIterator {
    fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut TemplateRegistry {
        &mut self.registry
    }

    /// A no-op: the structure is fully determined by the bracket expression.
    fn randomize(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bracketed() -> BracketTemplateIterator {
        let mut it = BracketTemplateIterator::unrestricted(2).unwrap();
        it.register_opening_bracket_with_situation(
            Instruction::new("push"),
            Box::new(BracketSituation::new()),
        );
        it.register_closing_bracket_with_situation(
            Instruction::new("pop"),
            Box::new(BracketSituation::new()),
        );
        it.register_bracket_body(Program::from_instruction(Instruction::new("work")));
        it
    }

    fn drain_names(it: &mut BracketTemplateIterator) -> Vec<Vec<String>> {
        let mut out = Vec::new();
        it.init();
        while it.has_value() {
            out.push(
                it.value()
                    .names()
                    .into_iter()
                    .map(str::to_owned)
                    .collect(),
            );
            it.next();
        }
        out
    }

    #[test]
    fn body_spliced_into_empty_pairs_only() {
        let mut it = bracketed();

        // Expressions for two unrestricted pairs are ()() then (()).
        assert_eq!(
            drain_names(&mut it),
            vec![
                vec!["push", "work", "pop", "push", "work", "pop"],
                vec!["push", "push", "work", "pop", "pop"],
            ]
        );
    }

    #[test]
    fn pair_numbers_match_across_open_and_close() {
        let mut it = bracketed();
        it.init();
        it.next(); // (())

        let mut template = it.value();
        let number_of = |instruction: &mut Instruction| {
            instruction
                .situation_mut()
                .unwrap()
                .as_any_mut()
                .downcast_mut::<BracketSituation>()
                .unwrap()
                .bracket_number()
        };

        // push(0) push(1) work pop(1) pop(0)
        assert_eq!(number_of(template.get_mut(0).unwrap()), 0);
        assert_eq!(number_of(template.get_mut(1).unwrap()), 1);
        assert_eq!(number_of(template.get_mut(3).unwrap()), 1);
        assert_eq!(number_of(template.get_mut(4).unwrap()), 0);
    }

    #[test]
    fn missing_brackets_produce_nothing() {
        let mut it = BracketTemplateIterator::unrestricted(2).unwrap();
        it.init();
        assert!(!it.has_value());
    }

    #[test]
    fn no_body_means_bare_pairs() {
        let mut it = BracketTemplateIterator::unrestricted(1).unwrap();
        it.register_opening_bracket(Instruction::new("push"));
        it.register_closing_bracket(Instruction::new("pop"));

        assert_eq!(drain_names(&mut it), vec![vec!["push", "pop"]]);
    }

    #[test]
    fn depth_bounds_flow_through() {
        assert!(matches!(
            BracketTemplateIterator::new(2, 3, 1),
            Err(TemplateError::Bracket(_))
        ));
    }

    #[test]
    fn randomize_keeps_the_template() {
        let mut it = bracketed();
        it.init();
        let before = it.value().names().join(" ");
        it.randomize();
        assert_eq!(it.value().names().join(" "), before);
    }

    #[test]
    fn clone_continues_independently() {
        let mut it = bracketed();
        it.init();

        let mut copy = it.clone();
        it.next();

        assert_eq!(copy.value().names().len(), 6); // still at ()()
        assert_eq!(it.value().names().len(), 5); // advanced to (())
    }
}
