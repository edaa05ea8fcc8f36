//! Cartesian-product template generation with greedy coverage.

use std::collections::BTreeSet;

use log::{debug, warn};
use testforge_iter::Cursor;
use testforge_model::{Instruction, Program};

use crate::contract::TemplateIterator;
use crate::error::TemplateError;
use crate::registry::TemplateRegistry;

/// Enumerates fixed-size templates over the Cartesian product of equivalence
/// classes until every registered instruction has appeared in some emitted
/// template.
///
/// Each template cell holds a class index; an odometer advances the cells
/// (last cell fastest) while per-class consumption pointers record which
/// instructions have already been used. Once a pass begins with instructions
/// still uncovered, candidate templates that would cover nothing new are
/// skipped — the greedy coverage loop ends, and the iterator exhausts, when
/// no class has unconsumed instructions left.
#[derive(Debug, Clone)]
pub struct ProductTemplateIterator {
    registry: TemplateRegistry,
    template_size: usize,
    /// Class index per template cell.
    template: Vec<usize>,
    /// Next unconsumed instruction offset per class.
    index: Vec<usize>,
    has_value: bool,
    /// True while a pass runs with instructions still uncovered.
    uncovered_pass: bool,
}

impl ProductTemplateIterator {
    /// Creates a generator for templates of `template_size` instructions.
    pub fn new(template_size: usize) -> Result<Self, TemplateError> {
        if template_size == 0 {
            return Err(TemplateError::NonPositiveTemplateSize);
        }
        Ok(Self {
            registry: TemplateRegistry::new(),
            template_size,
            template: Vec::new(),
            index: Vec::new(),
            has_value: false,
            uncovered_pass: false,
        })
    }

    /// Single-instruction templates.
    pub fn single() -> Self {
        Self::new(1).expect("1 is positive")
    }

    pub fn template_size(&self) -> usize {
        self.template_size
    }

    /// The instruction each template cell currently selects; `None` for
    /// cells pointing at an empty class.
    pub(crate) fn current_selection(&self) -> Vec<Option<&Instruction>> {
        let mut local = vec![0usize; self.registry.count_classes()];
        self.template
            .iter()
            .map(|&j| {
                let class = self
                    .registry
                    .factorization()
                    .class(j)
                    .expect("cell points at a registered class");
                if class.is_empty() {
                    return None;
                }
                let offset = (self.index[j] + local[j]) % class.len();
                local[j] += 1;
                class.get(offset)
            })
            .collect()
    }

    /// Whether the current template still consumes an unconsumed instruction
    /// from at least one of its classes.
    fn covers_new(&self) -> bool {
        self.template
            .iter()
            .any(|&j| self.index[j] < self.registry.factorization().count_in_class(j))
    }

    /// One raw advance step; exposed to the order-constrained subtype.
    pub(crate) fn advance(&mut self) {
        if !self.has_value {
            return;
        }
        // Consume one instruction per referenced class occurrence.
        for &cell in &self.template {
            self.index[cell] += 1;
        }

        let class_count = self.registry.count_classes();
        let mut position = self.template.len() as i64 - 1;
        while position >= 0 {
            let i = position as usize;
            if self.template[i] < class_count - 1 {
                self.template[i] += 1;
                // During a coverage-incomplete pass, only accept templates
                // that still consume something new.
                if !self.uncovered_pass || self.covers_new() {
                    break;
                }
            } else {
                self.template[i] = 0;
            }
            position -= 1;
        }

        if position < 0 {
            // Full odometer wrap: decide whether another pass is needed.
            self.uncovered_pass = (0..class_count)
                .any(|c| self.index[c] < self.registry.factorization().count_in_class(c));
            if !self.uncovered_pass {
                debug!("all registered instructions covered; product space exhausted");
                self.has_value = false;
            }
        }
    }
}

impl Cursor for ProductTemplateIterator {
    type Item = Program;

    fn init(&mut self) {
        let class_count = self.registry.count_classes();
        self.template = vec![0; self.template_size];
        self.index = vec![0; class_count];
        self.has_value = class_count > 0;
        self.uncovered_pass = false;

        if (0..class_count).any(|c| self.registry.factorization().count_in_class(c) == 0) {
            warn!("product template iterator holds an empty equivalence class");
        }
    }

    fn has_value(&self) -> bool {
        self.has_value
    }

    /// Materializes the current template: cell with class `j` takes
    /// instruction `(index[j] + occurrence) % class_size(j)`, so repeated
    /// cells of one class pick different members within a single template.
    fn value(&mut self) -> Program {
        let mut program = Program::new();
        for selected in self.current_selection().into_iter().flatten() {
            program.append(selected.clone());
        }
        program
    }

    fn next(&mut self) {
        self.advance();
    }

    fn stop(&mut self) {
        self.has_value = false;
    }
}

impl TemplateIterator for ProductTemplateIterator {
    fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut TemplateRegistry {
        &mut self.registry
    }

    /// Advances the consumption pointer of every class referenced by the
    /// current template, re-sampling instance selection while the
    /// combinatorial position stays fixed.
    fn randomize(&mut self) {
        let referenced: BTreeSet<usize> = self.template.iter().copied().collect();
        for class in referenced {
            self.index[class] += 1;
        }
    }
}
