//! Multiset template generation: deterministic count vectors, randomized
//! instance selection and ordering.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use testforge_iter::Cursor;
use testforge_model::{Instruction, Program};

use crate::contract::TemplateIterator;
use crate::error::TemplateError;
use crate::registry::TemplateRegistry;

/// Enumerates templates as multisets over the equivalence classes.
///
/// The combinatorial dimension is the repetition-count vector: each class
/// contributes between `min_repetition` and `max_repetition` instances, and
/// only vectors whose total lies in `[min_size, max_size]` are emitted.
/// Within one count vector, `value()` samples concrete instructions uniformly
/// at random with replacement and shuffles the whole multiset into final
/// order, so repeated calls at one position yield different templates. The
/// random source is a [`ChaCha8Rng`] seeded by the caller, keeping runs
/// reproducible.
#[derive(Debug, Clone)]
pub struct MultisetTemplateIterator {
    registry: TemplateRegistry,
    min_repetition: usize,
    max_repetition: usize,
    min_size: usize,
    max_size: usize,
    /// Instances per class for the current template.
    count: Vec<usize>,
    has_value: bool,
    rng: ChaCha8Rng,
}

impl MultisetTemplateIterator {
    /// Creates a generator with per-class repetition bounds and total-size
    /// bounds.
    pub fn new(
        min_repetition: usize,
        max_repetition: usize,
        min_size: usize,
        max_size: usize,
        seed: u64,
    ) -> Result<Self, TemplateError> {
        if min_repetition > max_repetition {
            return Err(TemplateError::InvalidRepetitionBounds {
                min: min_repetition,
                max: max_repetition,
            });
        }
        if min_size > max_size {
            return Err(TemplateError::InvalidSizeBounds {
                min: min_size,
                max: max_size,
            });
        }
        Ok(Self {
            registry: TemplateRegistry::new(),
            min_repetition,
            max_repetition,
            min_size,
            max_size,
            count: Vec::new(),
            has_value: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Fixed total template size.
    pub fn with_size(
        min_repetition: usize,
        max_repetition: usize,
        size: usize,
        seed: u64,
    ) -> Result<Self, TemplateError> {
        Self::new(min_repetition, max_repetition, size, size, seed)
    }

    /// Template size left unbounded.
    pub fn unbounded(
        min_repetition: usize,
        max_repetition: usize,
        seed: u64,
    ) -> Result<Self, TemplateError> {
        Self::new(min_repetition, max_repetition, 0, usize::MAX, seed)
    }

    pub fn min_repetition(&self) -> usize {
        self.min_repetition
    }

    pub fn max_repetition(&self) -> usize {
        self.max_repetition
    }

    pub fn min_size(&self) -> usize {
        self.min_size
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Bound setters take effect at the next `init()`.
    pub fn set_min_repetition(&mut self, min_repetition: usize) {
        self.min_repetition = min_repetition;
    }

    pub fn set_max_repetition(&mut self, max_repetition: usize) {
        self.max_repetition = max_repetition;
    }

    pub fn set_min_size(&mut self, min_size: usize) {
        self.min_size = min_size;
    }

    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size;
    }

    pub fn set_size(&mut self, size: usize) {
        self.min_size = size;
        self.max_size = size;
    }

    /// Total size of the current count vector.
    fn size(&self) -> usize {
        self.count.iter().sum()
    }

    fn size_in_bounds(&self) -> bool {
        let size = self.size();
        self.min_size <= size && size <= self.max_size
    }

    /// One odometer step over the count vector, ignoring size bounds.
    fn step(&mut self) {
        for i in (0..self.count.len()).rev() {
            if self.count[i] < self.max_repetition {
                self.count[i] += 1;
                return;
            }
            self.count[i] = self.min_repetition;
        }
        self.has_value = false;
    }

    fn seek_sized(&mut self) {
        while self.has_value && !self.size_in_bounds() {
            self.step();
        }
    }
}

impl Cursor for MultisetTemplateIterator {
    type Item = Program;

    fn init(&mut self) {
        let class_count = self.registry.count_classes();
        self.count = vec![self.min_repetition; class_count];

        // Even maximal repetitions cannot reach the minimum size.
        let capacity = class_count.saturating_mul(self.max_repetition);
        if capacity < self.min_size {
            debug!(
                "multiset space is empty: capacity {} < min_size {}",
                capacity, self.min_size
            );
            self.has_value = false;
            return;
        }

        self.has_value = true;
        self.seek_sized();
    }

    fn has_value(&self) -> bool {
        self.has_value
    }

    /// Samples `count[c]` instructions per class with replacement, then
    /// shuffles the pooled multiset into final template order.
    fn value(&mut self) -> Program {
        let mut pool: Vec<Instruction> = Vec::with_capacity(self.size());
        for (class_index, &instances) in self.count.iter().enumerate() {
            let class = self
                .registry
                .factorization()
                .class(class_index)
                .expect("count vector matches class count");
            if class.is_empty() {
                continue;
            }
            for _ in 0..instances {
                let pick = self.rng.gen_range(0..class.len());
                pool.push(class.get(pick).expect("pick below class len").clone());
            }
        }

        let mut program = Program::new();
        while !pool.is_empty() {
            let pick = self.rng.gen_range(0..pool.len());
            program.append(pool.remove(pick));
        }
        program
    }

    fn next(&mut self) {
        if !self.has_value {
            return;
        }
        self.step();
        self.seek_sized();
    }

    fn stop(&mut self) {
        self.has_value = false;
    }
}

impl TemplateIterator for MultisetTemplateIterator {
    fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut TemplateRegistry {
        &mut self.registry
    }

    /// A no-op: `value()` itself is randomized per call.
    fn randomize(&mut self) {}
}

/// Multisets restricted to at most one instance per class — plain subsets of
/// the equivalence classes.
#[derive(Debug, Clone)]
pub struct SetTemplateIterator {
    inner: MultisetTemplateIterator,
}

impl SetTemplateIterator {
    pub fn new(min_size: usize, max_size: usize, seed: u64) -> Result<Self, TemplateError> {
        Ok(Self {
            inner: MultisetTemplateIterator::new(0, 1, min_size, max_size, seed)?,
        })
    }

    /// Subsets of any size, including the empty one.
    pub fn unbounded(seed: u64) -> Self {
        Self {
            inner: MultisetTemplateIterator::unbounded(0, 1, seed)
                .expect("0 <= 1 and 0 <= usize::MAX"),
        }
    }
}

impl Cursor for SetTemplateIterator {
    type Item = Program;

    fn init(&mut self) {
        self.inner.init();
    }

    fn has_value(&self) -> bool {
        self.inner.has_value()
    }

    fn value(&mut self) -> Program {
        self.inner.value()
    }

    fn next(&mut self) {
        self.inner.next();
    }

    fn stop(&mut self) {
        self.inner.stop();
    }
}

impl TemplateIterator for SetTemplateIterator {
    fn registry(&self) -> &TemplateRegistry {
        self.inner.registry()
    }

    fn registry_mut(&mut self) -> &mut TemplateRegistry {
        self.inner.registry_mut()
    }

    fn randomize(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lengths(it: &mut MultisetTemplateIterator) -> Vec<usize> {
        let mut out = Vec::new();
        it.init();
        while it.has_value() {
            out.push(it.value().count());
            it.next();
        }
        out
    }

    #[test]
    fn sizes_stay_within_bounds() {
        let mut it = MultisetTemplateIterator::new(0, 2, 1, 3, 42).unwrap();
        it.registry_mut()
            .register_in_class("c", Instruction::new("only"));

        // One class of size 1: count vectors (1) and (2).
        assert_eq!(lengths(&mut it), vec![1, 2]);
    }

    #[test]
    fn count_vectors_filtered_not_errored() {
        let mut it = MultisetTemplateIterator::new(0, 3, 2, 2, 7).unwrap();
        it.registry_mut()
            .register_in_class("a", Instruction::new("a"));
        it.registry_mut()
            .register_in_class("b", Instruction::new("b"));

        // Vectors summing to exactly 2 out of the 4x4 grid.
        let emitted = lengths(&mut it);
        assert_eq!(emitted.len(), 3); // (0,2), (1,1), (2,0)
        assert!(emitted.iter().all(|&n| n == 2));
    }

    #[test]
    fn unreachable_min_size_is_empty() {
        let mut it = MultisetTemplateIterator::new(0, 1, 5, 9, 1).unwrap();
        it.registry_mut()
            .register_in_class("c", Instruction::new("x"));

        it.init();
        assert!(!it.has_value());
    }

    #[test]
    fn value_is_reshuffled_per_call_but_seed_reproducible() {
        let build = || {
            let mut it = MultisetTemplateIterator::with_size(2, 2, 4, 99).unwrap();
            for name in ["a1", "a2", "a3"] {
                it.registry_mut().register_in_class("a", Instruction::new(name));
            }
            for name in ["b1", "b2", "b3"] {
                it.registry_mut().register_in_class("b", Instruction::new(name));
            }
            it
        };

        let mut first = build();
        let mut second = build();
        first.init();
        second.init();

        // Same seed, same call sequence: identical templates.
        assert_eq!(first.value().names(), second.value().names());
        assert_eq!(first.value().names(), second.value().names());
    }

    #[test]
    fn repetition_bounds_validated() {
        assert_eq!(
            MultisetTemplateIterator::new(2, 1, 0, 4, 0).unwrap_err(),
            TemplateError::InvalidRepetitionBounds { min: 2, max: 1 }
        );
        assert_eq!(
            MultisetTemplateIterator::new(0, 1, 4, 2, 0).unwrap_err(),
            TemplateError::InvalidSizeBounds { min: 4, max: 2 }
        );
    }

    #[test]
    fn set_iterator_takes_each_class_at_most_once() {
        let mut it = SetTemplateIterator::new(1, 2, 5).unwrap();
        it.registry_mut()
            .register_in_class("a", Instruction::new("a"));
        it.registry_mut()
            .register_in_class("b", Instruction::new("b"));

        it.init();
        let mut emitted = 0;
        while it.has_value() {
            let program = it.value();
            assert!(program.count() >= 1 && program.count() <= 2);

            let mut names: Vec<&str> = program.names();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), program.count());

            emitted += 1;
            it.next();
        }
        // Count vectors (0,1), (1,0), (1,1).
        assert_eq!(emitted, 3);
    }

    #[test]
    fn bound_setters_take_effect_at_reinit() {
        let mut it = MultisetTemplateIterator::new(0, 2, 1, 1, 11).unwrap();
        it.registry_mut()
            .register_in_class("c", Instruction::new("x"));

        // Count vectors summing to exactly 1.
        assert_eq!(lengths(&mut it), vec![1]);

        it.set_size(2);
        assert_eq!(lengths(&mut it), vec![2]);

        it.set_max_repetition(3);
        it.set_min_size(2);
        it.set_max_size(3);
        assert_eq!(lengths(&mut it), vec![2, 3]);
    }

    #[test]
    fn stop_then_next_is_noop() {
        let mut it = MultisetTemplateIterator::unbounded(0, 1, 3).unwrap();
        it.registry_mut()
            .register_in_class("c", Instruction::new("x"));
        it.init();
        it.stop();
        it.next();
        assert!(!it.has_value());
    }
}
