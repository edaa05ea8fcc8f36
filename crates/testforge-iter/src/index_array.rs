//! k-combination enumeration: strictly increasing index tuples.

use crate::cursor::Cursor;
use crate::error::IterError;

/// Enumerates all strictly increasing arrays of length `size` drawn from
/// `[min, max]`, in lexicographic order.
///
/// Uses the classical next-combination step: find the rightmost position
/// whose value can still grow without colliding with the maximum reachable by
/// later positions, increment it, and reset everything to its right to
/// consecutive successors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexArrayIterator {
    min: i64,
    max: i64,
    size: usize,
    value: Vec<i64>,
    has_value: bool,
}

impl IndexArrayIterator {
    /// Creates a combination iterator; `size` must be positive and no larger
    /// than the range cardinality.
    pub fn new(min: i64, max: i64, size: usize) -> Result<Self, IterError> {
        if min > max {
            return Err(IterError::EmptyRange { min, max });
        }
        if size == 0 {
            return Err(IterError::ZeroSize);
        }
        let cardinality = (max - min + 1) as usize;
        if size > cardinality {
            return Err(IterError::SizeExceedsRange { size, cardinality });
        }

        Ok(Self {
            min,
            max,
            size,
            value: Vec::new(),
            has_value: false,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl Cursor for IndexArrayIterator {
    type Item = Vec<i64>;

    fn init(&mut self) {
        self.value = (0..self.size).map(|i| self.min + i as i64).collect();
        self.has_value = true;
    }

    fn has_value(&self) -> bool {
        self.has_value
    }

    fn value(&mut self) -> Vec<i64> {
        self.value.clone()
    }

    fn next(&mut self) {
        if !self.has_value {
            return;
        }
        for i in (0..self.size).rev() {
            // Highest value position i may take while leaving room for the
            // strictly increasing tail.
            let ceiling = self.max - (self.size - 1 - i) as i64;
            if self.value[i] < ceiling {
                self.value[i] += 1;
                for j in i + 1..self.size {
                    self.value[j] = self.value[j - 1] + 1;
                }
                return;
            }
        }
        self.has_value = false;
    }

    fn stop(&mut self) {
        self.has_value = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::collect_all;

    #[test]
    fn five_choose_two_in_lexicographic_order() {
        let mut it = IndexArrayIterator::new(0, 4, 2).unwrap();
        assert_eq!(
            collect_all(&mut it),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![0, 4],
                vec![1, 2],
                vec![1, 3],
                vec![1, 4],
                vec![2, 3],
                vec![2, 4],
                vec![3, 4],
            ]
        );
    }

    #[test]
    fn full_size_combination_is_single() {
        let mut it = IndexArrayIterator::new(3, 5, 3).unwrap();
        assert_eq!(collect_all(&mut it), vec![vec![3, 4, 5]]);
    }

    #[test]
    fn negative_bounds_supported() {
        let mut it = IndexArrayIterator::new(-2, 0, 2).unwrap();
        assert_eq!(
            collect_all(&mut it),
            vec![vec![-2, -1], vec![-2, 0], vec![-1, 0]]
        );
    }

    #[test]
    fn construction_rejects_oversized_combination() {
        assert_eq!(
            IndexArrayIterator::new(0, 4, 6).unwrap_err(),
            IterError::SizeExceedsRange {
                size: 6,
                cardinality: 5
            }
        );
    }

    #[test]
    fn construction_rejects_zero_size() {
        assert_eq!(
            IndexArrayIterator::new(0, 4, 0).unwrap_err(),
            IterError::ZeroSize
        );
    }

    #[test]
    fn next_after_exhaustion_is_noop() {
        let mut it = IndexArrayIterator::new(0, 1, 2).unwrap();
        it.init();
        it.next();
        assert!(!it.has_value());
        it.next();
        assert!(!it.has_value());
    }

    #[test]
    fn clone_freezes_position() {
        let mut it = IndexArrayIterator::new(0, 4, 2).unwrap();
        it.init();
        it.next();

        let mut copy = it.clone();
        it.next();

        assert_eq!(copy.value(), vec![0, 2]);
        assert_eq!(it.value(), vec![0, 3]);
    }
}
