//! Well-formed bracket expressions of bounded nesting depth.
//!
//! A bracket expression with `number` pairs is encoded compactly as a level
//! sequence `depth[0..number]`: `depth[i]` is the nesting level of the i-th
//! opening bracket, constrained to `depth[i] <= depth[i-1] + 1` (restricted
//! growth). Level sequences are in bijection with the well-formed bracket
//! strings of `number` pairs, so stepping the level sequence enumerates
//! exactly the Catalan family, and filtering on the maximum level bounds the
//! nesting depth.

use log::debug;

use crate::cursor::Cursor;
use crate::error::IterError;

/// One half of a bracket pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Open,
    Close,
}

/// Enumerates bracket strings of `number` pairs whose maximum nesting level
/// lies in `[min_depth, max_depth]` (level 0 is the outermost).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketExpressionIterator {
    number: usize,
    min_depth: usize,
    max_depth: usize,
    depth: Vec<usize>,
    has_value: bool,
}

impl BracketExpressionIterator {
    /// Creates an iterator over `number` bracket pairs with the given depth
    /// bounds.
    pub fn new(number: usize, min_depth: usize, max_depth: usize) -> Result<Self, IterError> {
        if number == 0 {
            return Err(IterError::NoBrackets);
        }
        if min_depth > max_depth {
            return Err(IterError::InvalidDepthBounds {
                min: min_depth,
                max: max_depth,
            });
        }

        Ok(Self {
            number,
            min_depth,
            max_depth,
            depth: Vec::new(),
            has_value: false,
        })
    }

    /// Depth is not restricted: every expression with `number` pairs.
    pub fn unrestricted(number: usize) -> Result<Self, IterError> {
        Self::new(number, 0, number.saturating_sub(1))
    }

    pub fn number(&self) -> usize {
        self.number
    }

    /// The current level sequence; exposed for wrappers that want the raw
    /// encoding instead of the bracket string.
    pub fn levels(&self) -> &[usize] {
        &self.depth
    }

    fn max_level(&self) -> usize {
        self.depth.iter().copied().max().unwrap_or(0)
    }

    fn depth_in_bounds(&self) -> bool {
        let level = self.max_level();
        self.min_depth <= level && level <= self.max_depth
    }

    /// One admissible level-sequence increment, ignoring depth bounds.
    fn step(&mut self) {
        for i in (0..self.number).rev() {
            let ceiling = if i == 0 { 0 } else { self.depth[i - 1] + 1 };
            if self.depth[i] < ceiling {
                self.depth[i] += 1;
                for level in &mut self.depth[i + 1..] {
                    *level = 0;
                }
                return;
            }
        }
        self.has_value = false;
    }

    /// Steps until the depth bounds hold or the space runs out.
    fn seek_admissible(&mut self) {
        while self.has_value && !self.depth_in_bounds() {
            self.step();
        }
    }
}

impl Cursor for BracketExpressionIterator {
    type Item = Vec<Bracket>;

    fn init(&mut self) {
        self.depth = vec![0; self.number];
        self.has_value = true;
        self.seek_admissible();
        if !self.has_value {
            debug!(
                "no bracket expression of {} pairs has depth in [{}, {}]",
                self.number, self.min_depth, self.max_depth
            );
        }
    }

    fn has_value(&self) -> bool {
        self.has_value
    }

    /// Reconstructs the bracket string from the level sequence: before a new
    /// opening bracket at level `d`, every open bracket at level `>= d` is
    /// closed first.
    fn value(&mut self) -> Vec<Bracket> {
        let mut expression = Vec::with_capacity(2 * self.number);
        let mut open_levels: Vec<usize> = Vec::with_capacity(self.number);

        for &level in &self.depth {
            while open_levels.last().is_some_and(|&top| top >= level) {
                expression.push(Bracket::Close);
                open_levels.pop();
            }
            expression.push(Bracket::Open);
            open_levels.push(level);
        }
        while open_levels.pop().is_some() {
            expression.push(Bracket::Close);
        }

        expression
    }

    fn next(&mut self) {
        if !self.has_value {
            return;
        }
        self.step();
        self.seek_admissible();
    }

    fn stop(&mut self) {
        self.has_value = false;
    }
}
