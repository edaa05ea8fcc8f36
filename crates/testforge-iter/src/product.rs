//! Cartesian product of child cursors.

use log::debug;

use crate::cursor::{BoxedCursor, CloneCursor, Cursor};

/// Enumerates the Cartesian product of its children, rightmost child fastest.
///
/// This is a mixed-radix odometer generalized to children of unequal, even
/// heterogeneous cardinalities; children are driven purely through the
/// [`Cursor`] contract. An empty child space makes the whole product empty.
pub struct Product<T> {
    children: Vec<BoxedCursor<T>>,
    has_value: bool,
}

impl<T: 'static> Clone for Product<T> {
    fn clone(&self) -> Self {
        Self {
            children: self.children.clone(),
            has_value: self.has_value,
        }
    }
}

impl<T: 'static> Default for Product<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Product<T> {
    /// Creates a product with no children yet.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            has_value: false,
        }
    }

    /// Appends a child; its values occupy the next tuple slot.
    pub fn push(&mut self, child: impl CloneCursor<T> + 'static) {
        self.children.push(Box::new(child));
    }

    /// Appends an already boxed child.
    pub fn push_boxed(&mut self, child: BoxedCursor<T>) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T: 'static> Cursor for Product<T> {
    type Item = Vec<T>;

    fn init(&mut self) {
        self.has_value = true;
        for child in &mut self.children {
            child.init();
            if !child.has_value() {
                self.has_value = false;
            }
        }
        if !self.has_value {
            debug!("product space is empty: some child has no values");
        }
    }

    fn has_value(&self) -> bool {
        self.has_value
    }

    /// The tuple of children's current values, in registration order.
    fn value(&mut self) -> Vec<T> {
        self.children.iter_mut().map(|c| c.value()).collect()
    }

    fn next(&mut self) {
        if !self.has_value {
            return;
        }
        // Odometer increment: advance the rightmost live child; wrap it and
        // carry leftward when it exhausts.
        for child in self.children.iter_mut().rev() {
            if child.has_value() {
                child.next();
                if child.has_value() {
                    return;
                }
                child.init();
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
    use crate::array::ArrayIterator;
    use crate::cursor::collect_all;
    use crate::range::IntRangeIterator;

    fn two_by_three() -> Product<i32> {
        let mut product = Product::new();
        product.push(IntRangeIterator::new(0i32, 1, 1).unwrap());
        product.push(IntRangeIterator::new(10i32, 12, 1).unwrap());
        product
    }

    #[test]
    fn cardinality_is_product_of_children() {
        let mut product = two_by_three();
        assert_eq!(collect_all(&mut product).len(), 6);
    }

    #[test]
    fn rightmost_child_varies_fastest() {
        let mut product = two_by_three();
        let tuples = collect_all(&mut product);
        assert_eq!(
            tuples,
            vec![
                vec![0, 10],
                vec![0, 11],
                vec![0, 12],
                vec![1, 10],
                vec![1, 11],
                vec![1, 12],
            ]
        );
    }

    #[test]
    fn no_duplicate_tuples() {
        let mut product = two_by_three();
        let mut tuples = collect_all(&mut product);
        let before = tuples.len();
        tuples.sort();
        tuples.dedup();
        assert_eq!(tuples.len(), before);
    }

    #[test]
    fn three_children_mixed_types_of_cursor() {
        let mut product = Product::new();
        product.push(ArrayIterator::new(vec![1, 2]).unwrap());
        product.push(IntRangeIterator::new(0i32, 0, 1).unwrap());
        product.push(ArrayIterator::new(vec![7, 8, 9]).unwrap());

        assert_eq!(collect_all(&mut product).len(), 2 * 1 * 3);
    }

    /// A space with no values at all: `init()` leaves it exhausted.
    #[derive(Clone)]
    struct EmptySpace;

    impl Cursor for EmptySpace {
        type Item = i32;

        fn init(&mut self) {}

        fn has_value(&self) -> bool {
            false
        }

        fn value(&mut self) -> i32 {
            0
        }

        fn next(&mut self) {}

        fn stop(&mut self) {}
    }

    #[test]
    fn empty_child_empties_the_product() {
        let mut product = Product::new();
        product.push(IntRangeIterator::new(0i32, 3, 1).unwrap());
        product.push(EmptySpace);

        product.init();
        assert!(!product.has_value());

        // Advancing an empty product stays a no-op.
        product.next();
        assert!(!product.has_value());
    }

    #[test]
    fn nested_products_compose() {
        let mut inner = Product::new();
        inner.push(IntRangeIterator::new(0i32, 1, 1).unwrap());
        inner.push(IntRangeIterator::new(0i32, 1, 1).unwrap());

        let mut outer: Product<Vec<i32>> = Product::new();
        outer.push(inner);
        outer.push(ArrayIterator::new(vec![vec![9], vec![8, 8]]).unwrap());

        assert_eq!(collect_all(&mut outer).len(), 4 * 2);
    }

    #[test]
    fn clone_freezes_position() {
        let mut product = two_by_three();
        product.init();
        product.next();

        let mut copy = product.clone();
        product.next();

        assert_eq!(copy.value(), vec![0, 11]);
        assert_eq!(product.value(), vec![0, 12]);
    }

    #[test]
    fn stop_then_next_is_noop() {
        let mut product = two_by_three();
        product.init();
        product.stop();
        product.next();
        assert!(!product.has_value());
    }
}
