//! The shared lazy-enumeration contract.
//!
//! Every generator in this crate walks a finite search space through the same
//! explicit lifecycle:
//!
//! ```text
//! constructed → init() → value()/next() … → exhausted (or stop())
//! ```
//!
//! `init()` re-enters the first state and may be called again at any time to
//! restart. Once `has_value()` reports `false` the cursor stays exhausted
//! until the next `init()`. Combinators drive their children exclusively
//! through this trait, never through concrete types.

/// A stateful, restartable enumerator over a finite space.
///
/// `value()` takes `&mut self` because some generators randomize instance
/// selection per call. While `has_value()` is `false`, `value()` keeps
/// returning the last materialized state — callers must gate on
/// `has_value()`; reading an exhausted cursor is a contract violation, not an
/// error path.
pub trait Cursor {
    type Item;

    /// Enters the first valid state, or exhausts immediately if the space is
    /// empty. Callable any number of times.
    fn init(&mut self);

    /// `true` while the cursor points at a valid value.
    fn has_value(&self) -> bool;

    /// Materializes the current position.
    fn value(&mut self) -> Self::Item;

    /// Advances to the next position. A no-op once exhausted.
    fn next(&mut self);

    /// Forces exhaustion unconditionally. Idempotent; undone only by
    /// `init()`.
    fn stop(&mut self);
}

/// Object-safe deep cloning for boxed cursors.
///
/// Combinators hold heterogeneous children as [`BoxedCursor`] values and
/// snapshot them through this trait; the copy preserves the current position
/// rather than resetting to the start.
pub trait CloneCursor<T>: Cursor<Item = T> {
    fn clone_boxed(&self) -> BoxedCursor<T>;
}

/// A cursor behind dynamic dispatch, cloneable at its current position.
pub type BoxedCursor<T> = Box<dyn CloneCursor<T>>;

impl<T, C> CloneCursor<T> for C
where
    C: Cursor<Item = T> + Clone + 'static,
{
    fn clone_boxed(&self) -> BoxedCursor<T> {
        Box::new(self.clone())
    }
}

impl<T: 'static> Clone for BoxedCursor<T> {
    fn clone(&self) -> Self {
        // Dispatch on the inner trait object, not on the Box: the Box itself
        // satisfies the blanket impl above, and calling clone_boxed on it
        // would recurse into this clone forever.
        (**self).clone_boxed()
    }
}

impl<T> Cursor for BoxedCursor<T> {
    type Item = T;

    fn init(&mut self) {
        (**self).init()
    }

    fn has_value(&self) -> bool {
        (**self).has_value()
    }

    fn value(&mut self) -> T {
        (**self).value()
    }

    fn next(&mut self) {
        (**self).next()
    }

    fn stop(&mut self) {
        (**self).stop()
    }
}

/// Drains a cursor into a vector, initializing it first. Test helper shared
/// across the crate.
#[cfg(test)]
pub(crate) fn collect_all<C: Cursor>(cursor: &mut C) -> Vec<C::Item> {
    let mut out = Vec::new();
    cursor.init();
    while cursor.has_value() {
        out.push(cursor.value());
        cursor.next();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::IntRangeIterator;

    #[test]
    fn boxed_cursor_clone_preserves_position() {
        let mut it: BoxedCursor<i32> = Box::new(IntRangeIterator::new(0, 5, 1).unwrap());
        it.init();
        it.next();
        it.next();

        let mut copy = it.clone();
        it.next();

        assert_eq!(copy.value(), 2);
        assert_eq!(it.value(), 3);
    }

    #[test]
    fn boxed_cursor_clones_of_clones_stay_independent() {
        let mut first: BoxedCursor<i32> = Box::new(IntRangeIterator::new(0, 5, 1).unwrap());
        first.init();

        let mut second = first.clone();
        second.next();
        let mut third = second.clone();
        third.next();

        assert_eq!(first.value(), 0);
        assert_eq!(second.value(), 1);
        assert_eq!(third.value(), 2);
    }
}
