//! Ordering capabilities for the ordered index.
//!
//! An index is ordered by a strict weak order given as a `less` predicate.
//! Equality is never asked of the key type: two keys are equivalent when
//! neither is less than the other. A comparator may therefore treat
//! distinct values as equal (see the Euclidean-length example below),
//! and the index will keep only one of them.
//!
//! ## Example
//!
//! ```
//! use dual_tree_bimap::tree::{Compare, FnOrder, Natural, Reversed};
//!
//! assert!(Natural.less(&1, &2));
//! assert!(Reversed(Natural).less(&2, &1));
//!
//! let by_length = FnOrder(|a: &(i32, i32), b: &(i32, i32)| {
//!     a.0 * a.0 + a.1 * a.1 < b.0 * b.0 + b.1 * b.1
//! });
//! assert!(by_length.equivalent(&(3, 4), &(4, 3)));
//! ```

/// A strict weak order over `T`.
pub trait Compare<T: ?Sized> {
    /// `a` is strictly before `b`
    fn less(&self, a: &T, b: &T) -> bool;

    /// `a` is strictly after `b`
    #[inline]
    fn greater(&self, a: &T, b: &T) -> bool {
        self.less(b, a)
    }

    /// Neither is before the other
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// The natural order of an [`Ord`] type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// An order given by a `less` closure.
#[derive(Clone, Copy)]
pub struct FnOrder<F>(pub F);

impl<T: ?Sized, F> Compare<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<F> std::fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnOrder(..)")
    }
}

/// The inverse of another order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.0.less(b, a)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
