//! Dual-index pair store.
//!
//! ## Architecture
//!
//! The `Bimap` owns every pair in a single slab and links each record into
//! two ordered indices:
//!
//! - **Slab**: one `PairRecord` per pair, O(1) allocate/free by key
//! - **Left index**: records ordered by their left key under `CL`
//! - **Right index**: records ordered by their right key under `CR`
//!
//! Both indices reach the same record through the same slab key, so a
//! position on one side flips to the other side without a search.
//!
//! ## Atomicity
//!
//! Insert checks both sides before touching anything: a pair is linked into
//! both indices or into neither. Erase unlinks the record from both indices
//! and then frees it exactly once.
//!
//! ## Example
//!
//! ```
//! use dual_tree_bimap::Bimap;
//!
//! let mut map = Bimap::new();
//! map.insert(3, "c");
//! map.insert(1, "a");
//! map.insert(2, "b");
//!
//! let lefts: Vec<_> = map.iter_left().map(|(l, _)| *l).collect();
//! assert_eq!(lefts, vec![1, 2, 3]);
//! assert_eq!(map.at_right(&"b"), Ok(&2));
//! ```

use std::fmt;

use log::{debug, trace};
use slab::Slab;

use crate::bimap::iter::{LeftIter, RightIter};
use crate::bimap::position::{LeftPos, Pos, RightPos};
use crate::bimap::record::{Left, PairRecord, Right, Side};
use crate::error::{BimapError, Result};
use crate::tree::{Compare, Natural, NodeId, OrderedIndex, Position};

/// Bidirectional map of unique (left, right) pairs
///
/// Every left key and every right key occurs at most once. Both sides are
/// ordered: by `CL` on the left, by `CR` on the right.
pub struct Bimap<L, R, CL = Natural, CR = Natural> {
    /// Pair storage
    /// Key: record id, shared by both indices
    records: Slab<PairRecord<L, R>>,

    /// Records ordered by left key
    by_left: OrderedIndex<L, CL, Left>,

    /// Records ordered by right key
    by_right: OrderedIndex<R, CR, Right>,

    /// Number of pairs
    len: usize,
}

impl<L: Ord, R: Ord> Bimap<L, R> {
    /// Create an empty bimap using the natural order on both sides
    pub fn new() -> Self {
        Self::with_comparators(Natural, Natural)
    }

    /// Create an empty bimap with room for `capacity` pairs
    ///
    /// # Example
    ///
    /// ```
    /// use dual_tree_bimap::Bimap;
    ///
    /// let map: Bimap<u32, String> = Bimap::with_capacity(1_000);
    /// assert!(map.capacity() >= 1_000);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparators(capacity, Natural, Natural)
    }
}

impl<L, R, CL, CR> Default for Bimap<L, R, CL, CR>
where
    CL: Compare<L> + Default,
    CR: Compare<R> + Default,
{
    fn default() -> Self {
        Self::with_comparators(CL::default(), CR::default())
    }
}

impl<L, R, CL, CR> Bimap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    /// Create an empty bimap ordered by the given comparators
    ///
    /// # Example
    ///
    /// ```
    /// use dual_tree_bimap::tree::{Natural, Reversed};
    /// use dual_tree_bimap::Bimap;
    ///
    /// let mut map = Bimap::with_comparators(Reversed(Natural), Natural);
    /// map.insert(1, 'a');
    /// map.insert(2, 'b');
    ///
    /// assert_eq!(map.left(map.begin_left()), Some(&2));
    /// ```
    pub fn with_comparators(left: CL, right: CR) -> Self {
        Self::with_capacity_and_comparators(0, left, right)
    }

    /// Create an empty bimap with room for `capacity` pairs, ordered by the
    /// given comparators
    pub fn with_capacity_and_comparators(capacity: usize, left: CL, right: CR) -> Self {
        Self {
            records: Slab::with_capacity(capacity),
            by_left: OrderedIndex::new(left),
            by_right: OrderedIndex::new(right),
            len: 0,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Number of pairs
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the bimap holds no pairs
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of pairs that fit without reallocating
    #[inline]
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    /// The left index (read only)
    #[inline]
    pub fn left_index(&self) -> &OrderedIndex<L, CL, Left> {
        &self.by_left
    }

    /// The right index (read only)
    #[inline]
    pub fn right_index(&self) -> &OrderedIndex<R, CR, Right> {
        &self.by_right
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert the pair `(left, right)`
    ///
    /// # Returns
    ///
    /// The left position of the new pair, or [`end_left`](Self::end_left)
    /// if `left` or `right` is already present. A rejected insert changes
    /// nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_tree_bimap::Bimap;
    ///
    /// let mut map = Bimap::new();
    /// assert!(!map.insert(1, 10).is_end());
    /// assert!(map.insert(1, 20).is_end());
    /// assert!(map.insert(2, 10).is_end());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, left: L, right: R) -> LeftPos {
        if self.by_left.contains(&self.records, &left)
            || self.by_right.contains(&self.records, &right)
        {
            trace!("insert rejected: key already present");
            return LeftPos::end();
        }
        Pos::new(Position::Node(self.link(left, right)))
    }

    /// Link a pair whose keys are known to be absent on both sides
    fn link(&mut self, left: L, right: R) -> NodeId {
        let id = self.records.insert(PairRecord::new(left, right));
        let on_left = self.by_left.insert(&mut self.records, id);
        let on_right = self.by_right.insert(&mut self.records, id);
        debug_assert!(!on_left.is_end() && !on_right.is_end());
        self.len += 1;
        trace!("linked pair #{id}, size {}", self.len);
        id
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Unlink record `id` from both indices and free it
    fn unlink(&mut self, id: NodeId) -> PairRecord<L, R> {
        self.by_left.erase(&mut self.records, id);
        self.by_right.erase(&mut self.records, id);
        self.len -= 1;
        trace!("unlinked pair #{id}, size {}", self.len);
        self.records.remove(id)
    }

    /// Live record behind a position, if any
    #[inline]
    fn live<S: Side>(&self, pos: Pos<S>) -> Option<NodeId> {
        pos.record().filter(|&id| self.records.contains(id))
    }

    /// Erase the pair at a left position
    ///
    /// # Returns
    ///
    /// The left position following the erased pair. Erasing the end is a
    /// no-op that returns the end.
    pub fn erase_left(&mut self, pos: LeftPos) -> LeftPos {
        let Some(id) = self.live(pos) else {
            return LeftPos::end();
        };
        let following = self.by_left.successor(&self.records, pos.position());
        self.unlink(id);
        Pos::new(following)
    }

    /// Erase the pair at a right position
    ///
    /// Mirror of [`erase_left`](Self::erase_left).
    pub fn erase_right(&mut self, pos: RightPos) -> RightPos {
        let Some(id) = self.live(pos) else {
            return RightPos::end();
        };
        let following = self.by_right.successor(&self.records, pos.position());
        self.unlink(id);
        Pos::new(following)
    }

    /// Remove the pair with left key `key`, returning it
    pub fn remove_left(&mut self, key: &L) -> Option<(L, R)> {
        let id = self.by_left.find(&self.records, key).node()?;
        Some(self.unlink(id).into_pair())
    }

    /// Remove the pair with right key `key`, returning it
    pub fn remove_right(&mut self, key: &R) -> Option<(L, R)> {
        let id = self.by_right.find(&self.records, key).node()?;
        Some(self.unlink(id).into_pair())
    }

    /// Erase the pair with left key `key`; `false` if there was none
    pub fn erase_left_key(&mut self, key: &L) -> bool {
        self.remove_left(key).is_some()
    }

    /// Erase the pair with right key `key`; `false` if there was none
    pub fn erase_right_key(&mut self, key: &R) -> bool {
        self.remove_right(key).is_some()
    }

    /// Erase every pair in the left range `[first, last)`
    ///
    /// `last` is never touched, so it is still valid and is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_tree_bimap::Bimap;
    ///
    /// let mut map: Bimap<i32, i32> = (0..10).map(|i| (i, -i)).collect();
    /// let first = map.find_left(&2);
    /// let last = map.find_left(&5);
    ///
    /// let after = map.erase_left_range(first, last);
    /// assert_eq!(after, map.find_left(&5));
    /// assert_eq!(map.len(), 7);
    /// ```
    pub fn erase_left_range(&mut self, mut first: LeftPos, last: LeftPos) -> LeftPos {
        while first != last && !first.is_end() {
            first = self.erase_left(first);
        }
        last
    }

    /// Erase every pair in the right range `[first, last)`
    pub fn erase_right_range(&mut self, mut first: RightPos, last: RightPos) -> RightPos {
        while first != last && !first.is_end() {
            first = self.erase_right(first);
        }
        last
    }

    /// Remove all pairs
    pub fn clear(&mut self) {
        self.records.clear();
        self.by_left.clear();
        self.by_right.clear();
        self.len = 0;
    }

    /// Exchange contents and comparators with `other`
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Left position of `key`, or the left end
    #[inline]
    pub fn find_left(&self, key: &L) -> LeftPos {
        Pos::new(self.by_left.find(&self.records, key))
    }

    /// Right position of `key`, or the right end
    #[inline]
    pub fn find_right(&self, key: &R) -> RightPos {
        Pos::new(self.by_right.find(&self.records, key))
    }

    /// Check if `key` is present on the left
    #[inline]
    pub fn contains_left(&self, key: &L) -> bool {
        self.by_left.contains(&self.records, key)
    }

    /// Check if `key` is present on the right
    #[inline]
    pub fn contains_right(&self, key: &R) -> bool {
        self.by_right.contains(&self.records, key)
    }

    /// Right key paired with left key `key`
    ///
    /// # Errors
    ///
    /// [`BimapError::NotFound`] if `key` is not present on the left.
    pub fn at_left(&self, key: &L) -> Result<&R> {
        self.by_left
            .find(&self.records, key)
            .node()
            .map(|id| &self.records[id].right)
            .ok_or(BimapError::NotFound { side: Left::NAME })
    }

    /// Left key paired with right key `key`
    ///
    /// # Errors
    ///
    /// [`BimapError::NotFound`] if `key` is not present on the right.
    pub fn at_right(&self, key: &R) -> Result<&L> {
        self.by_right
            .find(&self.records, key)
            .node()
            .map(|id| &self.records[id].left)
            .ok_or(BimapError::NotFound { side: Right::NAME })
    }

    /// Right key paired with `key`, inserting `(key, R::default())` if
    /// `key` is absent
    ///
    /// The default right key must stay unique, so a pair already holding it
    /// is erased before the insert.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_tree_bimap::Bimap;
    ///
    /// let mut map = Bimap::new();
    /// map.insert(5, 0);
    /// map.insert(3, 7);
    ///
    /// assert_eq!(*map.at_left_or_default(3), 7);
    /// assert_eq!(*map.at_left_or_default(9), 0);
    /// assert!(map.find_left(&5).is_end());
    /// ```
    pub fn at_left_or_default(&mut self, key: L) -> &R
    where
        R: Default,
    {
        if let Some(id) = self.by_left.find(&self.records, &key).node() {
            return &self.records[id].right;
        }
        let fallback = R::default();
        if let Some(stale) = self.by_right.find(&self.records, &fallback).node() {
            debug!("evicting pair #{stale}: it holds the default {} key", Right::NAME);
            self.unlink(stale);
        }
        let id = self.link(key, fallback);
        &self.records[id].right
    }

    /// Left key paired with `key`, inserting `(L::default(), key)` if
    /// `key` is absent
    ///
    /// Mirror of [`at_left_or_default`](Self::at_left_or_default): a pair
    /// already holding the default left key is erased first.
    pub fn at_right_or_default(&mut self, key: R) -> &L
    where
        L: Default,
    {
        if let Some(id) = self.by_right.find(&self.records, &key).node() {
            return &self.records[id].left;
        }
        let fallback = L::default();
        if let Some(stale) = self.by_left.find(&self.records, &fallback).node() {
            debug!("evicting pair #{stale}: it holds the default {} key", Left::NAME);
            self.unlink(stale);
        }
        let id = self.link(fallback, key);
        &self.records[id].left
    }

    /// First left position not less than `key`
    #[inline]
    pub fn lower_bound_left(&self, key: &L) -> LeftPos {
        Pos::new(self.by_left.lower_bound(&self.records, key))
    }

    /// First left position greater than `key`
    #[inline]
    pub fn upper_bound_left(&self, key: &L) -> LeftPos {
        Pos::new(self.by_left.upper_bound(&self.records, key))
    }

    /// First right position not less than `key`
    #[inline]
    pub fn lower_bound_right(&self, key: &R) -> RightPos {
        Pos::new(self.by_right.lower_bound(&self.records, key))
    }

    /// First right position greater than `key`
    #[inline]
    pub fn upper_bound_right(&self, key: &R) -> RightPos {
        Pos::new(self.by_right.upper_bound(&self.records, key))
    }

    // ========================================================================
    // Positions
    // ========================================================================

    /// Position of the smallest left key
    #[inline]
    pub fn begin_left(&self) -> LeftPos {
        Pos::new(self.by_left.begin(&self.records))
    }

    /// One past the largest left key
    #[inline]
    pub fn end_left(&self) -> LeftPos {
        Pos::new(self.by_left.end())
    }

    /// Position of the smallest right key
    #[inline]
    pub fn begin_right(&self) -> RightPos {
        Pos::new(self.by_right.begin(&self.records))
    }

    /// One past the largest right key
    #[inline]
    pub fn end_right(&self) -> RightPos {
        Pos::new(self.by_right.end())
    }

    /// Next left position; the end steps to the first
    ///
    /// # Panics
    ///
    /// Panics if `pos` refers to an erased pair whose slot is free.
    #[inline]
    pub fn next_left(&self, pos: LeftPos) -> LeftPos {
        Pos::new(self.by_left.successor(&self.records, pos.position()))
    }

    /// Previous left position; the end steps to the last
    #[inline]
    pub fn prev_left(&self, pos: LeftPos) -> LeftPos {
        Pos::new(self.by_left.predecessor(&self.records, pos.position()))
    }

    /// Next right position; the end steps to the first
    #[inline]
    pub fn next_right(&self, pos: RightPos) -> RightPos {
        Pos::new(self.by_right.successor(&self.records, pos.position()))
    }

    /// Previous right position; the end steps to the last
    #[inline]
    pub fn prev_right(&self, pos: RightPos) -> RightPos {
        Pos::new(self.by_right.predecessor(&self.records, pos.position()))
    }

    /// Left key at a left position (`None` at the end)
    #[inline]
    pub fn left(&self, pos: LeftPos) -> Option<&L> {
        self.live(pos).map(|id| &self.records[id].left)
    }

    /// Right key at a right position (`None` at the end)
    #[inline]
    pub fn right(&self, pos: RightPos) -> Option<&R> {
        self.live(pos).map(|id| &self.records[id].right)
    }

    /// Whole pair at a position on either side
    #[inline]
    pub fn pair<S: Side>(&self, pos: Pos<S>) -> Option<(&L, &R)> {
        self.live(pos).map(|id| {
            let record = &self.records[id];
            (&record.left, &record.right)
        })
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Pairs in ascending left order
    pub fn iter_left(&self) -> LeftIter<'_, L, R> {
        LeftIter::new(
            &self.records,
            self.by_left.begin(&self.records),
            self.by_left.last(&self.records),
            self.len,
        )
    }

    /// Pairs in ascending right order, right key first
    pub fn iter_right(&self) -> RightIter<'_, L, R> {
        RightIter::new(
            &self.records,
            self.by_right.begin(&self.records),
            self.by_right.last(&self.records),
            self.len,
        )
    }
}

// ============================================================================
// Trait implementations
// ============================================================================

impl<L, R, CL, CR> Clone for Bimap<L, R, CL, CR>
where
    L: Clone,
    R: Clone,
    CL: Compare<L> + Clone,
    CR: Compare<R> + Clone,
{
    /// Deep copy: the slab is cloned slot for slot, so both trees keep their
    /// shape and every record keeps its id.
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            by_left: self.by_left.clone(),
            by_right: self.by_right.clone(),
            len: self.len,
        }
    }
}

impl<L, R, CL, CR> PartialEq for Bimap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    /// Same size, and pairwise equivalent keys when walked in left order.
    fn eq(&self, other: &Self) -> bool {
        let left_cmp = self.by_left.comparator();
        let right_cmp = self.by_right.comparator();
        self.len == other.len
            && self.iter_left().zip(other.iter_left()).all(|((la, ra), (lb, rb))| {
                left_cmp.equivalent(la, lb) && right_cmp.equivalent(ra, rb)
            })
    }
}

impl<L, R, CL, CR> fmt::Debug for Bimap<L, R, CL, CR>
where
    L: fmt::Debug,
    R: fmt::Debug,
    CL: Compare<L>,
    CR: Compare<R>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter_left()).finish()
    }
}

impl<'a, L, R, CL, CR> IntoIterator for &'a Bimap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    type Item = (&'a L, &'a R);
    type IntoIter = LeftIter<'a, L, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_left()
    }
}

impl<L, R, CL, CR> Extend<(L, R)> for Bimap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    /// Inserts each pair; pairs colliding on either side are skipped.
    fn extend<I: IntoIterator<Item = (L, R)>>(&mut self, iter: I) {
        for (left, right) in iter {
            self.insert(left, right);
        }
    }
}

impl<L, R, CL, CR> FromIterator<(L, R)> for Bimap<L, R, CL, CR>
where
    CL: Compare<L> + Default,
    CR: Compare<R> + Default,
{
    fn from_iter<I: IntoIterator<Item = (L, R)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
