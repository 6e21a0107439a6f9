//! Unbalanced binary search tree over externally stored nodes.
//!
//! ## Design
//!
//! An `OrderedIndex` owns no nodes. Like a queue header that only knows its
//! head and tail, it holds the root slot, the node count and the comparator;
//! every operation is handed the [`NodeStore`] that holds the nodes.
//!
//! Every positional query is built on [`OrderedIndex::find_nearest`], a
//! single descent that stops on an equivalent key or at the last node
//! before falling off the tree.
//!
//! ## Erase keeps node identity
//!
//! A node with two children is replaced by its in-order predecessor's *node*
//! (relinked into its slot), never by copying the predecessor's key. Ids of
//! all other nodes stay valid, which is what positions held by callers rely
//! on.
//!
//! ## Complexity
//!
//! No rebalancing is done: all operations are O(height), and height is
//! linear in the worst case (e.g. sorted insertion).

use std::marker::PhantomData;

use crate::tree::compare::Compare;
use crate::tree::node::{IndexNode, NodeId, NodeStore, Position};
use crate::tree::traverse::{leftmost, next, prev, rightmost};

/// An ordered set of node ids, ordered by their keys under `C`.
///
/// `Tag` selects which node identity of the store entries this index
/// links through.
pub struct OrderedIndex<K, C, Tag> {
    /// Root slot (None when empty)
    root: Option<NodeId>,

    /// Number of linked nodes
    len: usize,

    /// Strict weak order over keys
    cmp: C,

    _marker: PhantomData<fn() -> (K, Tag)>,
}

impl<K, C, Tag> OrderedIndex<K, C, Tag>
where
    C: Compare<K>,
{
    /// Create an empty index ordered by `cmp`
    pub fn new(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
            _marker: PhantomData,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Check if no node is linked
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of linked nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The root node, if any
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The ordering capability
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    // ========================================================================
    // Positions
    // ========================================================================

    /// Position of the minimum, or `End` if empty
    pub fn begin<S>(&self, store: &S) -> Position
    where
        S: NodeStore<Tag, Key = K> + ?Sized,
    {
        Position::from(self.root.map(|root| leftmost::<Tag, S>(store, root)))
    }

    /// Position of the maximum, or `End` if empty
    pub fn last<S>(&self, store: &S) -> Position
    where
        S: NodeStore<Tag, Key = K> + ?Sized,
    {
        Position::from(self.root.map(|root| rightmost::<Tag, S>(store, root)))
    }

    /// One past the maximum
    #[inline]
    pub fn end(&self) -> Position {
        Position::End
    }

    /// Step forward; `End` steps to the minimum
    pub fn successor<S>(&self, store: &S, pos: Position) -> Position
    where
        S: NodeStore<Tag, Key = K> + ?Sized,
    {
        match pos {
            Position::Node(id) => next::<Tag, S>(store, id),
            Position::End => self.begin(store),
        }
    }

    /// Step back; `End` steps to the maximum
    pub fn predecessor<S>(&self, store: &S, pos: Position) -> Position
    where
        S: NodeStore<Tag, Key = K> + ?Sized,
    {
        match pos {
            Position::Node(id) => prev::<Tag, S>(store, id),
            Position::End => self.last(store),
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Descend towards `key`
    ///
    /// Returns the node holding an equivalent key if there is one, otherwise
    /// the last node visited. `End` only when the index is empty.
    pub fn find_nearest<S>(&self, store: &S, key: &K) -> Position
    where
        S: NodeStore<Tag, Key = K> + ?Sized,
    {
        let Some(mut id) = self.root else {
            return Position::End;
        };
        loop {
            let node_key = store.key(id);
            let links = store.links(id);
            let child = if self.cmp.greater(key, node_key) {
                links.right
            } else if self.cmp.less(key, node_key) {
                links.left
            } else {
                break;
            };
            match child {
                Some(child) => id = child,
                None => break,
            }
        }
        Position::Node(id)
    }

    /// Position of the node equivalent to `key`, or `End`
    pub fn find<S>(&self, store: &S, key: &K) -> Position
    where
        S: NodeStore<Tag, Key = K> + ?Sized,
    {
        match self.find_nearest(store, key) {
            Position::Node(id) if self.cmp.equivalent(store.key(id), key) => {
                Position::Node(id)
            }
            _ => Position::End,
        }
    }

    /// Check if a node equivalent to `key` is linked
    #[inline]
    pub fn contains<S>(&self, store: &S, key: &K) -> bool
    where
        S: NodeStore<Tag, Key = K> + ?Sized,
    {
        !self.find(store, key).is_end()
    }

    /// First position whose key is not less than `key`
    pub fn lower_bound<S>(&self, store: &S, key: &K) -> Position
    where
        S: NodeStore<Tag, Key = K> + ?Sized,
    {
        match self.find_nearest(store, key) {
            Position::Node(id) if self.cmp.less(store.key(id), key) => {
                next::<Tag, S>(store, id)
            }
            nearest => nearest,
        }
    }

    /// First position whose key is greater than `key`
    pub fn upper_bound<S>(&self, store: &S, key: &K) -> Position
    where
        S: NodeStore<Tag, Key = K> + ?Sized,
    {
        match self.find_nearest(store, key) {
            Position::Node(id) if !self.cmp.greater(store.key(id), key) => {
                next::<Tag, S>(store, id)
            }
            nearest => nearest,
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Link node `id` by its key
    ///
    /// The node must be unlinked from this index. If an equivalent key is
    /// already linked nothing changes and `End` is returned.
    pub fn insert<S>(&mut self, store: &mut S, id: NodeId) -> Position
    where
        S: NodeStore<Tag, Key = K> + ?Sized,
    {
        let parent = match self.find_nearest(&*store, store.key(id)) {
            Position::End => {
                self.root = Some(id);
                None
            }
            Position::Node(parent) => {
                let key = store.key(id);
                let parent_key = store.key(parent);
                if self.cmp.greater(key, parent_key) {
                    store.links_mut(parent).right = Some(id);
                } else if self.cmp.less(key, parent_key) {
                    store.links_mut(parent).left = Some(id);
                } else {
                    return Position::End;
                }
                Some(parent)
            }
        };
        *store.links_mut(id) = IndexNode {
            parent,
            left: None,
            right: None,
        };
        self.len += 1;
        Position::Node(id)
    }

    /// Unlink node `id`, returning it with all links cleared
    ///
    /// The node must be linked into this index. The caller owns disposal of
    /// whatever entry holds it.
    pub fn erase<S>(&mut self, store: &mut S, id: NodeId) -> NodeId
    where
        S: NodeStore<Tag, Key = K> + ?Sized,
    {
        let IndexNode { left, right, .. } = *store.links(id);
        match (left, right) {
            (None, None) => self.replace_in_parent(store, id, None),
            (Some(child), None) | (None, Some(child)) => {
                self.replace_in_parent(store, id, Some(child))
            }
            (Some(left), Some(right)) => {
                let pred = rightmost::<Tag, S>(&*store, left);
                let pred_left = store.links(pred).left;
                self.replace_in_parent(store, pred, pred_left);

                // pred may have been our left child
                let left = store.links(id).left;
                let pred_links = store.links_mut(pred);
                pred_links.left = left;
                pred_links.right = Some(right);
                if let Some(left) = left {
                    store.links_mut(left).parent = Some(pred);
                }
                store.links_mut(right).parent = Some(pred);

                self.replace_in_parent(store, id, Some(pred));
            }
        }
        store.links_mut(id).clear();
        self.len -= 1;
        id
    }

    /// Find-then-erase; `None` if no node is equivalent to `key`
    pub fn erase_key<S>(&mut self, store: &mut S, key: &K) -> Option<NodeId>
    where
        S: NodeStore<Tag, Key = K> + ?Sized,
    {
        let id = self.find(&*store, key).node()?;
        Some(self.erase(store, id))
    }

    /// Forget every node without touching the store
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Exchange contents and comparators with `other`
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Put `new_child` in the slot of `id` within its parent (or the root)
    fn replace_in_parent<S>(&mut self, store: &mut S, id: NodeId, new_child: Option<NodeId>)
    where
        S: NodeStore<Tag, Key = K> + ?Sized,
    {
        let parent = store.links(id).parent;
        match parent {
            Some(parent) => {
                let links = store.links_mut(parent);
                if links.left == Some(id) {
                    links.left = new_child;
                } else {
                    links.right = new_child;
                }
            }
            None => {
                debug_assert_eq!(self.root, Some(id), "parentless node is not the root");
                self.root = new_child;
            }
        }
        if let Some(child) = new_child {
            store.links_mut(child).parent = parent;
        }
    }

    /// Walk the whole tree checking links and order; returns the node count
    #[cfg(test)]
    pub(crate) fn validate<S>(&self, store: &S) -> usize
    where
        S: NodeStore<Tag, Key = K> + ?Sized,
    {
        if let Some(root) = self.root {
            assert_eq!(store.links(root).parent, None, "root has a parent");
        }
        let mut count = 0;
        let mut pos = self.begin(store);
        let mut previous: Option<NodeId> = None;
        while let Position::Node(id) = pos {
            let links = store.links(id);
            for child in [links.left, links.right].into_iter().flatten() {
                assert_eq!(store.links(child).parent, Some(id), "broken parent link");
            }
            if let Some(previous) = previous {
                assert!(
                    self.cmp.less(store.key(previous), store.key(id)),
                    "in-order keys not strictly increasing"
                );
            }
            previous = Some(id);
            count += 1;
            pos = next::<Tag, S>(store, id);
        }
        assert_eq!(count, self.len, "node count out of sync");
        count
    }
}

impl<K, C: Default + Compare<K>, Tag> Default for OrderedIndex<K, C, Tag> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<K, C: Clone, Tag> Clone for OrderedIndex<K, C, Tag> {
    /// Clones the header only; the clone is valid over a store whose
    /// links were cloned alongside.
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            len: self.len,
            cmp: self.cmp.clone(),
            _marker: PhantomData,
        }
    }
}

impl<K, C: std::fmt::Debug, Tag> std::fmt::Debug for OrderedIndex<K, C, Tag> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderedIndex")
            .field("root", &self.root)
            .field("len", &self.len)
            .field("cmp", &self.cmp)
            .finish()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
