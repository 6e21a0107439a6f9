//! In-order traversal over node links.
//!
//! These are free functions rather than index methods: stepping from a
//! node needs only the links, never the comparator or the root.
//!
//! - `next(max)` and `prev(min)` both return [`Position::End`].
//! - Stepping away from `End` needs the root, see
//!   [`OrderedIndex::successor`](super::OrderedIndex::successor).

use crate::tree::node::{NodeId, NodeStore, Position};

/// Leftmost node of the subtree rooted at `id`
#[inline]
pub fn leftmost<Tag, S>(store: &S, mut id: NodeId) -> NodeId
where
    S: NodeStore<Tag> + ?Sized,
{
    while let Some(left) = store.links(id).left {
        id = left;
    }
    id
}

/// Rightmost node of the subtree rooted at `id`
#[inline]
pub fn rightmost<Tag, S>(store: &S, mut id: NodeId) -> NodeId
where
    S: NodeStore<Tag> + ?Sized,
{
    while let Some(right) = store.links(id).right {
        id = right;
    }
    id
}

/// Check if `id` is the left child of its parent
#[inline]
pub fn is_left_child<Tag, S>(store: &S, id: NodeId) -> bool
where
    S: NodeStore<Tag> + ?Sized,
{
    match store.links(id).parent {
        Some(parent) => store.links(parent).left == Some(id),
        None => false,
    }
}

/// Check if `id` is the right child of its parent
#[inline]
pub fn is_right_child<Tag, S>(store: &S, id: NodeId) -> bool
where
    S: NodeStore<Tag> + ?Sized,
{
    match store.links(id).parent {
        Some(parent) => store.links(parent).right == Some(id),
        None => false,
    }
}

/// In-order successor of a linked node
///
/// Leftmost node of the right subtree if there is one; otherwise the first
/// ancestor reached from a left child. `End` after the maximum.
pub fn next<Tag, S>(store: &S, id: NodeId) -> Position
where
    S: NodeStore<Tag> + ?Sized,
{
    if let Some(right) = store.links(id).right {
        return Position::Node(leftmost::<Tag, S>(store, right));
    }
    let mut id = id;
    while is_right_child::<Tag, S>(store, id) {
        // is_right_child implies a parent
        id = match store.links(id).parent {
            Some(parent) => parent,
            None => return Position::End,
        };
    }
    Position::from(store.links(id).parent)
}

/// In-order predecessor of a linked node
///
/// Rightmost node of the left subtree if there is one; otherwise the first
/// ancestor reached from a right child. `End` before the minimum.
pub fn prev<Tag, S>(store: &S, id: NodeId) -> Position
where
    S: NodeStore<Tag> + ?Sized,
{
    if let Some(left) = store.links(id).left {
        return Position::Node(rightmost::<Tag, S>(store, left));
    }
    let mut id = id;
    while is_left_child::<Tag, S>(store, id) {
        id = match store.links(id).parent {
            Some(parent) => parent,
            None => return Position::End,
        };
    }
    Position::from(store.links(id).parent)
}

// ============================================================================
// Unit Tests
// ============================================================================
