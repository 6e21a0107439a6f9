//! Structural node links and positions.
//!
//! ## Design
//!
//! An `IndexNode` carries no payload: only the parent/left/right links of
//! one node inside one ordered index. The links are slab keys (`NodeId`),
//! not references, so the record that embeds an `IndexNode` can be moved,
//! swapped or cloned freely.
//!
//! The engine never owns nodes. It reaches them through a [`NodeStore`],
//! which maps a `NodeId` to its links and key. One store can present
//! several independent node identities per entry, distinguished by the
//! `Tag` type parameter.
//!
//! ## Root and end
//!
//! ```text
//!            (index root slot)
//!                   |
//!                 [ 5 ]          parent: None
//!                /     \
//!            [ 2 ]     [ 8 ]     parent: Some(5)
//! ```
//!
//! A linked node with no parent is the root. The position one past the
//! maximum is [`Position::End`], which has no storage of its own.

use slab::Slab;

/// Node identity: the slab key of the entry holding the node.
pub type NodeId = usize;

/// Parent and child links of one node in one ordered index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexNode {
    /// Parent node, or `None` for the root (and for unlinked nodes)
    pub parent: Option<NodeId>,

    /// Left child (all keys strictly less)
    pub left: Option<NodeId>,

    /// Right child (all keys strictly greater)
    pub right: Option<NodeId>,
}

impl IndexNode {
    /// Create an unlinked node
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this node has no links at all
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.parent.is_none() && self.left.is_none() && self.right.is_none()
    }

    /// Reset all links
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A position in an ordered index: a node, or the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Position of a linked node
    Node(NodeId),
    /// One past the maximum; also the result of every failed lookup
    End,
}

impl Position {
    /// Check if this is the end position
    #[inline]
    pub fn is_end(self) -> bool {
        matches!(self, Position::End)
    }

    /// The node id, or `None` at the end
    #[inline]
    pub fn node(self) -> Option<NodeId> {
        match self {
            Position::Node(id) => Some(id),
            Position::End => None,
        }
    }
}

impl From<Option<NodeId>> for Position {
    fn from(id: Option<NodeId>) -> Self {
        id.map_or(Position::End, Position::Node)
    }
}

/// Access to the nodes of one index, stored in somebody else's arena.
///
/// `Tag` selects which node identity of an entry is meant, so a single
/// arena can implement this trait once per index it participates in.
///
/// # Panics
///
/// Implementations may panic when given an id that is not in the store.
pub trait NodeStore<Tag> {
    /// Key type ordered by the index
    type Key;

    /// Links of node `id`
    fn links(&self, id: NodeId) -> &IndexNode;

    /// Mutable links of node `id`
    fn links_mut(&mut self, id: NodeId) -> &mut IndexNode;

    /// Key of node `id`
    fn key(&self, id: NodeId) -> &Self::Key;
}

/// Tag for stores that present a single node identity per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plain {}

/// A key plus its links: the entry type of a single-index arena.
#[derive(Debug, Clone)]
pub struct KeyedNode<K> {
    /// The key
    pub key: K,

    /// Links in the index
    pub links: IndexNode,
}

impl<K> KeyedNode<K> {
    /// Create an unlinked node holding `key`
    #[inline]
    pub fn new(key: K) -> Self {
        Self {
            key,
            links: IndexNode::new(),
        }
    }
}

impl<K> NodeStore<Plain> for Slab<KeyedNode<K>> {
    type Key = K;

    #[inline]
    fn links(&self, id: NodeId) -> &IndexNode {
        &self[id].links
    }

    #[inline]
    fn links_mut(&mut self, id: NodeId) -> &mut IndexNode {
        &mut self[id].links
    }

    #[inline]
    fn key(&self, id: NodeId) -> &K {
        &self[id].key
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_node_new() {
        let node = IndexNode::new();
        assert!(node.is_unlinked());
        assert_eq!(node, IndexNode::default());
    }

    #[test]
    fn test_index_node_clear() {
        let mut node = IndexNode {
            parent: Some(1),
            left: None,
            right: Some(3),
        };
        assert!(!node.is_unlinked());

        node.clear();
        assert!(node.is_unlinked());
    }

    #[test]
    fn test_position_accessors() {
        assert!(Position::End.is_end());
        assert_eq!(Position::End.node(), None);
        assert!(!Position::Node(4).is_end());
        assert_eq!(Position::Node(4).node(), Some(4));
        assert_eq!(Position::from(Some(7)), Position::Node(7));
        assert_eq!(Position::from(None), Position::End);
    }

    #[test]
    fn test_plain_store_access() {
        let mut slab = Slab::new();
        let id = slab.insert(KeyedNode::new("a"));

        assert_eq!(*NodeStore::<Plain>::key(&slab, id), "a");
        NodeStore::<Plain>::links_mut(&mut slab, id).left = Some(9);
        assert_eq!(NodeStore::<Plain>::links(&slab, id).left, Some(9));
    }
}
