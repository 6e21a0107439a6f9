//! Pair records and the two node identities they present.
//!
//! ## Design
//!
//! A `PairRecord` is the only allocation per pair. It holds both keys and
//! one set of tree links per side:
//!
//! ```text
//! PairRecord {
//!     left:        L           key in the left index
//!     right:       R           key in the right index
//!     left_links:  IndexNode   position in the left index
//!     right_links: IndexNode   position in the right index
//! }
//! ```
//!
//! The record's slab key is its node id in *both* indices. Viewing the
//! slab through [`NodeStore<Left>`] or [`NodeStore<Right>`] selects which
//! key and which links the engine sees, so moving from one side to the
//! other never needs a search.

use slab::Slab;

use crate::tree::{IndexNode, NodeId, NodeStore};

/// One side of a bimap.
pub trait Side: Copy {
    /// The opposite side
    type Other: Side<Other = Self>;

    /// Side name used in errors and logs
    const NAME: &'static str;
}

/// Tag for the left side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Left {}

/// Tag for the right side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Right {}

impl Side for Left {
    type Other = Right;
    const NAME: &'static str = "left";
}

impl Side for Right {
    type Other = Left;
    const NAME: &'static str = "right";
}

/// A (left, right) pair linked into both indices.
#[derive(Debug, Clone)]
pub struct PairRecord<L, R> {
    /// Left key
    pub left: L,

    /// Right key
    pub right: R,

    /// Links in the left index
    pub left_links: IndexNode,

    /// Links in the right index
    pub right_links: IndexNode,
}

impl<L, R> PairRecord<L, R> {
    /// Create a record not yet linked into either index
    #[inline]
    pub fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            left_links: IndexNode::new(),
            right_links: IndexNode::new(),
        }
    }

    /// Check if the record is unlinked on both sides
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.left_links.is_unlinked() && self.right_links.is_unlinked()
    }

    /// Consume the record, returning its keys
    #[inline]
    pub fn into_pair(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> NodeStore<Left> for Slab<PairRecord<L, R>> {
    type Key = L;

    #[inline]
    fn links(&self, id: NodeId) -> &IndexNode {
        &self[id].left_links
    }

    #[inline]
    fn links_mut(&mut self, id: NodeId) -> &mut IndexNode {
        &mut self[id].left_links
    }

    #[inline]
    fn key(&self, id: NodeId) -> &L {
        &self[id].left
    }
}

impl<L, R> NodeStore<Right> for Slab<PairRecord<L, R>> {
    type Key = R;

    #[inline]
    fn links(&self, id: NodeId) -> &IndexNode {
        &self[id].right_links
    }

    #[inline]
    fn links_mut(&mut self, id: NodeId) -> &mut IndexNode {
        &mut self[id].right_links
    }

    #[inline]
    fn key(&self, id: NodeId) -> &R {
        &self[id].right
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
