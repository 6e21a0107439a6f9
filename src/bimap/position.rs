//! Side-typed positions.
//!
//! A `Pos<S>` is a detached, `Copy` handle: a record id (or the end) plus
//! the side it is read from. It does not borrow the bimap, so it can be
//! held across mutations and handed back to erase.
//!
//! ## Flip
//!
//! A record has the same id on both sides, so `flip` only changes the side
//! tag. The end of one side flips to the end of the other, and flipping
//! twice gives back the original position.
//!
//! ## Invalidation
//!
//! Erasing a pair invalidates positions on that record (both sides). All
//! other positions, including ends, stay valid. Record ids are reused, so a
//! stale position may later resolve to a different pair; using one is a
//! logic error but never unsound.

use std::marker::PhantomData;

use crate::bimap::record::{Left, Right, Side};
use crate::tree::{NodeId, Position};

/// A position on side `S` of a bimap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos<S> {
    at: Position,
    side: PhantomData<S>,
}

/// A position in left order
pub type LeftPos = Pos<Left>;

/// A position in right order
pub type RightPos = Pos<Right>;

impl<S: Side> Pos<S> {
    #[inline]
    pub(crate) fn new(at: Position) -> Self {
        Self {
            at,
            side: PhantomData,
        }
    }

    /// The end position of side `S`
    #[inline]
    pub fn end() -> Self {
        Self::new(Position::End)
    }

    /// Check if this is the end position
    #[inline]
    pub fn is_end(self) -> bool {
        self.at.is_end()
    }

    /// The same pair seen from the other side
    #[inline]
    pub fn flip(self) -> Pos<S::Other> {
        Pos::new(self.at)
    }

    /// Structural position in the side's index
    #[inline]
    pub fn position(self) -> Position {
        self.at
    }

    /// Record id, or `None` at the end
    #[inline]
    pub fn record(self) -> Option<NodeId> {
        self.at.node()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
