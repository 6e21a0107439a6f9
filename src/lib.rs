//! # Dual-Tree Bimap
//!
//! Bidirectional map of unique (left, right) pairs, ordered and searchable
//! from either side.
//!
//! ## Architecture
//!
//! - **Tree**: ordered index engine, an unbalanced BST whose nodes live in
//!   a caller-owned slab
//! - **Bimap**: one slab record per pair, linked into a left index and a
//!   right index at once
//!
//! ## Design Principles
//!
//! 1. **One record per pair**: both sides address the same slab key
//! 2. **All or nothing**: a pair is in both indices or in neither
//! 3. **Stable positions**: erasing a pair never moves any other pair
//! 4. **Quiet duplicates, loud misses**: a colliding insert returns the end
//!    position; `at_left`/`at_right` on a missing key return an error
//!
//! ## Example
//!
//! ```
//! use dual_tree_bimap::Bimap;
//!
//! let mut map = Bimap::new();
//! let pos = map.insert("one", 1);
//!
//! assert_eq!(map.right(pos.flip()), Some(&1));
//! assert_eq!(map.at_right(&1), Ok(&"one"));
//! assert!(map.at_left(&"two").is_err());
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Ordered index engine over externally stored nodes
pub mod tree;

/// Pair store: two indices over one slab of pair records
pub mod bimap;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use bimap::{Bimap, Left, LeftIter, LeftPos, Pos, Right, RightIter, RightPos, Side};
pub use error::{BimapError, Result};
pub use tree::{Compare, FnOrder, Natural, Reversed};
