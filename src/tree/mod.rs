//! Ordered index engine.
//!
//! ## Architecture
//!
//! A reusable ordered-set engine over a single key type, implemented as an
//! unbalanced binary search tree whose nodes live in a caller-owned arena:
//!
//! - **Nodes**: [`IndexNode`] links addressed by slab key ([`NodeId`])
//! - **Store**: [`NodeStore`] exposes links and keys of one node identity
//! - **Index**: [`OrderedIndex`] holds the root slot, count and comparator
//! - **Traversal**: free [`next`]/[`prev`] functions over links alone
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Find / bounds | O(height) |
//! | Insert | O(height) |
//! | Erase node | O(height) |
//! | Next / prev | O(height), amortized O(1) over a full walk |
//!
//! Height is O(log n) for random insertion order and O(n) in the worst case.
//!
//! ## Example
//!
//! ```
//! use dual_tree_bimap::tree::{KeyedNode, Natural, OrderedIndex, Plain, Position};
//! use slab::Slab;
//!
//! let mut slab = Slab::new();
//! let mut index = OrderedIndex::<i32, _, Plain>::new(Natural);
//!
//! for key in [20, 10, 30] {
//!     let id = slab.insert(KeyedNode::new(key));
//!     index.insert(&mut slab, id);
//! }
//!
//! let Position::Node(id) = index.lower_bound(&slab, &15) else { panic!() };
//! assert_eq!(slab[id].key, 20);
//! ```

pub mod compare;
pub mod index;
pub mod node;
pub mod traverse;

pub use compare::{Compare, FnOrder, Natural, Reversed};
pub use index::OrderedIndex;
pub use node::{IndexNode, KeyedNode, NodeId, NodeStore, Plain, Position};
pub use traverse::{next, prev};
