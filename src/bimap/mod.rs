//! Bidirectional map built on two ordered indices.
//!
//! ## Components
//!
//! - [`PairRecord`]: both keys plus one set of tree links per side
//! - [`Pos`]: side-typed position, flippable to the other side in O(1)
//! - [`Bimap`]: owns the records and keeps both indices in step
//! - [`LeftIter`] / [`RightIter`]: ordered iteration from either side
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Insert | O(height) |
//! | Erase by position | O(height) |
//! | Find / at / bounds | O(height) |
//! | Flip | O(1) |
//! | Size | O(1) |

pub mod iter;
pub mod position;
pub mod record;
pub mod store;

pub use iter::{LeftIter, RightIter};
pub use position::{LeftPos, Pos, RightPos};
pub use record::{Left, PairRecord, Right, Side};
pub use store::Bimap;
