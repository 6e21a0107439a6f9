//! Errors for lookups that must succeed.
//!
//! Only `at_left`/`at_right` fail loudly. A rejected insert is an expected
//! outcome and is reported by returning the end position instead.

use thiserror::Error;

/// Bimap error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BimapError {
    /// No pair holds the requested key
    #[error("no such value in bimap ({side} side)")]
    NotFound {
        /// Side that was searched
        side: &'static str,
    },
}

/// Result alias for bimap lookups
pub type Result<T> = std::result::Result<T, BimapError>;
