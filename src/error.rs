//! Error taxonomy for tree operations.
//!
//! Every failure here is local and recoverable; no operation aborts the
//! process or leaves the tree in a partially-mutated state.

use thiserror::Error;

/// Errors reported by [`Tree`][crate::Tree] operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The value is already present in the tree. Reported by
    /// [`insert`][crate::Tree::insert]; the tree is left unchanged.
    #[error("value is already present in the tree")]
    DuplicateValue,

    /// The value is not present in the tree. Reported by
    /// [`depth`][crate::Tree::depth] when the descent from the root never
    /// reaches a matching node.
    #[error("value is not present in the tree")]
    NotFound,
}

/// Convenience alias for results of tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
