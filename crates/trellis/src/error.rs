//! Error types for the widget tree.

use thiserror::Error;
use trellis_core::{ObjectError, WidgetId};

/// Errors produced by widget-tree operations.
///
/// These are invariant violations: a caller misused the tree structure, and
/// the operation aborts without partial effect. Benign cases (removing an
/// absent child, destroying a dead id) are no-ops, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Structural arena error (invalid id, circular parentage).
    #[error(transparent)]
    Object(#[from] ObjectError),

    /// The node has no ancestor chain to the tree root.
    ///
    /// Focus requests require an attached node; attach it before requesting
    /// focus.
    #[error("widget {0:?} is not attached to the tree root")]
    NodeDetached(WidgetId),

    /// A window lookup walked to a node with no parent without finding a
    /// floating ancestor.
    #[error("widget {0:?} has no floating (window) ancestor")]
    NoWindowAncestor(WidgetId),
}

/// Result type for widget-tree operations.
pub type TreeResult<T> = std::result::Result<T, TreeError>;
