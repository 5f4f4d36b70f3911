//! Error types for the Trellis object arena.

use thiserror::Error;

/// Errors that can occur during arena operations.
///
/// Arena misuse represents a structural invariant violation by the caller
/// and is never swallowed: every fallible operation returns one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ObjectError {
    /// The id is invalid or the node has been destroyed.
    #[error("invalid or destroyed widget id")]
    InvalidWidgetId,

    /// Attempted to make a node its own ancestor.
    #[error("cannot make a widget its own parent or ancestor")]
    CircularParentage,
}

/// Result type for arena operations.
pub type ObjectResult<T> = std::result::Result<T, ObjectError>;
