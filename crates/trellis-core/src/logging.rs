//! Logging facilities for Trellis.
//!
//! Trellis is instrumented with the `tracing` crate. To see logs, install a
//! subscriber in the embedding application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! Structural mutations and focus transitions log at `trace!`/`debug!`;
//! invariant violations log at `error!` before the operation returns its
//! error.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Object arena target.
    pub const OBJECT: &str = "trellis_core::object";
    /// Widget tree structure target.
    pub const TREE: &str = "trellis::tree";
    /// Event dispatch target.
    pub const DISPATCH: &str = "trellis::dispatch";
    /// Focus management target.
    pub const FOCUS: &str = "trellis::focus";
    /// Layout pass target.
    pub const LAYOUT: &str = "trellis::layout";
    /// Frame rendering target.
    pub const PAINT: &str = "trellis::paint";
}

/// Glyph set for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
}

impl TreeStyle {
    /// Glyph for an interior branch.
    pub fn branch(self) -> &'static str {
        match self {
            Self::Ascii => "|-- ",
            Self::Unicode => "├── ",
        }
    }

    /// Glyph for the last branch under a parent.
    pub fn last_branch(self) -> &'static str {
        match self {
            Self::Ascii => "`-- ",
            Self::Unicode => "└── ",
        }
    }

    /// Glyph continuing a vertical rule past deeper siblings.
    pub fn vertical(self) -> &'static str {
        match self {
            Self::Ascii => "|   ",
            Self::Unicode => "│   ",
        }
    }

    /// Blank continuation under a last branch.
    pub fn space(self) -> &'static str {
        "    "
    }
}
