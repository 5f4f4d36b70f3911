//! Cursor shapes.

/// The mouse cursor a widget requests while hovered.
///
/// Applying the shape to the platform cursor is the windowing layer's job;
/// the core only stores the request per node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(u8)]
pub enum CursorShape {
    /// The standard arrow pointer.
    #[default]
    Arrow,
    /// Text-insertion beam.
    IBeam,
    /// Crosshair.
    Crosshair,
    /// Pointing hand (links, buttons).
    Hand,
    /// Horizontal resize.
    HResize,
    /// Vertical resize.
    VResize,
}
