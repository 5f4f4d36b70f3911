//! The widget system.
//!
//! Widgets form a tree owned by [`WidgetTree`]; each node is a
//! [`Widget`] implementation embedding a [`WidgetBase`]. On top of the
//! tree sit the three tree-walking engines:
//!
//! - [`EventDispatcher`] routes input events front-to-back with
//!   first-consumer-wins semantics,
//! - [`FrameRenderer`] draws the tree back-to-front with clip culling,
//! - the layout pass ([`WidgetTree::perform_layout`]) sizes and positions
//!   children, delegating to [`Layout`] strategies where attached.
//!
//! Focus is tracked per tree: at most one widget holds it, and transitions
//! always notify the old holder before the new one.

mod base;
mod cursor;
mod dispatcher;
mod events;
mod focus;
mod layout;
mod painting;
mod panel;
mod theme;
mod traits;
mod traversal;
mod tree;

#[cfg(test)]
mod tests;

pub use base::WidgetBase;
pub use cursor::CursorShape;
pub use dispatcher::EventDispatcher;
pub use events::{KeyAction, KeyCode, Modifiers, MouseButton};
pub use layout::Layout;
pub use painting::FrameRenderer;
pub use panel::Panel;
pub use theme::Theme;
pub use traits::{PaintContext, Widget};
pub use tree::WidgetTree;
