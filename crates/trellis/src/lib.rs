//! Trellis: a retained-mode widget toolkit core.
//!
//! This crate implements the engine under a GUI toolkit: the widget tree,
//! hit-testing, event propagation, layout invocation, depth-ordered drawing
//! with inherited clipping, and single-focus management. It contains no
//! windowing, no GPU code, and no concrete widget set beyond a plain
//! container; an embedding layer supplies a [`Painter`] implementation and
//! feeds normalized input events to the [`EventDispatcher`].
//!
//! # Quick start
//!
//! ```
//! use trellis::prelude::*;
//!
//! let mut tree = WidgetTree::new(Panel::with_id("root"));
//! tree.widget_mut(tree.root()).unwrap().base_mut().set_size(Size::new(800, 600));
//!
//! let child = tree.add_child(tree.root(), Panel::with_id("child")).unwrap();
//! tree.widget_mut(child).unwrap().base_mut().set_size(Size::new(100, 40));
//!
//! let mut painter = RecordingPainter::new();
//! FrameRenderer::new().render(&tree, &mut painter);
//! assert!(!painter.commands().is_empty());
//! ```
//!
//! # Coordinate convention
//!
//! Positions are relative to the parent's origin; containment tests and
//! routed event positions are expressed in the parent's frame, and the
//! dispatcher translates as it descends. Containment is inclusive on all
//! four edges.
//!
//! [`Painter`]: trellis_render::Painter

pub mod error;
pub mod widget;

pub use error::{TreeError, TreeResult};

/// Commonly used names, re-exported in one place.
pub mod prelude {
    pub use crate::error::{TreeError, TreeResult};
    pub use crate::widget::{
        CursorShape, EventDispatcher, FrameRenderer, KeyAction, KeyCode, Layout, Modifiers,
        MouseButton, PaintContext, Panel, Theme, Widget, WidgetBase, WidgetTree,
    };
    pub use trellis_core::{TreeStyle, WidgetId};
    pub use trellis_render::{
        Color, DrawCommand, Painter, Point, Rect, RecordingPainter, Size, Stroke,
    };
}
