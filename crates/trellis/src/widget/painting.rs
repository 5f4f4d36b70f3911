//! Depth-ordered frame rendering.
//!
//! [`FrameRenderer`] walks the visible tree and turns it into painter
//! calls. Each node draws its own content in local coordinates, then its
//! embedded children in insertion order, then its floating children by
//! ascending depth, so deeper floating nodes land on top. Subtrees whose
//! bounds fall entirely outside the inherited clip are skipped.

use tracing::trace;
use trellis_core::WidgetId;
use trellis_core::logging::targets;
use trellis_render::{Color, Painter, Point, Rect, Stroke};

use super::traits::PaintContext;
use super::tree::WidgetTree;

/// Tree-walking renderer producing one frame per call.
pub struct FrameRenderer {
    debug: bool,
    debug_color: Color,
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameRenderer {
    /// Create a renderer with debug outlines off.
    pub fn new() -> Self {
        Self {
            debug: false,
            debug_color: Color::RED,
        }
    }

    /// Enable or disable debug outlines (builder form).
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the debug outline color (builder form).
    pub fn with_debug_color(mut self, color: Color) -> Self {
        self.debug_color = color;
        self
    }

    /// Whether debug outlines are drawn around every widget.
    #[inline]
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Toggle debug outlines.
    #[inline]
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Draw one frame of the tree.
    ///
    /// A hidden root suppresses the whole frame.
    pub fn render(&self, tree: &WidgetTree, painter: &mut dyn Painter) {
        let root = tree.root();
        if tree.widget(root).is_some_and(|w| w.visible()) {
            trace!(target: targets::PAINT, widgets = tree.len(), "frame start");
            self.render_widget(tree, root, painter);
        }
    }

    fn render_widget(&self, tree: &WidgetTree, id: WidgetId, painter: &mut dyn Painter) {
        let Some(w) = tree.widget(id) else {
            return;
        };
        let pos = w.pos();
        let local = Rect::from_origin_size(Point::ZERO, w.size());

        painter.save();
        painter.translate(pos.x, pos.y);

        if self.debug {
            painter.stroke_rect(local, &Stroke::new(self.debug_color, 1.0));
        }
        {
            let mut ctx = PaintContext::new(painter, local);
            w.paint(&mut ctx);
        }

        // Embedded children first, in insertion order.
        let mut floating = Vec::new();
        for &child in tree.children(id) {
            let Some(cw) = tree.widget(child) else {
                continue;
            };
            if !cw.visible() {
                continue;
            }
            if cw.depth() > 0 {
                floating.push(child);
                continue;
            }
            if !tree.is_clipped(child, Rect::from_origin_size(Point::ZERO, cw.size())) {
                self.render_widget(tree, child, painter);
            }
        }
        // Floating children on top, ascending depth. The stable sort keeps
        // insertion order among equal depths.
        floating.sort_by_key(|&c| tree.widget(c).map_or(0, |w| w.depth()));
        for child in floating {
            let Some(cw) = tree.widget(child) else {
                continue;
            };
            if !tree.is_clipped(child, Rect::from_origin_size(Point::ZERO, cw.size())) {
                self.render_widget(tree, child, painter);
            }
        }

        painter.restore();
    }
}
