//! Layout strategy interface.
//!
//! A layout is an interchangeable strategy attached to a container. It is
//! invoked by [`WidgetTree::perform_layout`](super::WidgetTree::perform_layout)
//! against the tree rather than a single node, so it can read sibling
//! geometry and write child positions and sizes through the tree's
//! accessors. Containers without a layout fall back to the tree's default
//! pass, which sizes each child to its preferred size subject to fixed-size
//! overrides.

use trellis_core::WidgetId;
use trellis_render::{Painter, Size};

use super::tree::WidgetTree;

/// Child-arrangement strategy attached to a container widget.
///
/// Implementations are shared handles (`Arc<dyn Layout>`): the tree clones
/// the handle out of the node before invoking it, so a strategy must not
/// cache per-invocation state in `&self`.
pub trait Layout {
    /// Compute the size the container wants, given its children.
    ///
    /// The painter is available for text measurement; implementations must
    /// not draw with it.
    fn preferred_size(&self, tree: &WidgetTree, id: WidgetId, painter: &mut dyn Painter) -> Size;

    /// Position and size the container's children.
    ///
    /// Called with the container's current size already decided; the
    /// strategy writes child geometry and recurses through
    /// [`WidgetTree::perform_layout`](super::WidgetTree::perform_layout)
    /// where children have their own layouts.
    fn perform(&self, tree: &mut WidgetTree, id: WidgetId, painter: &mut dyn Painter);

    /// Short name used in logs and tree dumps.
    fn name(&self) -> &'static str {
        "layout"
    }
}

static_assertions::assert_obj_safe!(Layout);
