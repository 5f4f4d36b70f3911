//! The widget tree.
//!
//! [`WidgetTree`] owns every widget in an arena keyed by
//! [`WidgetId`](trellis_core::WidgetId) and tracks the root node and the
//! single focused node. Structural edits, geometry queries, clip tests, and
//! the layout pass all go through it; event routing and drawing are layered
//! on top in [`EventDispatcher`](super::EventDispatcher) and
//! [`FrameRenderer`](super::FrameRenderer).

use std::fmt::Write as _;

use tracing::{debug, error};
use trellis_core::logging::targets;
use trellis_core::{ObjectArena, TreeStyle, WidgetId};
use trellis_render::{Painter, Point, Rect, Size};

use crate::error::{TreeError, TreeResult};

use super::traits::Widget;

const NO_CHILDREN: &[WidgetId] = &[];

/// Arena-backed widget tree with a distinguished root and at most one
/// focused node.
pub struct WidgetTree {
    pub(crate) arena: ObjectArena<Box<dyn Widget>>,
    pub(crate) root: WidgetId,
    pub(crate) focused: Option<WidgetId>,
}

impl WidgetTree {
    /// Create a tree from a root widget.
    pub fn new(root: impl Widget) -> Self {
        let mut arena = ObjectArena::new();
        let root = arena.insert_detached(Box::new(root) as Box<dyn Widget>);
        Self {
            arena,
            root,
            focused: None,
        }
    }

    /// The root node's id.
    #[inline]
    pub fn root(&self) -> WidgetId {
        self.root
    }

    /// Number of live widgets, including detached ones.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether `id` refers to a live widget (attached or detached).
    pub fn contains_node(&self, id: WidgetId) -> bool {
        self.arena.contains(id)
    }

    // =========================================================================
    // Node access
    // =========================================================================

    /// Borrow a widget.
    pub fn widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.arena.get(id).map(|b| b.as_ref())
    }

    /// Borrow a widget mutably.
    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        self.arena.get_mut(id).map(|b| b.as_mut())
    }

    /// Downcast a widget to its concrete type.
    pub fn widget_as<T: Widget>(&self, id: WidgetId) -> Option<&T> {
        self.widget(id).and_then(|w| w.as_any().downcast_ref())
    }

    /// Downcast a widget to its concrete type, mutably.
    pub fn widget_as_mut<T: Widget>(&mut self, id: WidgetId) -> Option<&mut T> {
        self.widget_mut(id).and_then(|w| w.as_any_mut().downcast_mut())
    }

    /// The parent of `id`, if attached. `None` for roots, orphans, and dead
    /// ids alike.
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.arena.parent(id).ok().flatten()
    }

    /// Children of `id` in insertion order. Empty for dead ids.
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.arena.children(id).unwrap_or(NO_CHILDREN)
    }

    /// Whether `ancestor` appears on `id`'s parent chain (strict: a node is
    /// not its own ancestor).
    pub fn is_ancestor(&self, ancestor: WidgetId, id: WidgetId) -> bool {
        self.arena.is_ancestor(ancestor, id)
    }

    /// First widget whose string id equals `id`, in preorder.
    pub fn find_by_id(&self, id: &str) -> Option<WidgetId> {
        let nodes = self.arena.preorder(self.root).ok()?;
        nodes
            .into_iter()
            .find(|&node| self.widget(node).is_some_and(|w| w.base().id() == id))
    }

    // =========================================================================
    // Structural edits
    // =========================================================================

    /// Append a widget as the last child of `parent`.
    pub fn add_child(&mut self, parent: WidgetId, widget: impl Widget) -> TreeResult<WidgetId> {
        let id = self.arena.insert(parent, Box::new(widget) as Box<dyn Widget>)?;
        debug!(target: targets::TREE, parent = ?parent, child = ?id, "child added");
        Ok(id)
    }

    /// Insert a widget among `parent`'s children at `index` (clamped to the
    /// end).
    pub fn insert_child(
        &mut self,
        parent: WidgetId,
        index: usize,
        widget: impl Widget,
    ) -> TreeResult<WidgetId> {
        let id = self
            .arena
            .insert_at(parent, index, Box::new(widget) as Box<dyn Widget>)?;
        debug!(target: targets::TREE, parent = ?parent, child = ?id, index, "child inserted");
        Ok(id)
    }

    /// Detach the child at `index` from `parent`, keeping the subtree alive
    /// as an orphan. Returns the detached id, or `None` when the index is
    /// out of range.
    pub fn remove_child_at(&mut self, parent: WidgetId, index: usize) -> Option<WidgetId> {
        let child = self.arena.detach_child_at(parent, index).ok().flatten()?;
        self.revoke_focus_in(child);
        debug!(target: targets::TREE, parent = ?parent, child = ?child, "child detached");
        Some(child)
    }

    /// Detach `child` from `parent`, keeping the subtree alive as an
    /// orphan. Returns `false` when `child` is not a child of `parent`.
    pub fn remove_child(&mut self, parent: WidgetId, child: WidgetId) -> bool {
        match self.arena.detach_child(parent, child) {
            Ok(true) => {
                self.revoke_focus_in(child);
                debug!(target: targets::TREE, parent = ?parent, child = ?child, "child detached");
                true
            }
            Ok(false) | Err(_) => false,
        }
    }

    /// Move `child` under `new_parent`, appended as its last child.
    ///
    /// Fails without effect when the move would create a cycle or either id
    /// is dead.
    pub fn reparent(&mut self, child: WidgetId, new_parent: WidgetId) -> TreeResult<()> {
        self.arena.set_parent(child, Some(new_parent))?;
        Ok(())
    }

    /// Drop `id` and its whole subtree. Detaches first, so a partial walk
    /// never observes a half-removed branch. Dead ids are a no-op.
    ///
    /// Returns the number of widgets dropped.
    pub fn destroy(&mut self, id: WidgetId) -> usize {
        if id == self.root {
            error!(target: targets::TREE, "refusing to destroy the root widget");
            return 0;
        }
        self.revoke_focus_in(id);
        let dropped = self.arena.remove_subtree(id);
        if dropped > 0 {
            debug!(target: targets::TREE, id = ?id, dropped, "subtree destroyed");
        }
        dropped
    }

    /// Revoke focus when the focused node is `id` or lives under it.
    ///
    /// The holder is notified with `focus_event(false)` while it is still
    /// alive, so its flag cannot survive a later reattach and make two
    /// widgets report focus at once. Then the record is cleared.
    fn revoke_focus_in(&mut self, id: WidgetId) {
        if let Some(f) = self.focused {
            if f == id || self.arena.is_ancestor(id, f) {
                if let Some(w) = self.widget_mut(f) {
                    w.focus_event(false);
                }
                debug!(target: targets::FOCUS, focused = ?f, removed = ?id, "focus revoked by removal");
                self.focused = None;
            }
        }
    }

    // =========================================================================
    // Geometry queries
    // =========================================================================

    /// Position of `id` in root coordinates: the sum of positions along its
    /// ancestor chain.
    pub fn absolute_position(&self, id: WidgetId) -> Point {
        let mut pos = Point::ZERO;
        let mut node = Some(id);
        while let Some(n) = node {
            if let Some(w) = self.widget(n) {
                pos = pos + w.pos();
            }
            node = self.parent(n);
        }
        pos
    }

    /// Whether `id` and every ancestor are locally visible.
    pub fn visible_recursive(&self, id: WidgetId) -> bool {
        let mut node = Some(id);
        while let Some(n) = node {
            match self.widget(n) {
                Some(w) if w.visible() => node = self.parent(n),
                _ => return false,
            }
        }
        true
    }

    /// Whether `rect`, given in `id`'s local coordinates, lies entirely
    /// outside the clip region inherited from `id`'s ancestors.
    ///
    /// Each ancestor clips to its own bounds, so the test re-expresses the
    /// rectangle one frame up per step and rejects as soon as it falls
    /// fully outside `(0, 0)..=(width, height)` at any level. Conservative:
    /// `false` means "may be visible".
    pub fn is_clipped(&self, id: WidgetId, rect: Rect) -> bool {
        let Some(w) = self.widget(id) else {
            return false;
        };
        let size = w.size();
        if rect.bottom() < 0
            || rect.top() > size.height
            || rect.right() < 0
            || rect.left() > size.width
        {
            return true;
        }
        match self.parent(id) {
            Some(parent) => self.is_clipped(parent, rect.translated(w.pos())),
            None => false,
        }
    }

    /// The nearest floating ancestor-or-self (depth above zero).
    ///
    /// Errors when the walk reaches a parentless node without finding one,
    /// which includes detached subtrees.
    pub fn find_window(&self, id: WidgetId) -> TreeResult<WidgetId> {
        let mut node = Some(id);
        while let Some(n) = node {
            if self.widget(n).is_some_and(|w| w.depth() > 0) {
                return Ok(n);
            }
            node = self.parent(n);
        }
        error!(target: targets::TREE, id = ?id, "no floating ancestor found");
        Err(TreeError::NoWindowAncestor(id))
    }

    // =========================================================================
    // Layout pass
    // =========================================================================

    /// The size `id` wants, honoring its layout strategy if it has one.
    pub fn preferred_size(&self, id: WidgetId, painter: &mut dyn Painter) -> Size {
        match self.widget(id) {
            Some(w) => w.preferred_size(self, id, painter),
            None => Size::ZERO,
        }
    }

    /// Per-axis fixed size with clamp flags applied: a clamped axis uses
    /// the preferred size as its fixed size.
    pub fn effective_fixed_size(&self, id: WidgetId, painter: &mut dyn Painter) -> Size {
        let Some(w) = self.widget(id) else {
            return Size::ZERO;
        };
        let clamp = w.base().clamp();
        let fixed = w.base().fixed_size();
        if !clamp[0] && !clamp[1] {
            return fixed;
        }
        let pref = w.preferred_size(self, id, painter);
        Size::new(
            if clamp[0] { pref.width } else { fixed.width },
            if clamp[1] { pref.height } else { fixed.height },
        )
    }

    /// Run a layout pass over `id`'s subtree.
    ///
    /// With a layout strategy attached, the strategy arranges the children
    /// (and owns the recursion). Without one, each child is sized to its
    /// preferred size, positive fixed-size components override per axis,
    /// and the pass recurses. Positions are left untouched by the default
    /// pass.
    pub fn perform_layout(&mut self, id: WidgetId, painter: &mut dyn Painter) {
        let layout = self.widget(id).and_then(|w| w.base().layout());
        match layout {
            Some(layout) => {
                debug!(target: targets::LAYOUT, id = ?id, layout = layout.name(), "layout pass");
                layout.perform(self, id, painter);
            }
            None => {
                let children = self.children(id).to_vec();
                for child in children {
                    let pref = self.preferred_size(child, painter);
                    let fixed = self.effective_fixed_size(child, painter);
                    let size = Size::new(
                        if fixed.width > 0 { fixed.width } else { pref.width },
                        if fixed.height > 0 {
                            fixed.height
                        } else {
                            pref.height
                        },
                    );
                    if let Some(w) = self.widget_mut(child) {
                        w.base_mut().set_size(size);
                    }
                    self.perform_layout(child, painter);
                }
            }
        }
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Render the tree as indented text for logs and debugging.
    pub fn dump(&self, style: TreeStyle) -> String {
        let mut out = String::new();
        self.dump_node(self.root, "", true, true, style, &mut out);
        out
    }

    fn dump_node(
        &self,
        id: WidgetId,
        prefix: &str,
        is_last: bool,
        is_root: bool,
        style: TreeStyle,
        out: &mut String,
    ) {
        let Some(w) = self.widget(id) else {
            return;
        };
        let branch = if is_root {
            ""
        } else if is_last {
            style.last_branch()
        } else {
            style.branch()
        };
        let pos = w.pos();
        let size = w.size();
        let _ = write!(out, "{prefix}{branch}{}", w.type_name());
        if !w.base().id().is_empty() {
            let _ = write!(out, " #{}", w.base().id());
        }
        let _ = write!(out, " [{}, {} {}x{}]", pos.x, pos.y, size.width, size.height);
        if !w.visible() {
            out.push_str(" hidden");
        }
        if w.focused() {
            out.push_str(" focused");
        }
        if w.depth() > 0 {
            let _ = write!(out, " depth={}", w.depth());
        }
        out.push('\n');

        let children = self.children(id);
        let child_prefix = if is_root {
            String::new()
        } else if is_last {
            format!("{prefix}{}", style.space())
        } else {
            format!("{prefix}{}", style.vertical())
        };
        for (i, &child) in children.iter().enumerate() {
            let last = i + 1 == children.len();
            self.dump_node(child, &child_prefix, last, false, style, out);
        }
    }
}

impl std::fmt::Debug for WidgetTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetTree")
            .field("root", &self.root)
            .field("widgets", &self.arena.len())
            .field("focused", &self.focused)
            .finish()
    }
}
