//! Widget base implementation.
//!
//! This module provides [`WidgetBase`], the common per-node record for all
//! widgets: geometry, fixed-size overrides, visibility, enabled/focus/hover
//! state, theme reference, cursor, tooltip, stacking depth, and the optional
//! layout strategy. Widget implementations include it as a field and
//! delegate common operations to it; the [`Widget`](super::Widget) trait's
//! default methods do that delegation.

use std::sync::Arc;

use trellis_render::{Point, Rect, Size};

use super::cursor::CursorShape;
use super::layout::Layout;
use super::theme::Theme;

/// The base record every widget carries.
///
/// Tree topology (parent and children) is not stored here: it lives in the
/// arena keyed by [`WidgetId`](trellis_core::WidgetId), so back-references
/// can never go stale or alias the owning child sequence.
pub struct WidgetBase {
    /// Optional string id. Non-unique; a lookup aid only.
    id: String,
    /// Position relative to the parent's origin.
    pos: Point,
    /// Current size.
    size: Size,
    /// The position is managed by the embedding in root coordinates; layout
    /// strategies leave such a node where it is.
    position_absolute: bool,
    /// Per-axis fixed-size override; a positive component overrides
    /// layout-computed size on that axis.
    fixed_size: Size,
    /// Per-axis "treat preferred size as fixed size" flags.
    clamp: [bool; 2],
    /// Local visibility flag. Effective visibility also requires every
    /// ancestor to be visible.
    visible: bool,
    /// Whether the widget accepts interaction.
    enabled: bool,
    /// Whether the widget currently holds keyboard focus.
    focused: bool,
    /// Whether the pointer is currently over the widget. Transient; updated
    /// by synthesized enter/leave events.
    hovered: bool,
    /// Stacking level: 0 is embedded, above 0 is floating.
    depth: i32,
    /// Font size override; 0 inherits from the theme.
    font_size: i32,
    /// Cursor requested while hovered.
    cursor: CursorShape,
    /// Tooltip text; empty means none.
    tooltip: String,
    /// Shared style values. Immutable from the tree's perspective.
    theme: Arc<Theme>,
    /// Optional layout strategy for arranging children.
    layout: Option<Arc<dyn Layout>>,
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetBase {
    /// Create a widget base with default state: visible, enabled, unfocused,
    /// zero geometry, default theme.
    pub fn new() -> Self {
        Self {
            id: String::new(),
            pos: Point::ZERO,
            size: Size::ZERO,
            position_absolute: false,
            fixed_size: Size::ZERO,
            clamp: [false, false],
            visible: true,
            enabled: true,
            focused: false,
            hovered: false,
            depth: 0,
            font_size: 0,
            cursor: CursorShape::Arrow,
            tooltip: String::new(),
            theme: Arc::new(Theme::default()),
            layout: None,
        }
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// The string id associated with this widget, if any.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Associate this widget with a string id (optional, non-unique).
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Position relative to the parent widget.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Set the position relative to the parent widget.
    #[inline]
    pub fn set_pos(&mut self, pos: Point) {
        self.pos = pos;
    }

    /// Current size.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Set the size.
    ///
    /// Setting a fixed size alone does not resize the widget; the size
    /// changes here or in a layout pass over the parent.
    #[inline]
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// The local rectangle: this widget's bounds in its parent's frame.
    #[inline]
    pub fn frame(&self) -> Rect {
        Rect::from_origin_size(self.pos, self.size)
    }

    /// Whether the position is pinned by the embedding rather than managed
    /// by a layout strategy.
    #[inline]
    pub fn position_absolute(&self) -> bool {
        self.position_absolute
    }

    /// Pin the position. Layout strategies honor this by leaving the widget
    /// where it is while still sizing it.
    #[inline]
    pub fn set_position_absolute(&mut self, absolute: bool) {
        self.position_absolute = absolute;
    }

    /// The fixed size override. Zero components impose nothing.
    #[inline]
    pub fn fixed_size(&self) -> Size {
        self.fixed_size
    }

    /// Set the fixed size. Positive components override any size computed by
    /// a layout pass on that axis.
    #[inline]
    pub fn set_fixed_size(&mut self, size: Size) {
        self.fixed_size = size;
    }

    /// Per-axis clamp flags: treat the preferred size as the fixed size.
    #[inline]
    pub fn clamp(&self) -> [bool; 2] {
        self.clamp
    }

    /// Use the preferred width as a fixed width.
    pub fn set_clamp_width(&mut self, clamp: bool) {
        self.clamp[0] = clamp;
    }

    /// Use the preferred height as a fixed height.
    pub fn set_clamp_height(&mut self, clamp: bool) {
        self.clamp[1] = clamp;
    }

    /// Containment test in the parent's coordinate frame.
    ///
    /// Both upper bounds are inclusive: a point exactly on the right or
    /// bottom edge is inside. Shared borders therefore hit-test
    /// deterministically toward the widget traversal visits first.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.pos.x <= p.x
            && self.pos.y <= p.y
            && p.x <= self.pos.x + self.size.width
            && p.y <= self.pos.y + self.size.height
    }

    // =========================================================================
    // State flags
    // =========================================================================

    /// Local visibility flag (ancestors not considered).
    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Set local visibility.
    #[inline]
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether the widget accepts interaction.
    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget accepts interaction.
    #[inline]
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the widget currently holds keyboard focus.
    ///
    /// The flag is granted and revoked by the tree's focus update; never set
    /// it directly to claim focus.
    #[inline]
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Record the focus flag. Called by the default
    /// [`focus_event`](super::Widget::focus_event) hook.
    #[inline]
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Whether the pointer is currently over the widget.
    #[inline]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Record the hover flag. Called by the default
    /// [`mouse_enter_event`](super::Widget::mouse_enter_event) hook.
    #[inline]
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Stacking level: 0 is embedded, above 0 is floating.
    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Set the stacking level.
    #[inline]
    pub fn set_depth(&mut self, depth: i32) {
        self.depth = depth;
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// Effective font size: the override when set, otherwise the theme's
    /// standard size.
    pub fn font_size(&self) -> i32 {
        if self.font_size > 0 {
            self.font_size
        } else {
            self.theme.standard_font_size
        }
    }

    /// Whether a font size is explicitly set on this widget.
    pub fn has_font_size(&self) -> bool {
        self.font_size > 0
    }

    /// Set the font size override; 0 inherits from the theme.
    pub fn set_font_size(&mut self, size: i32) {
        self.font_size = size;
    }

    /// The cursor requested while hovered.
    #[inline]
    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    /// Set the cursor requested while hovered.
    #[inline]
    pub fn set_cursor(&mut self, cursor: CursorShape) {
        self.cursor = cursor;
    }

    /// Tooltip text; empty means none.
    #[inline]
    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Set the tooltip text.
    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) {
        self.tooltip = tooltip.into();
    }

    /// The shared theme.
    #[inline]
    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    /// Share a theme with this widget.
    pub fn set_theme(&mut self, theme: Arc<Theme>) {
        self.theme = theme;
    }

    // =========================================================================
    // Layout strategy
    // =========================================================================

    /// The attached layout strategy, if any.
    ///
    /// Returned as a cloned handle so a layout pass can invoke it against
    /// the tree without aliasing the owning node.
    pub fn layout(&self) -> Option<Arc<dyn Layout>> {
        self.layout.clone()
    }

    /// Attach a layout strategy (or detach with `None`).
    pub fn set_layout(&mut self, layout: Option<Arc<dyn Layout>>) {
        self.layout = layout;
    }
}

impl std::fmt::Debug for WidgetBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetBase")
            .field("id", &self.id)
            .field("pos", &self.pos)
            .field("size", &self.size)
            .field("fixed_size", &self.fixed_size)
            .field("visible", &self.visible)
            .field("enabled", &self.enabled)
            .field("focused", &self.focused)
            .field("depth", &self.depth)
            .field("has_layout", &self.layout.is_some())
            .finish()
    }
}
