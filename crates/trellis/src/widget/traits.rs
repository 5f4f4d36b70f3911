//! The widget trait.
//!
//! Every node in a tree implements [`Widget`]. The trait is a set of hooks
//! with delegating defaults: concrete widgets embed a
//! [`WidgetBase`](super::WidgetBase), expose it through
//! [`base`](Widget::base) / [`base_mut`](Widget::base_mut), and override
//! only the hooks they care about. Recursive behavior (event routing,
//! drawing children, layout recursion) lives in the tree-level algorithms,
//! not here; a hook sees only the node it is called on.

use std::any::Any;

use trellis_core::WidgetId;
use trellis_render::{Painter, Point, Rect, Size};

use super::base::WidgetBase;
use super::events::{KeyAction, KeyCode, Modifiers, MouseButton};
use super::tree::WidgetTree;

/// Per-frame drawing context handed to [`Widget::paint`].
///
/// The painter arrives already translated to the widget's origin and
/// clipped to the inherited clip, so the widget draws into
/// `(0, 0)..=(width, height)`.
pub struct PaintContext<'a> {
    painter: &'a mut dyn Painter,
    rect: Rect,
}

impl<'a> PaintContext<'a> {
    /// Build a context over a painter positioned at the widget's origin.
    pub fn new(painter: &'a mut dyn Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    /// The painter, in local coordinates.
    #[inline]
    pub fn painter(&mut self) -> &mut dyn Painter {
        self.painter
    }

    /// The widget's local rectangle (origin is always zero).
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The widget's current size.
    #[inline]
    pub fn size(&self) -> Size {
        self.rect.size
    }

    /// The widget's current width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.rect.size.width
    }

    /// The widget's current height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.rect.size.height
    }
}

/// A node in the widget tree.
///
/// Hooks return `true` when the event was consumed; routing stops at the
/// first consumer. Default hooks consume nothing, except the enter and
/// focus hooks which record their flag on the base before declining.
pub trait Widget: Any {
    /// Shared per-node state.
    fn base(&self) -> &WidgetBase;

    /// Shared per-node state, mutably.
    fn base_mut(&mut self) -> &mut WidgetBase;

    /// Upcast for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Upcast for mutable downcasting to the concrete type.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Short type tag used in logs and tree dumps.
    fn type_name(&self) -> &'static str {
        "widget"
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// The size this widget wants.
    ///
    /// Containers with a layout delegate to it; everything else reports its
    /// current size. The painter is available for text measurement.
    fn preferred_size(
        &self,
        tree: &WidgetTree,
        id: WidgetId,
        painter: &mut dyn Painter,
    ) -> Size {
        match self.base().layout() {
            Some(layout) => layout.preferred_size(tree, id, painter),
            None => self.base().size(),
        }
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Draw this widget's own content.
    ///
    /// Children are drawn by the frame renderer after this returns; do not
    /// draw them here.
    fn paint(&self, _ctx: &mut PaintContext<'_>) {}

    // =========================================================================
    // Pointer events
    // =========================================================================

    /// A mouse button went down or up. `pos` is in the parent's frame.
    fn mouse_button_event(
        &mut self,
        _pos: Point,
        _button: MouseButton,
        _down: bool,
        _mods: Modifiers,
    ) -> bool {
        false
    }

    /// The pointer moved with no button held. `pos` is in the parent's
    /// frame; `rel` is the motion delta since the previous event.
    fn mouse_motion_event(
        &mut self,
        _pos: Point,
        _rel: Point,
        _button: Option<MouseButton>,
        _mods: Modifiers,
    ) -> bool {
        false
    }

    /// The pointer moved while `button` is held and this widget is the drag
    /// target. Delivered directly, without child routing.
    fn mouse_drag_event(
        &mut self,
        _pos: Point,
        _rel: Point,
        _button: MouseButton,
        _mods: Modifiers,
    ) -> bool {
        false
    }

    /// The pointer entered (`entered` true) or left this widget's bounds.
    ///
    /// `pos` is the untranslated event position of the motion that crossed
    /// the boundary. The default records the hover flag and declines.
    fn mouse_enter_event(&mut self, _pos: Point, entered: bool) -> bool {
        self.base_mut().set_hovered(entered);
        false
    }

    /// The scroll wheel moved over this widget. `pos` is in the parent's
    /// frame; `delta` is the scroll amount per axis.
    fn scroll_event(&mut self, _pos: Point, _delta: Point) -> bool {
        false
    }

    // =========================================================================
    // Keyboard and text events
    // =========================================================================

    /// Keyboard focus arrived (`focused` true) or left.
    ///
    /// The default records the flag and declines, so focus changes propagate
    /// to ancestors that want to observe them.
    fn focus_event(&mut self, focused: bool) -> bool {
        self.base_mut().set_focused(focused);
        false
    }

    /// A key was pressed, released, or repeated.
    fn keyboard_event(
        &mut self,
        _key: KeyCode,
        _scancode: i32,
        _action: KeyAction,
        _mods: Modifiers,
    ) -> bool {
        false
    }

    /// A translated text character arrived. Delivered to the focused widget
    /// only.
    fn char_event(&mut self, _codepoint: char) -> bool {
        false
    }

    /// IME preedit text changed. `blocks` gives the byte lengths of the
    /// conversion segments; `focused_block` indexes the active one, -1 for
    /// none. Delivered to the focused widget only.
    fn ime_preedit_event(&mut self, _text: &str, _blocks: &[usize], _focused_block: i32) -> bool {
        false
    }

    /// The IME turned on or off. Delivered to the focused widget only.
    fn ime_status_event(&mut self) -> bool {
        false
    }

    // =========================================================================
    // Delegating accessors
    // =========================================================================

    /// Position relative to the parent widget.
    fn pos(&self) -> Point {
        self.base().pos()
    }

    /// Current size.
    fn size(&self) -> Size {
        self.base().size()
    }

    /// Containment test in the parent's coordinate frame, upper bounds
    /// inclusive.
    fn contains(&self, p: Point) -> bool {
        self.base().contains(p)
    }

    /// Local visibility flag.
    fn visible(&self) -> bool {
        self.base().visible()
    }

    /// Whether the widget accepts interaction.
    fn enabled(&self) -> bool {
        self.base().enabled()
    }

    /// Whether the widget holds keyboard focus.
    fn focused(&self) -> bool {
        self.base().focused()
    }

    /// Stacking level: 0 embedded, above 0 floating.
    fn depth(&self) -> i32 {
        self.base().depth()
    }
}

static_assertions::assert_obj_safe!(Widget);

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain {
        base: WidgetBase,
    }

    impl Widget for Plain {
        fn base(&self) -> &WidgetBase {
            &self.base
        }
        fn base_mut(&mut self) -> &mut WidgetBase {
            &mut self.base
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn default_hooks_decline_events() {
        let mut w = Plain {
            base: WidgetBase::new(),
        };
        assert!(!w.mouse_button_event(Point::ZERO, MouseButton::Left, true, Modifiers::NONE));
        assert!(!w.scroll_event(Point::ZERO, Point::new(0, 1)));
        assert!(!w.keyboard_event(KeyCode(65), 0, KeyAction::Press, Modifiers::NONE));
        assert!(!w.char_event('a'));
    }

    #[test]
    fn default_enter_and_focus_record_flags() {
        let mut w = Plain {
            base: WidgetBase::new(),
        };

        assert!(!w.mouse_enter_event(Point::ZERO, true));
        assert!(w.base().hovered());
        assert!(!w.mouse_enter_event(Point::ZERO, false));
        assert!(!w.base().hovered());

        assert!(!w.focus_event(true));
        assert!(w.focused());
        assert!(!w.focus_event(false));
        assert!(!w.focused());
    }
}
