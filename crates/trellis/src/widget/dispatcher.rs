//! Recursive event routing.
//!
//! [`EventDispatcher`] walks the tree from a starting node (usually the
//! root), translating coordinates into each child's parent frame and
//! offering the event to children in routing order before the node's own
//! hook. The first widget whose hook returns `true` consumes the event and
//! the walk stops. The dispatcher holds no state; everything it needs lives
//! in the tree.

use tracing::trace;
use trellis_core::WidgetId;
use trellis_core::logging::targets;
use trellis_render::Point;

use super::events::{KeyAction, KeyCode, Modifiers, MouseButton};
use super::tree::WidgetTree;

/// Stateless tree-walking event router.
pub struct EventDispatcher;

impl EventDispatcher {
    /// Route a mouse press or release starting at `id`. `pos` is in `id`'s
    /// parent frame.
    ///
    /// Children containing the point are tried front-to-back, then the
    /// node's own hook. When nothing consumes a primary-button press, the
    /// node requests focus for itself as the walk unwinds; the shallowest
    /// unhandled node on the path ends up focused.
    pub fn mouse_button_event(
        tree: &mut WidgetTree,
        id: WidgetId,
        pos: Point,
        button: MouseButton,
        down: bool,
        mods: Modifiers,
    ) -> bool {
        let Some(w) = tree.widget(id) else {
            return false;
        };
        let local = pos - w.pos();
        for child in tree.children_reverse_depth_order(id) {
            if tree.widget(child).is_some_and(|cw| cw.contains(local))
                && Self::mouse_button_event(tree, child, local, button, down, mods)
            {
                return true;
            }
        }
        let handled = tree
            .widget_mut(id)
            .is_some_and(|w| w.mouse_button_event(pos, button, down, mods));
        if handled {
            trace!(target: targets::DISPATCH, id = ?id, ?button, down, "mouse button consumed");
            return true;
        }
        if button == MouseButton::Left && down && !tree.widget(id).is_some_and(|w| w.focused()) {
            // Failures are already logged by the focus path.
            let _ = tree.request_focus(id);
        }
        false
    }

    /// Route pointer motion starting at `id`. `pos` is in `id`'s parent
    /// frame; `rel` is the delta since the previous motion event.
    ///
    /// Enter and leave transitions are synthesized here: each child's
    /// containment is compared at `pos` and at `pos - rel`, and a change
    /// delivers `mouse_enter_event` with the untranslated position. The
    /// walk descends into a child that contains either endpoint, so a leave
    /// still reaches the widget the pointer just left.
    pub fn mouse_motion_event(
        tree: &mut WidgetTree,
        id: WidgetId,
        pos: Point,
        rel: Point,
        button: Option<MouseButton>,
        mods: Modifiers,
    ) -> bool {
        let Some(w) = tree.widget(id) else {
            return false;
        };
        let local = pos - w.pos();
        let prev_local = local - rel;
        for child in tree.children_reverse_depth_order(id) {
            let (contained, prev_contained) = match tree.widget(child) {
                Some(cw) => (cw.contains(local), cw.contains(prev_local)),
                None => continue,
            };
            if contained != prev_contained {
                trace!(target: targets::DISPATCH, id = ?child, entered = contained, "enter/leave");
                if let Some(cw) = tree.widget_mut(child) {
                    cw.mouse_enter_event(pos, contained);
                }
            }
            if (contained || prev_contained)
                && Self::mouse_motion_event(tree, child, local, rel, button, mods)
            {
                return true;
            }
        }
        tree.widget_mut(id)
            .is_some_and(|w| w.mouse_motion_event(pos, rel, button, mods))
    }

    /// Route a scroll event starting at `id`. `pos` is in `id`'s parent
    /// frame; children containing the point are tried first.
    pub fn scroll_event(tree: &mut WidgetTree, id: WidgetId, pos: Point, delta: Point) -> bool {
        let Some(w) = tree.widget(id) else {
            return false;
        };
        let local = pos - w.pos();
        for child in tree.children_reverse_depth_order(id) {
            if tree.widget(child).is_some_and(|cw| cw.contains(local))
                && Self::scroll_event(tree, child, local, delta)
            {
                return true;
            }
        }
        tree.widget_mut(id)
            .is_some_and(|w| w.scroll_event(pos, delta))
    }

    /// Route a key event starting at `id`.
    ///
    /// Keyboard events carry no position, so every visible child is offered
    /// the event in routing order before the node's own hook.
    pub fn keyboard_event(
        tree: &mut WidgetTree,
        id: WidgetId,
        key: KeyCode,
        scancode: i32,
        action: KeyAction,
        mods: Modifiers,
    ) -> bool {
        for child in tree.children_reverse_depth_order(id) {
            if Self::keyboard_event(tree, child, key, scancode, action, mods) {
                return true;
            }
        }
        tree.widget_mut(id)
            .is_some_and(|w| w.keyboard_event(key, scancode, action, mods))
    }

    // =========================================================================
    // Terminal deliveries (no routing)
    // =========================================================================

    /// Deliver a drag event directly to `id`, the drag target.
    pub fn mouse_drag_event(
        tree: &mut WidgetTree,
        id: WidgetId,
        pos: Point,
        rel: Point,
        button: MouseButton,
        mods: Modifiers,
    ) -> bool {
        tree.widget_mut(id)
            .is_some_and(|w| w.mouse_drag_event(pos, rel, button, mods))
    }

    /// Deliver an enter or leave transition directly to `id`.
    pub fn mouse_enter_event(
        tree: &mut WidgetTree,
        id: WidgetId,
        pos: Point,
        entered: bool,
    ) -> bool {
        tree.widget_mut(id)
            .is_some_and(|w| w.mouse_enter_event(pos, entered))
    }

    /// Deliver a translated character directly to `id` (normally the
    /// focused widget).
    pub fn char_event(tree: &mut WidgetTree, id: WidgetId, codepoint: char) -> bool {
        tree.widget_mut(id).is_some_and(|w| w.char_event(codepoint))
    }

    /// Deliver an IME preedit update directly to `id`.
    pub fn ime_preedit_event(
        tree: &mut WidgetTree,
        id: WidgetId,
        text: &str,
        blocks: &[usize],
        focused_block: i32,
    ) -> bool {
        tree.widget_mut(id)
            .is_some_and(|w| w.ime_preedit_event(text, blocks, focused_block))
    }

    /// Deliver an IME on/off transition directly to `id`.
    pub fn ime_status_event(tree: &mut WidgetTree, id: WidgetId) -> bool {
        tree.widget_mut(id).is_some_and(|w| w.ime_status_event())
    }
}
