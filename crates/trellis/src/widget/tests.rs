//! Widget-system integration tests.
//!
//! These exercise the tree, dispatcher, focus, layout pass, and renderer
//! together through a shared instrumented fixture.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use trellis_core::{ObjectError, TreeStyle, WidgetId};
use trellis_render::{
    Color, DrawCommand, Painter, Point, Rect, RecordingPainter, Size, Stroke,
};

use crate::error::TreeError;

use super::dispatcher::EventDispatcher;
use super::events::{KeyAction, KeyCode, Modifiers, MouseButton};
use super::layout::Layout;
use super::painting::FrameRenderer;
use super::panel::Panel;
use super::traits::{PaintContext, Widget};
use super::tree::WidgetTree;

type EventLog = Rc<RefCell<Vec<String>>>;

/// Instrumented widget: appends every hook invocation to a shared log and
/// consumes events according to its flags.
struct TestWidget {
    base: super::base::WidgetBase,
    name: &'static str,
    log: EventLog,
    fill: Color,
    preferred: Option<Size>,
    consume_mouse: bool,
    consume_key: bool,
}

impl TestWidget {
    fn new(name: &'static str, log: &EventLog) -> Self {
        Self {
            base: super::base::WidgetBase::new(),
            name,
            log: log.clone(),
            fill: Color::WHITE,
            preferred: None,
            consume_mouse: false,
            consume_key: false,
        }
    }

    fn at(name: &'static str, log: &EventLog, x: i32, y: i32, w: i32, h: i32) -> Self {
        let mut widget = Self::new(name, log);
        widget.base.set_pos(Point::new(x, y));
        widget.base.set_size(Size::new(w, h));
        widget
    }

    fn fill(mut self, color: Color) -> Self {
        self.fill = color;
        self
    }

    fn preferring(mut self, size: Size) -> Self {
        self.preferred = Some(size);
        self
    }

    fn consuming_mouse(mut self) -> Self {
        self.consume_mouse = true;
        self
    }

    fn consuming_key(mut self) -> Self {
        self.consume_key = true;
        self
    }

    fn record(&self, event: &str) {
        self.log.borrow_mut().push(format!("{}:{}", self.name, event));
    }
}

impl Widget for TestWidget {
    fn base(&self) -> &super::base::WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut super::base::WidgetBase {
        &mut self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        "test"
    }

    fn preferred_size(
        &self,
        tree: &WidgetTree,
        id: WidgetId,
        painter: &mut dyn Painter,
    ) -> Size {
        match self.preferred {
            Some(size) => size,
            None => match self.base.layout() {
                Some(layout) => layout.preferred_size(tree, id, painter),
                None => self.base.size(),
            },
        }
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        ctx.painter().fill_rect(rect, self.fill);
    }

    fn mouse_button_event(
        &mut self,
        pos: Point,
        _button: MouseButton,
        down: bool,
        _mods: Modifiers,
    ) -> bool {
        self.record(&format!(
            "button:{}:{},{}",
            if down { "down" } else { "up" },
            pos.x,
            pos.y
        ));
        self.consume_mouse
    }

    fn mouse_motion_event(
        &mut self,
        _pos: Point,
        _rel: Point,
        _button: Option<MouseButton>,
        _mods: Modifiers,
    ) -> bool {
        self.record("motion");
        false
    }

    fn mouse_drag_event(
        &mut self,
        pos: Point,
        _rel: Point,
        _button: MouseButton,
        _mods: Modifiers,
    ) -> bool {
        self.record(&format!("drag:{},{}", pos.x, pos.y));
        true
    }

    fn mouse_enter_event(&mut self, _pos: Point, entered: bool) -> bool {
        self.record(if entered { "enter" } else { "leave" });
        self.base.set_hovered(entered);
        false
    }

    fn scroll_event(&mut self, _pos: Point, _delta: Point) -> bool {
        self.record("scroll");
        self.consume_mouse
    }

    fn focus_event(&mut self, focused: bool) -> bool {
        self.record(if focused { "focus" } else { "blur" });
        self.base.set_focused(focused);
        false
    }

    fn keyboard_event(
        &mut self,
        _key: KeyCode,
        _scancode: i32,
        _action: KeyAction,
        _mods: Modifiers,
    ) -> bool {
        self.record("key");
        self.consume_key
    }

    fn char_event(&mut self, codepoint: char) -> bool {
        self.record(&format!("char:{codepoint}"));
        true
    }
}

fn log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

fn root_tree(log: &EventLog) -> WidgetTree {
    WidgetTree::new(TestWidget::at("root", log, 0, 0, 200, 200))
}

// =============================================================================
// Tree structure
// =============================================================================

#[test]
fn links_stay_consistent_through_edits() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();

    let a = tree.add_child(root, TestWidget::new("a", &log)).unwrap();
    let b = tree.add_child(root, TestWidget::new("b", &log)).unwrap();
    let inserted = tree
        .insert_child(root, 0, TestWidget::new("first", &log))
        .unwrap();

    assert_eq!(tree.children(root), &[inserted, a, b]);
    assert_eq!(tree.parent(a), Some(root));
    assert_eq!(tree.parent(root), None);

    tree.reparent(b, a).unwrap();
    assert_eq!(tree.children(root), &[inserted, a]);
    assert_eq!(tree.children(a), &[b]);
    assert_eq!(tree.parent(b), Some(a));
}

#[test]
fn removed_child_survives_as_orphan() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let b = tree.add_child(root, TestWidget::new("b", &log)).unwrap();
    let a = tree.add_child(root, TestWidget::new("a", &log)).unwrap();

    assert!(tree.remove_child(root, a));
    assert_eq!(tree.children(root), &[b]);
    assert!(tree.contains_node(a));
    assert_eq!(tree.parent(a), None);

    // Removing it again is a benign no-op.
    assert!(!tree.remove_child(root, a));

    // The orphan is still a valid reparent target.
    tree.reparent(a, root).unwrap();
    assert_eq!(tree.children(root), &[b, a]);
}

#[test]
fn destroy_drops_whole_subtree() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let a = tree.add_child(root, TestWidget::new("a", &log)).unwrap();
    let aa = tree.add_child(a, TestWidget::new("aa", &log)).unwrap();
    let ab = tree.add_child(a, TestWidget::new("ab", &log)).unwrap();

    assert_eq!(tree.destroy(a), 3);
    assert!(!tree.contains_node(a));
    assert!(!tree.contains_node(aa));
    assert!(!tree.contains_node(ab));
    assert_eq!(tree.children(root), &[] as &[WidgetId]);

    // Dead ids and the root are both refused quietly.
    assert_eq!(tree.destroy(a), 0);
    assert_eq!(tree.destroy(root), 0);
    assert!(tree.contains_node(root));
}

#[test]
fn reparent_rejects_cycles() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let a = tree.add_child(root, TestWidget::new("a", &log)).unwrap();
    let b = tree.add_child(a, TestWidget::new("b", &log)).unwrap();

    assert_eq!(
        tree.reparent(a, b),
        Err(TreeError::Object(ObjectError::CircularParentage))
    );
    // Structure is unchanged on failure.
    assert_eq!(tree.parent(a), Some(root));
    assert_eq!(tree.children(a), &[b]);
}

#[test]
fn find_by_id_scans_preorder() {
    let mut tree = WidgetTree::new(Panel::with_id("root"));
    let root = tree.root();
    let a = tree.add_child(root, Panel::with_id("target")).unwrap();
    let _b = tree.add_child(root, Panel::with_id("other")).unwrap();

    assert_eq!(tree.find_by_id("target"), Some(a));
    assert_eq!(tree.find_by_id("missing"), None);
}

// =============================================================================
// Geometry
// =============================================================================

#[test]
fn absolute_position_sums_ancestor_chain() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let a = tree
        .add_child(root, TestWidget::at("a", &log, 10, 20, 100, 100))
        .unwrap();
    let b = tree
        .add_child(a, TestWidget::at("b", &log, 5, 7, 50, 50))
        .unwrap();

    assert_eq!(tree.absolute_position(b), Point::new(15, 27));
    assert_eq!(tree.absolute_position(root), Point::ZERO);
}

#[test]
fn visibility_is_inherited() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let a = tree.add_child(root, TestWidget::new("a", &log)).unwrap();
    let b = tree.add_child(a, TestWidget::new("b", &log)).unwrap();

    assert!(tree.visible_recursive(b));
    tree.widget_mut(a).unwrap().base_mut().set_visible(false);
    assert!(!tree.visible_recursive(a));
    assert!(!tree.visible_recursive(b));
    // The child's own flag is untouched.
    assert!(tree.widget(b).unwrap().visible());
}

#[test]
fn clipping_tightens_with_depth() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let inner = tree
        .add_child(root, TestWidget::at("inner", &log, 150, 150, 100, 100))
        .unwrap();
    let deep = tree
        .add_child(inner, TestWidget::at("deep", &log, 60, 60, 20, 20))
        .unwrap();

    // Inner pokes out of the root but is not fully outside it.
    let inner_bounds = Rect::new(0, 0, 100, 100);
    assert!(!tree.is_clipped(inner, inner_bounds));

    // Deep sits at absolute (210, 210), entirely past the root's 200x200.
    let deep_bounds = Rect::new(0, 0, 20, 20);
    assert!(tree.is_clipped(deep, deep_bounds));

    // Clipping composes through the chain: deep is rejected by the root's
    // bounds even though it fits comfortably inside inner. Moving it
    // locally does not help.
    tree.widget_mut(deep)
        .unwrap()
        .base_mut()
        .set_pos(Point::new(80, 80));
    assert!(tree.is_clipped(deep, deep_bounds));

    // Growing the root is what changes the verdict.
    tree.widget_mut(root)
        .unwrap()
        .base_mut()
        .set_size(Size::new(400, 400));
    assert!(!tree.is_clipped(deep, deep_bounds));
}

#[test]
fn find_window_walks_to_floating_ancestor() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let mut window = TestWidget::at("window", &log, 20, 20, 100, 100);
    window.base.set_depth(1);
    let window = tree.add_child(root, window).unwrap();
    let inner = tree.add_child(window, TestWidget::new("inner", &log)).unwrap();

    assert_eq!(tree.find_window(inner), Ok(window));
    assert_eq!(tree.find_window(window), Ok(window));
    assert_eq!(tree.find_window(root), Err(TreeError::NoWindowAncestor(root)));
}

// =============================================================================
// Traversal and hit-testing
// =============================================================================

#[test]
fn routing_order_is_floating_by_depth_then_embedded_reversed() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let e1 = tree.add_child(root, TestWidget::new("e1", &log)).unwrap();
    let e2 = tree.add_child(root, TestWidget::new("e2", &log)).unwrap();
    let mut w = TestWidget::new("f1", &log);
    w.base.set_depth(2);
    let f1 = tree.add_child(root, w).unwrap();
    let mut w = TestWidget::new("f2", &log);
    w.base.set_depth(5);
    let f2 = tree.add_child(root, w).unwrap();
    let hidden = tree.add_child(root, TestWidget::new("hidden", &log)).unwrap();
    tree.widget_mut(hidden).unwrap().base_mut().set_visible(false);

    assert_eq!(tree.children_reverse_depth_order(root), vec![f2, f1, e2, e1]);
}

#[test]
fn equal_depths_keep_insertion_order() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let mut ids = Vec::new();
    for name in ["w1", "w2", "w3"] {
        let mut w = TestWidget::new(name, &log);
        w.base.set_depth(3);
        ids.push(tree.add_child(root, w).unwrap());
    }

    let order = tree.children_reverse_depth_order(root);
    assert_eq!(order, ids);
    // Repeat calls are deterministic.
    assert_eq!(tree.children_reverse_depth_order(root), order);
}

#[test]
fn find_widget_picks_topmost_overlapping_child() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let _under = tree
        .add_child(root, TestWidget::at("under", &log, 10, 10, 50, 50))
        .unwrap();
    let over = tree
        .add_child(root, TestWidget::at("over", &log, 10, 10, 50, 50))
        .unwrap();

    // Later-inserted embedded siblings draw on top, so they hit-test first.
    assert_eq!(tree.find_widget(root, Point::new(30, 30)), Some(over));
    // Outside both children but inside the root.
    assert_eq!(tree.find_widget(root, Point::new(150, 150)), Some(root));
    // Outside the root entirely.
    assert_eq!(tree.find_widget(root, Point::new(500, 500)), None);
}

#[test]
fn find_widget_prefers_floating_over_embedded() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let _embedded = tree
        .add_child(root, TestWidget::at("embedded", &log, 0, 0, 100, 100))
        .unwrap();
    let mut w = TestWidget::at("floating", &log, 0, 0, 100, 100);
    w.base.set_depth(1);
    let floating = tree.add_child(root, w).unwrap();

    assert_eq!(tree.find_widget(root, Point::new(50, 50)), Some(floating));
}

#[test]
fn containment_is_inclusive_at_edges() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let child = tree
        .add_child(root, TestWidget::at("child", &log, 0, 0, 10, 10))
        .unwrap();

    assert_eq!(tree.find_widget(root, Point::new(10, 10)), Some(child));
    assert_eq!(tree.find_widget(root, Point::new(11, 10)), Some(root));
}

// =============================================================================
// Event dispatch
// =============================================================================

#[test]
fn click_routes_child_first_and_stops_at_consumer() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let panel = tree
        .add_child(root, TestWidget::at("panel", &log, 10, 10, 100, 100))
        .unwrap();
    let _button = tree
        .add_child(
            panel,
            TestWidget::at("button", &log, 20, 20, 40, 20).consuming_mouse(),
        )
        .unwrap();

    let handled = EventDispatcher::mouse_button_event(
        &mut tree,
        root,
        Point::new(40, 40),
        MouseButton::Left,
        true,
        Modifiers::NONE,
    );

    assert!(handled);
    // The deepest widget sees the event in its parent's frame; ancestors
    // never see it at all.
    assert_eq!(log.borrow().as_slice(), &["button:button:down:30,30"]);
}

#[test]
fn unhandled_left_press_focuses_the_dispatch_origin() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let panel = tree
        .add_child(root, TestWidget::at("panel", &log, 10, 10, 100, 100))
        .unwrap();
    let _leaf = tree
        .add_child(panel, TestWidget::at("leaf", &log, 0, 0, 100, 100))
        .unwrap();

    let handled = EventDispatcher::mouse_button_event(
        &mut tree,
        root,
        Point::new(40, 40),
        MouseButton::Left,
        true,
        Modifiers::NONE,
    );

    // Nothing consumed; each level on the path requested focus while
    // unwinding, so the origin holds it at the end.
    assert!(!handled);
    assert_eq!(tree.focused_widget(), Some(root));
}

#[test]
fn right_press_does_not_move_focus() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let child = tree
        .add_child(root, TestWidget::at("child", &log, 0, 0, 50, 50))
        .unwrap();
    tree.request_focus(child).unwrap();

    EventDispatcher::mouse_button_event(
        &mut tree,
        root,
        Point::new(10, 10),
        MouseButton::Right,
        true,
        Modifiers::NONE,
    );
    assert_eq!(tree.focused_widget(), Some(child));
}

#[test]
fn motion_synthesizes_enter_and_leave() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let child = tree
        .add_child(root, TestWidget::at("child", &log, 10, 10, 10, 10))
        .unwrap();

    // From (5, 5) to (15, 15): crosses into the child.
    EventDispatcher::mouse_motion_event(
        &mut tree,
        root,
        Point::new(15, 15),
        Point::new(10, 10),
        None,
        Modifiers::NONE,
    );
    assert!(tree.widget(child).unwrap().base().hovered());
    assert_eq!(log.borrow().first().map(String::as_str), Some("child:enter"));

    log.borrow_mut().clear();

    // From (15, 15) to (35, 35): crosses out again. The leave still reaches
    // the child even though the pointer is no longer inside it.
    EventDispatcher::mouse_motion_event(
        &mut tree,
        root,
        Point::new(35, 35),
        Point::new(20, 20),
        None,
        Modifiers::NONE,
    );
    assert!(!tree.widget(child).unwrap().base().hovered());
    assert!(log.borrow().iter().any(|e| e == "child:leave"));
    assert!(log.borrow().iter().any(|e| e == "child:motion"));
}

#[test]
fn scroll_is_gated_by_containment() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let _child = tree
        .add_child(root, TestWidget::at("child", &log, 100, 100, 50, 50))
        .unwrap();

    EventDispatcher::scroll_event(&mut tree, root, Point::new(10, 10), Point::new(0, 1));
    // The child never sees a scroll outside its bounds; the root's own hook
    // still runs.
    assert_eq!(log.borrow().as_slice(), &["root:scroll"]);
}

#[test]
fn keys_propagate_without_containment() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let panel = tree.add_child(root, TestWidget::new("panel", &log)).unwrap();
    let _leaf = tree
        .add_child(panel, TestWidget::new("leaf", &log).consuming_key())
        .unwrap();

    let handled = EventDispatcher::keyboard_event(
        &mut tree,
        root,
        KeyCode(65),
        30,
        KeyAction::Press,
        Modifiers::NONE,
    );

    // Deepest child first; the consumer stops the walk before any ancestor
    // hook runs.
    assert!(handled);
    assert_eq!(log.borrow().as_slice(), &["leaf:key"]);
}

#[test]
fn char_and_drag_are_terminal_deliveries() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let child = tree
        .add_child(root, TestWidget::at("child", &log, 0, 0, 50, 50))
        .unwrap();

    assert!(EventDispatcher::char_event(&mut tree, child, 'x'));
    assert!(EventDispatcher::mouse_drag_event(
        &mut tree,
        child,
        Point::new(5, 5),
        Point::new(1, 1),
        MouseButton::Left,
        Modifiers::NONE,
    ));
    // Delivered to the target only; no routing through the root.
    assert_eq!(log.borrow().as_slice(), &["child:char:x", "child:drag:5,5"]);
}

// =============================================================================
// Focus
// =============================================================================

#[test]
fn focus_is_exclusive_and_ordered() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let a = tree.add_child(root, TestWidget::new("a", &log)).unwrap();
    let b = tree.add_child(root, TestWidget::new("b", &log)).unwrap();

    tree.request_focus(a).unwrap();
    assert_eq!(tree.focused_widget(), Some(a));

    tree.request_focus(b).unwrap();
    assert_eq!(tree.focused_widget(), Some(b));
    assert!(!tree.widget(a).unwrap().focused());
    assert!(tree.widget(b).unwrap().focused());

    // The old holder is notified before the new one.
    assert_eq!(log.borrow().as_slice(), &["a:focus", "a:blur", "b:focus"]);

    // Re-requesting is a no-op.
    tree.request_focus(b).unwrap();
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn focus_moves_between_window_and_leaf() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let mut w = TestWidget::at("window", &log, 20, 20, 100, 100);
    w.base.set_depth(1);
    let window = tree.add_child(root, w).unwrap();
    let leaf = tree.add_child(window, TestWidget::new("leaf", &log)).unwrap();

    tree.request_focus(leaf).unwrap();
    assert_eq!(tree.focused_widget(), Some(leaf));
    assert!(tree.widget(leaf).unwrap().focused());

    tree.request_focus(window).unwrap();
    assert!(!tree.widget(leaf).unwrap().focused());
    assert!(tree.widget(window).unwrap().focused());
    assert_eq!(tree.focused_widget(), Some(window));
}

#[test]
fn detached_widgets_cannot_take_focus() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let a = tree.add_child(root, TestWidget::new("a", &log)).unwrap();
    let orphan = tree.add_child(root, TestWidget::new("orphan", &log)).unwrap();
    tree.remove_child(root, orphan);

    tree.request_focus(a).unwrap();
    assert_eq!(
        tree.request_focus(orphan),
        Err(TreeError::NodeDetached(orphan))
    );
    // The failed request left focus alone.
    assert_eq!(tree.focused_widget(), Some(a));
}

#[test]
fn removal_revokes_focus_inside_the_subtree() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let panel = tree.add_child(root, TestWidget::new("panel", &log)).unwrap();
    let leaf = tree.add_child(panel, TestWidget::new("leaf", &log)).unwrap();

    tree.request_focus(leaf).unwrap();
    tree.remove_child(root, panel);
    assert_eq!(tree.focused_widget(), None);

    tree.reparent(panel, root).unwrap();
    tree.request_focus(leaf).unwrap();
    tree.destroy(panel);
    assert_eq!(tree.focused_widget(), None);
}

#[test]
fn reattached_subtree_carries_no_stale_focus_flag() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let panel = tree.add_child(root, TestWidget::new("panel", &log)).unwrap();
    let leaf = tree.add_child(panel, TestWidget::new("leaf", &log)).unwrap();
    let other = tree.add_child(root, TestWidget::new("other", &log)).unwrap();

    tree.request_focus(leaf).unwrap();
    tree.remove_child(root, panel);
    // The holder is notified while detaching, not left flagged.
    assert!(!tree.widget(leaf).unwrap().focused());
    assert!(log.borrow().iter().any(|e| e == "leaf:blur"));

    tree.reparent(panel, root).unwrap();
    tree.request_focus(other).unwrap();

    let focused: Vec<WidgetId> = [root, panel, leaf, other]
        .into_iter()
        .filter(|&id| tree.widget(id).unwrap().focused())
        .collect();
    assert_eq!(focused, vec![other]);
}

#[test]
fn clear_focus_notifies_the_holder() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let a = tree.add_child(root, TestWidget::new("a", &log)).unwrap();

    tree.request_focus(a).unwrap();
    tree.clear_focus();
    assert_eq!(tree.focused_widget(), None);
    assert!(!tree.widget(a).unwrap().focused());
    assert_eq!(log.borrow().as_slice(), &["a:focus", "a:blur"]);
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn default_pass_applies_preferred_and_fixed_sizes() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let plain = tree
        .add_child(root, TestWidget::new("plain", &log).preferring(Size::new(50, 20)))
        .unwrap();
    let fixed = tree
        .add_child(root, TestWidget::new("fixed", &log).preferring(Size::new(50, 20)))
        .unwrap();
    tree.widget_mut(fixed)
        .unwrap()
        .base_mut()
        .set_fixed_size(Size::new(100, 0));

    let mut painter = RecordingPainter::new();
    tree.perform_layout(root, &mut painter);

    assert_eq!(tree.widget(plain).unwrap().size(), Size::new(50, 20));
    // Fixed width overrides per axis; the free axis keeps the preference.
    assert_eq!(tree.widget(fixed).unwrap().size(), Size::new(100, 20));
}

#[test]
fn clamp_turns_preferred_into_fixed() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let child = tree
        .add_child(root, TestWidget::new("child", &log).preferring(Size::new(50, 20)))
        .unwrap();
    {
        let base = tree.widget_mut(child).unwrap().base_mut();
        base.set_fixed_size(Size::new(100, 0));
        base.set_clamp_width(true);
    }

    let mut painter = RecordingPainter::new();
    assert_eq!(tree.effective_fixed_size(child, &mut painter), Size::new(50, 0));
    tree.perform_layout(root, &mut painter);
    assert_eq!(tree.widget(child).unwrap().size(), Size::new(50, 20));
}

/// Stacks children vertically at a fixed spacing.
struct Column {
    spacing: i32,
}

impl Layout for Column {
    fn preferred_size(&self, tree: &WidgetTree, id: WidgetId, painter: &mut dyn Painter) -> Size {
        let mut width = 0;
        let mut height = 0;
        for &child in tree.children(id) {
            let pref = tree.preferred_size(child, painter);
            width = width.max(pref.width);
            if height > 0 {
                height += self.spacing;
            }
            height += pref.height;
        }
        Size::new(width, height)
    }

    fn perform(&self, tree: &mut WidgetTree, id: WidgetId, painter: &mut dyn Painter) {
        let mut y = 0;
        for child in tree.children(id).to_vec() {
            let pref = tree.preferred_size(child, painter);
            if let Some(w) = tree.widget_mut(child) {
                w.base_mut().set_pos(Point::new(0, y));
                w.base_mut().set_size(pref);
            }
            y += pref.height + self.spacing;
            tree.perform_layout(child, painter);
        }
    }

    fn name(&self) -> &'static str {
        "column"
    }
}

#[test]
fn attached_layout_owns_the_pass() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    tree.widget_mut(root)
        .unwrap()
        .base_mut()
        .set_layout(Some(Arc::new(Column { spacing: 4 })));
    let a = tree
        .add_child(root, TestWidget::new("a", &log).preferring(Size::new(60, 20)))
        .unwrap();
    let b = tree
        .add_child(root, TestWidget::new("b", &log).preferring(Size::new(40, 30)))
        .unwrap();

    let mut painter = RecordingPainter::new();
    assert_eq!(tree.preferred_size(root, &mut painter), Size::new(60, 54));

    tree.perform_layout(root, &mut painter);
    assert_eq!(tree.widget(a).unwrap().pos(), Point::new(0, 0));
    assert_eq!(tree.widget(b).unwrap().pos(), Point::new(0, 24));
    assert_eq!(tree.widget(b).unwrap().size(), Size::new(40, 30));
}

// =============================================================================
// Rendering
// =============================================================================

fn fill_colors(painter: &RecordingPainter) -> Vec<Color> {
    painter.fills().map(|(_, &color)| color).collect()
}

#[test]
fn draw_order_is_embedded_then_floating_by_depth() {
    let log = log();
    let mut tree = WidgetTree::new(
        TestWidget::at("root", &log, 0, 0, 200, 200).fill(Color::BLACK),
    );
    let root = tree.root();
    tree.add_child(
        root,
        TestWidget::at("a", &log, 0, 0, 50, 50).fill(Color::RED),
    )
    .unwrap();
    let mut high = TestWidget::at("high", &log, 20, 20, 50, 50).fill(Color::BLUE);
    high.base.set_depth(5);
    tree.add_child(root, high).unwrap();
    let mut low = TestWidget::at("low", &log, 10, 10, 50, 50).fill(Color::GREEN);
    low.base.set_depth(1);
    tree.add_child(root, low).unwrap();

    let mut painter = RecordingPainter::new();
    FrameRenderer::new().render(&tree, &mut painter);

    // Root first, then the embedded child, then floating children bottom-up.
    assert_eq!(
        fill_colors(&painter),
        vec![Color::BLACK, Color::RED, Color::GREEN, Color::BLUE]
    );
}

#[test]
fn hidden_and_clipped_subtrees_are_skipped() {
    let log = log();
    let mut tree = WidgetTree::new(
        TestWidget::at("root", &log, 0, 0, 100, 100).fill(Color::BLACK),
    );
    let root = tree.root();
    let hidden = tree
        .add_child(root, TestWidget::at("hidden", &log, 0, 0, 50, 50).fill(Color::RED))
        .unwrap();
    tree.widget_mut(hidden).unwrap().base_mut().set_visible(false);
    let _outside = tree
        .add_child(
            root,
            TestWidget::at("outside", &log, 300, 300, 50, 50).fill(Color::GREEN),
        )
        .unwrap();
    let _partial = tree
        .add_child(
            root,
            TestWidget::at("partial", &log, 90, 90, 50, 50).fill(Color::BLUE),
        )
        .unwrap();

    let mut painter = RecordingPainter::new();
    FrameRenderer::new().render(&tree, &mut painter);

    // Hidden and fully clipped children never paint; partially visible ones
    // do.
    assert_eq!(fill_colors(&painter), vec![Color::BLACK, Color::BLUE]);
}

#[test]
fn hidden_root_suppresses_the_frame() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    tree.widget_mut(root).unwrap().base_mut().set_visible(false);

    let mut painter = RecordingPainter::new();
    FrameRenderer::new().render(&tree, &mut painter);
    assert!(painter.commands().is_empty());
}

#[test]
fn painter_state_is_bracketed_per_widget() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    tree.add_child(root, TestWidget::at("child", &log, 10, 20, 50, 50))
        .unwrap();

    let mut painter = RecordingPainter::new();
    FrameRenderer::new().render(&tree, &mut painter);

    let commands = painter.commands();
    let saves = commands.iter().filter(|c| **c == DrawCommand::Save).count();
    let restores = commands
        .iter()
        .filter(|c| **c == DrawCommand::Restore)
        .count();
    assert_eq!(saves, 2);
    assert_eq!(saves, restores);
    assert!(commands.contains(&DrawCommand::Translate { dx: 10, dy: 20 }));
}

#[test]
fn debug_mode_outlines_every_widget() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    tree.add_child(root, TestWidget::at("child", &log, 0, 0, 50, 50))
        .unwrap();

    let mut painter = RecordingPainter::new();
    FrameRenderer::new()
        .with_debug(true)
        .with_debug_color(Color::GREEN)
        .render(&tree, &mut painter);

    let outlines: Vec<_> = painter
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::StrokeRect { rect, stroke } => Some((*rect, *stroke)),
            _ => None,
        })
        .collect();
    assert_eq!(outlines.len(), 2);
    assert_eq!(outlines[0].1, Stroke::new(Color::GREEN, 1.0));
    assert_eq!(outlines[1].0, Rect::new(0, 0, 50, 50));
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn dump_reflects_structure_and_state() {
    let log = log();
    let mut tree = WidgetTree::new(Panel::with_id("root"));
    let root = tree.root();
    tree.widget_mut(root)
        .unwrap()
        .base_mut()
        .set_size(Size::new(200, 200));
    let a = tree.add_child(root, Panel::with_id("sidebar")).unwrap();
    let b = tree.add_child(root, TestWidget::new("content", &log)).unwrap();
    tree.widget_mut(b).unwrap().base_mut().set_visible(false);
    tree.request_focus(a).unwrap();

    let dump = tree.dump(TreeStyle::Ascii);
    assert!(dump.contains("panel #root [0, 0 200x200]"));
    assert!(dump.contains("|-- panel #sidebar"));
    assert!(dump.contains("focused"));
    assert!(dump.contains("`-- test"));
    assert!(dump.contains("hidden"));
}

#[test]
fn downcast_reaches_the_concrete_widget() {
    let log = log();
    let mut tree = root_tree(&log);
    let root = tree.root();
    let p = tree.add_child(root, Panel::with_id("panel")).unwrap();

    assert!(tree.widget_as::<Panel>(p).is_some());
    assert!(tree.widget_as::<Panel>(root).is_none());
    tree.widget_as_mut::<TestWidget>(root)
        .unwrap()
        .base
        .set_tooltip("hello");
    assert_eq!(tree.widget(root).unwrap().base().tooltip(), "hello");
}
