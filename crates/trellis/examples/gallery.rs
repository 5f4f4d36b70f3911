//! Builds a small widget tree, runs a layout pass, dispatches a few input
//! events, and renders one frame into a recording painter.
//!
//! Run with logging enabled to watch the tree work:
//!
//! ```sh
//! RUST_LOG=trellis=debug cargo run --example gallery
//! ```

use std::any::Any;
use std::sync::Arc;

use trellis::prelude::*;

/// A label that fills its background and draws its text.
struct Label {
    base: WidgetBase,
    text: String,
    background: Color,
}

impl Label {
    fn new(text: impl Into<String>, background: Color) -> Self {
        let mut base = WidgetBase::new();
        base.set_cursor(CursorShape::Hand);
        Self {
            base,
            text: text.into(),
            background,
        }
    }
}

impl Widget for Label {
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

    fn type_name(&self) -> &'static str {
        "label"
    }

    fn preferred_size(&self, _tree: &WidgetTree, _id: WidgetId, painter: &mut dyn Painter) -> Size {
        let font_size = self.base.font_size();
        let width = painter.text_width(&self.text, font_size) + 16;
        Size::new(width, font_size + 12)
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        let font_size = self.base.font_size();
        let color = self.base.theme().text_color;
        let painter = ctx.painter();
        painter.fill_rect(rect, self.background);
        painter.draw_text(Point::new(8, rect.height() / 2), &self.text, font_size, color);
    }

    fn mouse_button_event(
        &mut self,
        pos: Point,
        button: MouseButton,
        down: bool,
        _mods: Modifiers,
    ) -> bool {
        if button == MouseButton::Left && down {
            println!("clicked {:?} at ({}, {})", self.text, pos.x, pos.y);
            return true;
        }
        false
    }
}

/// Stacks children vertically with uniform spacing.
struct Column {
    spacing: i32,
    margin: i32,
}

impl Layout for Column {
    fn preferred_size(&self, tree: &WidgetTree, id: WidgetId, painter: &mut dyn Painter) -> Size {
        let mut size = Size::new(0, self.margin * 2);
        for (i, &child) in tree.children(id).iter().enumerate() {
            let pref = tree.preferred_size(child, painter);
            size.width = size.width.max(pref.width + self.margin * 2);
            if i > 0 {
                size.height += self.spacing;
            }
            size.height += pref.height;
        }
        size
    }

    fn perform(&self, tree: &mut WidgetTree, id: WidgetId, painter: &mut dyn Painter) {
        let mut y = self.margin;
        for child in tree.children(id).to_vec() {
            let pref = tree.preferred_size(child, painter);
            if let Some(w) = tree.widget_mut(child) {
                w.base_mut().set_pos(Point::new(self.margin, y));
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

fn main() {
    tracing_subscriber::fmt::init();

    let mut root = Panel::with_id("screen");
    root.base_mut().set_size(Size::new(800, 600));
    let mut tree = WidgetTree::new(root);

    // A floating window holding a column of labels.
    let mut window = Panel::with_id("window");
    window.base_mut().set_depth(1);
    window.base_mut().set_pos(Point::new(120, 80));
    window.base_mut().set_size(Size::new(240, 180));
    window
        .base_mut()
        .set_layout(Some(Arc::new(Column { spacing: 6, margin: 10 })));
    let window = tree.add_child(tree.root(), window).unwrap();

    let title = tree
        .add_child(window, Label::new("Gallery", Color::from_rgb8(60, 60, 70)))
        .unwrap();
    tree.widget_mut(title).unwrap().base_mut().set_font_size(24);
    tree.add_child(window, Label::new("First entry", Color::from_rgb8(50, 50, 58)))
        .unwrap();
    tree.add_child(window, Label::new("Second entry", Color::from_rgb8(50, 50, 58)))
        .unwrap();

    let mut painter = RecordingPainter::new();
    tree.perform_layout(tree.root(), &mut painter);
    painter.clear();

    println!("{}", tree.dump(TreeStyle::Unicode));

    // Click on the title label (absolute coordinates, routed from the root).
    let target = tree.absolute_position(title) + Point::new(4, 4);
    let root_id = tree.root();
    EventDispatcher::mouse_button_event(
        &mut tree,
        root_id,
        target,
        MouseButton::Left,
        true,
        Modifiers::NONE,
    );

    // Hit-test the same point and report what is under it.
    if let Some(hit) = tree.find_widget(root_id, target) {
        let w = tree.widget(hit).unwrap();
        println!("under cursor: {}", w.type_name());
    }

    // Render one frame with debug outlines and dump the command stream.
    FrameRenderer::new().with_debug(true).render(&tree, &mut painter);
    println!("recorded {} draw commands", painter.commands().len());
    for command in painter.commands().iter().take(12) {
        println!("  {command:?}");
    }
}
