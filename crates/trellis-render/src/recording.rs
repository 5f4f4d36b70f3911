//! A recording [`Painter`] backend.
//!
//! `RecordingPainter` captures every draw call as a [`DrawCommand`] instead
//! of rasterizing. Tests assert on the recorded sequence (draw order, clip
//! and translation bracketing); demos print it.

use crate::painter::{ImageHandle, Painter};
use crate::types::{Color, Point, Rect, Stroke};

/// One recorded painter call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate { dx: i32, dy: i32 },
    ClipRect(Rect),
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, stroke: Stroke },
    Line { from: Point, to: Point, stroke: Stroke },
    Text {
        pos: Point,
        text: String,
        font_size: i32,
        color: Color,
    },
    Image { image: ImageHandle, dest: Rect },
}

/// A painter that records commands for later inspection.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    commands: Vec<DrawCommand>,
    /// Per-character advance used by [`Painter::text_width`]; a crude but
    /// deterministic stand-in for real shaping.
    advance_ratio: f32,
}

impl RecordingPainter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            advance_ratio: 0.5,
        }
    }

    /// The recorded commands in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Consume the recorder and return the command list.
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// The recorded fill commands, in call order.
    pub fn fills(&self) -> impl Iterator<Item = (&Rect, &Color)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillRect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }
}

impl Painter for RecordingPainter {
    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn intersect_clip(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClipRect(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            stroke: *stroke,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: *stroke,
        });
    }

    fn draw_text(&mut self, pos: Point, text: &str, font_size: i32, color: Color) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_owned(),
            font_size,
            color,
        });
    }

    fn text_width(&mut self, text: &str, font_size: i32) -> i32 {
        (text.chars().count() as f32 * font_size as f32 * self.advance_ratio) as i32
    }

    fn draw_image(&mut self, image: ImageHandle, dest: Rect) {
        self.commands.push(DrawCommand::Image { image, dest });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let mut painter = RecordingPainter::new();
        painter.save();
        painter.translate(5, 7);
        painter.fill_rect(Rect::new(0, 0, 10, 10), Color::RED);
        painter.restore();

        assert_eq!(
            painter.commands(),
            &[
                DrawCommand::Save,
                DrawCommand::Translate { dx: 5, dy: 7 },
                DrawCommand::FillRect {
                    rect: Rect::new(0, 0, 10, 10),
                    color: Color::RED,
                },
                DrawCommand::Restore,
            ]
        );
    }

    #[test]
    fn text_width_is_deterministic() {
        let mut painter = RecordingPainter::new();
        let a = painter.text_width("hello", 16);
        let b = painter.text_width("hello", 16);
        assert_eq!(a, b);
        assert!(painter.text_width("hello world", 16) > a);
    }
}
