//! The borrowed 2D vector-context capability.
//!
//! The widget core never owns a drawing backend; it borrows a
//! `&mut dyn Painter` for the duration of a layout or draw pass. Concrete
//! backends (GPU, software, terminal capture) live outside the core and
//! implement this trait.

use crate::types::{Color, Point, Rect, Stroke};

/// An opaque handle to an image owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

/// The 2D vector-drawing capability consumed by the widget core.
///
/// The coordinate frame is mutable state: [`translate`](Painter::translate)
/// moves the origin, and [`save`](Painter::save)/[`restore`](Painter::restore)
/// bracket frame and clip changes so a caller can always unwind what it did.
/// Clip rectangles intersect; they never widen an outer clip.
pub trait Painter {
    /// Push the current transform and clip state.
    fn save(&mut self);

    /// Pop to the most recently saved transform and clip state.
    fn restore(&mut self);

    /// Translate the coordinate frame.
    fn translate(&mut self, dx: i32, dy: i32);

    /// Intersect the clip region with a rectangle in the current frame.
    fn intersect_clip(&mut self, rect: Rect);

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Draw a line segment.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Draw a run of text with its baseline-left corner at `pos`.
    fn draw_text(&mut self, pos: Point, text: &str, font_size: i32, color: Color);

    /// Measure the advance width of a run of text.
    ///
    /// Layout strategies call this while computing preferred sizes, so it is
    /// part of the capability rather than a separate text service.
    fn text_width(&mut self, text: &str, font_size: i32) -> i32;

    /// Draw a backend-owned image into a destination rectangle.
    fn draw_image(&mut self, image: ImageHandle, dest: Rect);
}
