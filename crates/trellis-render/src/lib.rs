//! Geometry types and the 2D vector-context capability for Trellis.
//!
//! The widget core draws through [`Painter`], a borrowed capability trait;
//! concrete rasterizing backends live outside the core. This crate provides
//! the shared vocabulary ([`Point`], [`Size`], [`Rect`], [`Color`],
//! [`Stroke`]) and a [`RecordingPainter`] backend for tests and demos.

pub mod painter;
pub mod recording;
pub mod types;

pub use painter::{ImageHandle, Painter};
pub use recording::{DrawCommand, RecordingPainter};
pub use types::{Color, Point, Rect, Size, Stroke};
