//! Core systems for Trellis.
//!
//! This crate provides the storage and error layer the widget system builds
//! on:
//!
//! - [`ObjectArena`] / [`WidgetId`]: arena-based tree storage with stable
//!   ids, order-preserving child sequences, and circular-parentage rejection
//! - [`ObjectError`] / [`ObjectResult`]: the structural error taxonomy
//! - [`logging`]: `tracing` targets and tree-dump glyphs
//!
//! Everything here is single-threaded by design: the widget tree is a
//! cooperative, synchronous structure, so the arena takes `&mut self` for
//! mutation and requires no locking discipline.

pub mod error;
pub mod logging;
pub mod object;

pub use error::{ObjectError, ObjectResult};
pub use logging::TreeStyle;
pub use object::{ObjectArena, WidgetId};
