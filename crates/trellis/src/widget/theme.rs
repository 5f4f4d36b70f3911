//! Read-only style values shared across a tree.
//!
//! A `Theme` is immutable from the tree's perspective: many nodes share one
//! via `Arc`, and nothing in the core ever writes through it. Widgets
//! consult it during layout and draw; a per-node font-size override of zero
//! means "inherit from the theme".

use trellis_render::Color;

/// Read-only style record consumed during layout and draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Default font size for widgets without an override.
    pub standard_font_size: i32,
    /// Font size for button-like widgets.
    pub button_font_size: i32,
    /// Font size for text-entry widgets.
    pub text_box_font_size: i32,

    /// Primary text color.
    pub text_color: Color,
    /// Text color for disabled widgets.
    pub disabled_text_color: Color,
    /// Fill for focused floating nodes.
    pub window_fill_focused: Color,
    /// Fill for unfocused floating nodes.
    pub window_fill_unfocused: Color,
    /// Dark border shade.
    pub border_dark: Color,
    /// Light border shade.
    pub border_light: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            standard_font_size: 16,
            button_font_size: 20,
            text_box_font_size: 20,
            text_color: Color::from_rgba8(255, 255, 255, 160),
            disabled_text_color: Color::from_rgba8(255, 255, 255, 80),
            window_fill_focused: Color::from_rgba8(45, 45, 45, 230),
            window_fill_unfocused: Color::from_rgba8(43, 43, 43, 230),
            border_dark: Color::from_rgba8(29, 29, 29, 255),
            border_light: Color::from_rgba8(92, 92, 92, 255),
        }
    }
}
