//! Stroke definitions for line-based primitives.
//!
//! A [`StrokeDefinition`] captures the stroke state that was active on a
//! surface when a path was stroked: its color and line width. Recorded strokes
//! are applied to SVG elements with the [`apply_stroke!`](crate::apply_stroke!)
//! macro.
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#000000"`, `0.5` |
//! | `width` | `stroke-width` | `2.0` |
//!
//! ```
//! use fretwork_core::draw::StrokeDefinition;
//! use fretwork_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::new(Color::new("black").unwrap(), 2.0);
//! let line = svg_element::Path::new().set("d", "M 0 0 L 10 10");
//! let line = fretwork_core::apply_stroke!(line, &stroke);
//! ```

use crate::color::Color;

/// A stroke definition for rendering lines and outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width in pixels.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }
}

impl Default for StrokeDefinition {
    /// Black, 1px: the initial stroke state of a fresh surface.
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
        }
    }
}

/// Apply stroke attributes to an SVG element.
///
/// Sets color, opacity and width, and disables filling so that open paths
/// render as lines only.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("fill", "none")
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    }};
}
