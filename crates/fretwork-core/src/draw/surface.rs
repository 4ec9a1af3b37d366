//! The drawing-surface capability consumed by chord rendering.
//!
//! [`Surface`] follows the immediate-mode model of a 2D canvas context:
//! state setters (colors, line width, font), path construction, stroke/fill
//! operations, text drawing and a save/restore stack. Renderers bracket every
//! stateful primitive with [`Surface::save`] and [`Surface::restore`] so that
//! styling never leaks between primitives.
//!
//! [`DrawState`] and [`StateStack`] implement the state half of the contract
//! and can be reused by surface implementations.

use crate::{
    color::Color,
    draw::{FontDefinition, StrokeDefinition},
    geometry::Point,
};

/// A 2D drawing surface.
pub trait Surface {
    /// Pushes the current drawing state.
    fn save(&mut self);

    /// Pops the most recently saved drawing state. Does nothing when no state
    /// was saved.
    fn restore(&mut self);

    fn set_stroke_color(&mut self, color: Color);

    fn set_fill_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f32);

    fn set_font(&mut self, font: FontDefinition);

    /// Starts a new, empty path.
    fn begin_path(&mut self);

    /// Starts a new subpath at `point`.
    fn move_to(&mut self, point: Point);

    /// Adds a straight segment from the current point to `point`.
    fn line_to(&mut self, point: Point);

    /// Adds a clockwise circular arc around `center`. Angles are in radians,
    /// measured from the positive x-axis towards +Y.
    fn arc(&mut self, center: Point, radius: f32, start_angle: f32, end_angle: f32);

    /// Closes the current subpath.
    fn close_path(&mut self);

    /// Strokes the current path with the current stroke color and line width.
    fn stroke(&mut self);

    /// Fills the current path with the current fill color.
    fn fill(&mut self);

    /// Returns the width of `text` in the current font.
    fn measure_text(&mut self, text: &str) -> f32;

    /// Draws `text` with its alphabetic baseline starting at `position`,
    /// using the current font and fill color.
    fn fill_text(&mut self, text: &str, position: Point);
}

/// The mutable drawing state of a surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawState {
    stroke: StrokeDefinition,
    fill_color: Color,
    font: FontDefinition,
}

impl DrawState {
    /// Returns the stroke (color and line width) in effect.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn font(&self) -> &FontDefinition {
        &self.font
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke.set_color(color);
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.stroke.set_width(width);
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn set_font(&mut self, font: FontDefinition) {
        self.font = font;
    }
}

/// A current [`DrawState`] plus the stack of saved states.
#[derive(Debug, Clone, Default)]
pub struct StateStack {
    current: DrawState,
    saved: Vec<DrawState>,
}

impl StateStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &DrawState {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut DrawState {
        &mut self.current
    }

    pub fn save(&mut self) {
        self.saved.push(self.current.clone());
    }

    pub fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.current = state;
        }
    }

    /// Number of saved states not yet restored.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}
