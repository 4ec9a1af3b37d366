//! A [`Surface`] that records resolved drawing commands.
//!
//! [`DisplayList`] keeps no pixels. Every `stroke`, `fill` and `fill_text`
//! call is recorded as a [`DrawCommand`] that carries the geometry together
//! with the drawing state that was active at the time of the call. The list
//! can then be compared, inspected or converted to an output format.
//!
//! # Example
//!
//! ```
//! # use fretwork_core::draw::{DisplayList, DrawCommand, Surface};
//! # use fretwork_core::geometry::Point;
//! # use fretwork_core::color::Color;
//! let mut list = DisplayList::new();
//!
//! list.save();
//! list.set_stroke_color(Color::new("red").unwrap());
//! list.begin_path();
//! list.move_to(Point::new(0.0, 0.0));
//! list.line_to(Point::new(0.0, 10.0));
//! list.stroke();
//! list.restore();
//!
//! assert_eq!(list.commands().len(), 1);
//! let DrawCommand::StrokePath { stroke, .. } = &list.commands()[0] else {
//!     panic!("expected a stroke");
//! };
//! assert_eq!(stroke.color(), Color::new("red").unwrap());
//! ```

use crate::{
    color::Color,
    draw::{
        ApproximateMetrics, FontDefinition, StateStack, StrokeDefinition, Surface, TextMeasure,
    },
    geometry::Point,
};

/// One element of a path.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Clockwise arc; see [`Surface::arc`].
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    Close,
}

/// An ordered list of path segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Returns the end points when the path is exactly one straight line.
    pub fn as_line(&self) -> Option<(Point, Point)> {
        match self.segments.as_slice() {
            [PathSegment::MoveTo(from), PathSegment::LineTo(to)] => Some((*from, *to)),
            _ => None,
        }
    }

    /// Returns the first arc of the path, if any.
    pub fn first_arc(&self) -> Option<(Point, f32)> {
        self.segments.iter().find_map(|segment| match segment {
            PathSegment::Arc { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
    }
}

/// A recorded drawing operation with its resolved state.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    StrokePath {
        path: Path,
        stroke: StrokeDefinition,
    },
    FillPath {
        path: Path,
        color: Color,
    },
    FillText {
        text: String,
        position: Point,
        font: FontDefinition,
        color: Color,
    },
}

/// A recording surface.
///
/// Text is measured with `M`, [`ApproximateMetrics`] by default.
#[derive(Debug, Clone)]
pub struct DisplayList<M = ApproximateMetrics> {
    state: StateStack,
    path: Path,
    commands: Vec<DrawCommand>,
    metrics: M,
}

impl DisplayList {
    /// Creates an empty display list with approximate text metrics.
    pub fn new() -> Self {
        Self::with_metrics(ApproximateMetrics)
    }
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: TextMeasure> DisplayList<M> {
    /// Creates an empty display list measuring text with `metrics`.
    pub fn with_metrics(metrics: M) -> Self {
        Self {
            state: StateStack::new(),
            path: Path::new(),
            commands: Vec::new(),
            metrics,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Number of `save` calls not matched by a `restore`.
    pub fn save_depth(&self) -> usize {
        self.state.depth()
    }
}

impl<M: TextMeasure> Surface for DisplayList<M> {
    fn save(&mut self) {
        self.state.save();
    }

    fn restore(&mut self) {
        self.state.restore();
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.current_mut().set_stroke_color(color);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.current_mut().set_fill_color(color);
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.current_mut().set_line_width(width);
    }

    fn set_font(&mut self, font: FontDefinition) {
        self.state.current_mut().set_font(font);
    }

    fn begin_path(&mut self) {
        self.path = Path::new();
    }

    fn move_to(&mut self, point: Point) {
        self.path.push(PathSegment::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.path.push(PathSegment::LineTo(point));
    }

    fn arc(&mut self, center: Point, radius: f32, start_angle: f32, end_angle: f32) {
        self.path.push(PathSegment::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn close_path(&mut self) {
        self.path.push(PathSegment::Close);
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::StrokePath {
            path: self.path.clone(),
            stroke: self.state.current().stroke().clone(),
        });
    }

    fn fill(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::FillPath {
            path: self.path.clone(),
            color: self.state.current().fill_color(),
        });
    }

    fn measure_text(&mut self, text: &str) -> f32 {
        self.metrics
            .measure(text, self.state.current().font())
            .width()
    }

    fn fill_text(&mut self, text: &str, position: Point) {
        let state = self.state.current();
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            position,
            font: state.font().clone(),
            color: state.fill_color(),
        });
    }
}
