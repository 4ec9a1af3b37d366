//! Drawing primitives for chord diagrams.
//!
//! Rendering code talks to a [`Surface`], an abstract 2D canvas. The
//! [`DisplayList`] surface records every primitive as a [`DrawCommand`] so
//! that output can be inspected in tests or converted to SVG.

mod display_list;
mod stroke;
mod surface;
mod text;

pub use display_list::{DisplayList, DrawCommand, Path, PathSegment};
pub use stroke::StrokeDefinition;
pub use surface::{DrawState, StateStack, Surface};
pub use text::{ApproximateMetrics, FontDefinition, FontMetrics, TextMeasure};
