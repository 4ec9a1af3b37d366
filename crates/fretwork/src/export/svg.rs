//! SVG rendering of recorded draw commands.
//!
//! Every [`DrawCommand`] becomes one SVG element in drawing order: stroked
//! paths and filled paths become `<path>` elements, text runs become
//! `<text>` elements with an alphabetic baseline at the recorded position.
//!
//! Arcs are converted to SVG elliptical-arc segments. A full circle cannot be
//! expressed as a single arc segment, so sweeps of a full turn are split into
//! two halves.

use std::f32::consts::{PI, TAU};

use log::{debug, info};
use svg::{
    Document, Node,
    node::{Text as SvgText, element as svg_element},
};

use fretwork_core::{
    apply_stroke,
    color::Color,
    draw::{DrawCommand, FontDefinition, Path, PathSegment, StrokeDefinition},
    geometry::{Point, Size},
};

use super::{Error, Exporter};

/// Builder for [`Svg`] exporters.
#[derive(Debug, Clone)]
pub struct SvgBuilder {
    size: Size,
    background: Option<Color>,
}

impl SvgBuilder {
    /// Starts a builder for a document of `size` pixels.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            background: None,
        }
    }

    /// Sets the background color. `None` leaves the document transparent.
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Builds the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the document size is not drawable.
    pub fn build(self) -> Result<Svg, Error> {
        if !self.size.is_drawable() {
            return Err(Error::Render(format!(
                "invalid document size {}x{}",
                self.size.width(),
                self.size.height()
            )));
        }

        Ok(Svg {
            size: self.size,
            background: self.background,
        })
    }
}

/// SVG exporter for draw commands.
#[derive(Debug, Clone)]
pub struct Svg {
    size: Size,
    background: Option<Color>,
}

impl Svg {
    pub fn size(&self) -> Size {
        self.size
    }

    /// Renders `commands` into an SVG document.
    pub fn render_document(&self, commands: &[DrawCommand]) -> Document {
        let (width, height) = (self.size.width(), self.size.height());
        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        if let Some(background) = self.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", background.to_string())
                    .set("fill-opacity", background.alpha()),
            );
        }

        for command in commands {
            doc = match command {
                DrawCommand::StrokePath { path, stroke } => doc.add(stroked_path(path, stroke)),
                DrawCommand::FillPath { path, color } => doc.add(filled_path(path, *color)),
                DrawCommand::FillText {
                    text,
                    position,
                    font,
                    color,
                } => doc.add(text_run(text, *position, font, *color)),
            };
        }

        doc
    }
}

impl Exporter for Svg {
    fn export_commands(&self, commands: &[DrawCommand]) -> Result<String, Error> {
        debug!(commands = commands.len(); "Rendering SVG document");
        let doc = self.render_document(commands);

        let mut buffer = Vec::new();
        svg::write(&mut buffer, &doc).map_err(Error::Io)?;
        let output = String::from_utf8(buffer).map_err(|err| Error::Render(err.to_string()))?;

        info!(bytes = output.len(); "SVG document rendered");
        Ok(output)
    }
}

fn stroked_path(path: &Path, stroke: &StrokeDefinition) -> svg_element::Path {
    let element = svg_element::Path::new().set("d", path_data(path));
    apply_stroke!(element, stroke)
}

fn filled_path(path: &Path, color: Color) -> svg_element::Path {
    svg_element::Path::new()
        .set("d", path_data(path))
        .set("fill", color.to_string())
        .set("fill-opacity", color.alpha())
}

/// Builds a `<text>` element with the run inline.
///
/// `element::Text` writes its content on a line of its own, which leaves
/// newlines inside the label; a plain element keeps `<text ..>Am</text>`.
fn text_run(
    text: &str,
    position: Point,
    font: &FontDefinition,
    color: Color,
) -> svg_element::Element {
    let mut element = svg_element::Element::new("text");
    element.assign("x", position.x());
    element.assign("y", position.y());
    element.assign("font-family", font.family());
    element.assign("font-size", font.size());
    element.assign("fill", color.to_string());
    element.assign("fill-opacity", color.alpha());
    if font.is_bold() {
        element.assign("font-weight", "bold");
    }
    element.append(SvgText::new(text));
    element
}

/// Converts path segments to SVG path data.
///
/// Like a canvas context, an arc is joined to the current point with a
/// straight line, or starts a new subpath when there is none.
fn path_data(path: &Path) -> String {
    let mut data = Vec::with_capacity(path.segments().len());
    let mut has_current_point = false;

    for segment in path.segments() {
        match *segment {
            PathSegment::MoveTo(point) => {
                data.push(format!("M {} {}", point.x(), point.y()));
                has_current_point = true;
            }
            PathSegment::LineTo(point) => {
                let command = if has_current_point { "L" } else { "M" };
                data.push(format!("{command} {} {}", point.x(), point.y()));
                has_current_point = true;
            }
            PathSegment::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                let start = center.on_circle(radius, start_angle);
                let command = if has_current_point { "L" } else { "M" };
                data.push(format!("{command} {} {}", start.x(), start.y()));
                data.extend(arc_data(center, radius, start_angle, end_angle));
                has_current_point = true;
            }
            PathSegment::Close => data.push("Z".to_string()),
        }
    }

    data.join(" ")
}

/// Emits clockwise arc segments from `start_angle` to `end_angle`.
fn arc_data(center: Point, radius: f32, start_angle: f32, end_angle: f32) -> Vec<String> {
    let sweep = end_angle - start_angle;
    if sweep <= 0.0 || radius <= 0.0 {
        return Vec::new();
    }

    if sweep >= TAU {
        let half = center.on_circle(radius, start_angle + PI);
        let start = center.on_circle(radius, start_angle);
        return vec![
            arc_segment(radius, false, half),
            arc_segment(radius, false, start),
        ];
    }

    let end = center.on_circle(radius, end_angle);
    vec![arc_segment(radius, sweep > PI, end)]
}

fn arc_segment(radius: f32, large_arc: bool, to: Point) -> String {
    format!(
        "A {radius} {radius} 0 {} 1 {} {}",
        u8::from(large_arc),
        to.x(),
        to.y()
    )
}

#[cfg(test)]
mod tests {
    use fretwork_core::draw::{DisplayList, Surface};

    use super::*;

    fn exporter() -> Svg {
        SvgBuilder::new(Size::new(100.0, 120.0)).build().unwrap()
    }

    #[test]
    fn test_builder_rejects_empty_size() {
        let result = SvgBuilder::new(Size::new(0.0, 120.0)).build();
        assert!(matches!(result, Err(Error::Render(_))));
    }

    #[test]
    fn test_line_path_data() {
        let mut path = Path::new();
        path.push(PathSegment::MoveTo(Point::new(1.0, 2.0)));
        path.push(PathSegment::LineTo(Point::new(1.0, 9.5)));
        assert_eq!(path_data(&path), "M 1 2 L 1 9.5");
    }

    #[test]
    fn test_full_circle_is_split_in_two_arcs() {
        let mut path = Path::new();
        path.push(PathSegment::Arc {
            center: Point::new(10.0, 10.0),
            radius: 4.0,
            start_angle: 0.0,
            end_angle: TAU,
        });

        let data = path_data(&path);
        assert!(data.starts_with("M 14 10 "), "unexpected path data: {data}");
        assert_eq!(data.matches('A').count(), 2);
    }

    #[test]
    fn test_quarter_arc_uses_small_arc_flag() {
        let segments = arc_data(Point::new(0.0, 0.0), 2.0, 0.0, PI / 2.0);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].starts_with("A 2 2 0 0 1 "));
    }

    #[test]
    fn test_export_contains_every_command() {
        let mut list = DisplayList::new();
        list.save();
        list.set_stroke_color(Color::new("red").unwrap());
        list.begin_path();
        list.move_to(Point::new(5.0, 5.0));
        list.line_to(Point::new(5.0, 100.0));
        list.stroke();
        list.restore();

        list.begin_path();
        list.arc(Point::new(20.0, 20.0), 5.0, 0.0, TAU);
        list.fill();

        list.set_font(FontDefinition::new("Times", 12.0).bold());
        list.fill_text("Am", Point::new(30.0, 12.0));

        let output = exporter().export_commands(list.commands()).unwrap();
        assert!(output.contains("<svg"));
        assert_eq!(output.matches("<path").count(), 2);
        assert!(output.contains("font-weight=\"bold\""));
        assert!(output.contains(">Am<"));
        assert!(output.contains("stroke-width=\"1\""));
    }

    #[test]
    fn test_text_run_is_inline_and_escaped() {
        let font = FontDefinition::new("Arial", 10.0);
        let run = text_run("C<5", Point::new(1.0, 2.0), &font, Color::new("black").unwrap());

        let markup = run.to_string();
        assert!(markup.starts_with("<text "));
        assert!(markup.ends_with(">C&lt;5</text>"));
        assert!(!markup.contains('\n'));
        assert!(!markup.contains("font-weight"));
    }

    #[test]
    fn test_background_rectangle() {
        let svg = SvgBuilder::new(Size::new(50.0, 60.0))
            .with_background(Some(Color::white()))
            .build()
            .unwrap();

        let output = svg.export_commands(&[]).unwrap();
        assert!(output.contains("<rect"));
        assert!(output.contains("width=\"50\""));
    }
}
