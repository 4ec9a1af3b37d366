//! Drawing of a laid-out chord diagram onto a [`Surface`].
//!
//! Drawing order: fret-number label, chord name, tuning labels, strings,
//! fret rows, then one marker per string. The whole routine runs inside one
//! `save`/`restore` pair and every primitive inside its own.

use std::f32::consts::TAU;

use log::trace;

use fretwork_core::{
    chord::Marker,
    color::Color,
    draw::{FontDefinition, Surface},
    geometry::Point,
};

use crate::{
    diagram::ChordDiagram,
    layout::{DiagramLayout, LINE_WIDTH, MARKER_LINE_WIDTH},
};

pub(crate) fn draw<S: Surface + ?Sized>(
    diagram: &ChordDiagram,
    layout: &DiagramLayout,
    surface: &mut S,
) {
    surface.save();

    draw_labels(diagram, layout, surface);
    draw_strings(diagram, layout, surface);
    draw_frets(diagram, layout, surface);
    draw_markers(diagram, layout, surface);

    surface.restore();
}

fn draw_labels<S: Surface + ?Sized>(
    diagram: &ChordDiagram,
    layout: &DiagramLayout,
    surface: &mut S,
) {
    let styles = diagram.styles();
    let font = FontDefinition::new(styles.font(), layout.font_size());

    if let Some(label) = diagram.fret_label() {
        surface.save();
        surface.set_font(font.clone());
        surface.fill_text(&label, layout.fret_label_origin());
        surface.restore();
    }

    if let Some(name) = diagram.options().name() {
        surface.save();
        surface.set_font(font.clone().bold());
        let width = surface.measure_text(name);
        surface.fill_text(name, layout.name_origin(width));
        surface.restore();
    }

    if let Some(tuning) = diagram.options().tuning() {
        for (string, label) in tuning.iter().enumerate() {
            surface.save();
            surface.set_font(font.clone());
            let width = surface.measure_text(label);
            surface.fill_text(label, layout.tuning_origin(string, width));
            surface.restore();
        }
    }
}

fn draw_strings<S: Surface + ?Sized>(
    diagram: &ChordDiagram,
    layout: &DiagramLayout,
    surface: &mut S,
) {
    let color = diagram.styles().string();
    for string in 0..diagram.options().string_count() {
        let (from, to) = layout.string_line(string);
        stroke_line(surface, from, to, color, LINE_WIDTH);
    }
}

fn draw_frets<S: Surface + ?Sized>(
    diagram: &ChordDiagram,
    layout: &DiagramLayout,
    surface: &mut S,
) {
    let styles = diagram.styles();
    let open_position = diagram.options().fret_offset() == 0;

    for row in 0..=diagram.options().fret_count() {
        let is_nut = open_position && row == 0;
        let (from, to) = layout.fret_line(row, is_nut);
        if is_nut {
            stroke_line(surface, from, to, styles.nut(), layout.nut_width());
        } else {
            stroke_line(surface, from, to, styles.fret(), LINE_WIDTH);
        }
    }
}

fn draw_markers<S: Surface + ?Sized>(
    diagram: &ChordDiagram,
    layout: &DiagramLayout,
    surface: &mut S,
) {
    let styles = diagram.styles();

    for (string, marker) in diagram.fingering().iter().enumerate() {
        let Some(marker) = marker else {
            continue;
        };
        trace!(string, marker:% = marker; "Drawing marker");

        match marker {
            Marker::Muted => draw_cross(
                surface,
                layout.marker_center(string),
                layout.cross_size(),
                styles.cross(),
            ),
            Marker::Open => {
                surface.save();
                surface.set_stroke_color(styles.open());
                surface.set_line_width(MARKER_LINE_WIDTH);
                surface.begin_path();
                surface.arc(layout.marker_center(string), layout.open_radius(), 0.0, TAU);
                surface.stroke();
                surface.restore();
            }
            Marker::Fretted { position, label } => {
                let center = layout.dot_center(string, position.get());

                surface.save();
                surface.set_fill_color(styles.dot());
                surface.begin_path();
                surface.arc(center, layout.dot_radius(), 0.0, TAU);
                surface.fill();
                surface.restore();

                if let Some(label) = label {
                    surface.save();
                    surface.set_fill_color(Color::white());
                    surface.set_font(FontDefinition::new(
                        styles.font(),
                        layout.dot_label_font_size(),
                    ));
                    let width = surface.measure_text(label);
                    surface.fill_text(label, layout.dot_label_origin(center, width));
                    surface.restore();
                }
            }
        }
    }
}

/// Strokes the two diagonals of a square of `size` centered on `center`.
fn draw_cross<S: Surface + ?Sized>(surface: &mut S, center: Point, size: f32, color: Color) {
    let half = size / 2.0;

    surface.save();
    surface.set_stroke_color(color);
    surface.set_line_width(MARKER_LINE_WIDTH);
    surface.begin_path();
    surface.move_to(Point::new(center.x() - half, center.y() - half));
    surface.line_to(Point::new(center.x() + half, center.y() + half));
    surface.move_to(Point::new(center.x() + half, center.y() - half));
    surface.line_to(Point::new(center.x() - half, center.y() + half));
    surface.stroke();
    surface.restore();
}

fn stroke_line<S: Surface + ?Sized>(
    surface: &mut S,
    from: Point,
    to: Point,
    color: Color,
    width: f32,
) {
    surface.save();
    surface.set_stroke_color(color);
    surface.set_line_width(width);
    surface.begin_path();
    surface.move_to(from);
    surface.line_to(to);
    surface.stroke();
    surface.restore();
}

#[cfg(test)]
mod tests {
    use fretwork_core::{
        draw::{DisplayList, DrawCommand},
        style::StyleTable,
    };

    use super::*;
    use crate::diagram::DiagramOptions;

    fn render(shorthand: &str, options: DiagramOptions) -> Vec<DrawCommand> {
        let diagram =
            ChordDiagram::from_shorthand(shorthand, options, &StyleTable::default()).unwrap();
        let mut surface = DisplayList::new();
        diagram.render(&mut surface, 120.0, 200.0).unwrap();
        assert_eq!(surface.save_depth(), 0);
        surface.into_commands()
    }

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_draw_order() {
        let options = DiagramOptions::new()
            .with_name("C")
            .with_fret_offset(3)
            .with_show_fret_number(true)
            .with_tuning(["E", "A", "D", "G", "B", "E"]);
        let commands = render("x.3/1.2.0.1.0", options);

        assert_eq!(
            texts(&commands),
            vec!["3fr", "C", "E", "A", "D", "G", "B", "E", "1"]
        );
        // Eight labels, six strings and six fret rows come before any marker.
        let first_marker = commands
            .iter()
            .position(|command| match command {
                DrawCommand::StrokePath { path, .. } => path.as_line().is_none(),
                DrawCommand::FillPath { .. } => true,
                DrawCommand::FillText { .. } => false,
            })
            .unwrap();
        assert_eq!(first_marker, 8 + 6 + 6);
    }

    #[test]
    fn test_blank_string_draws_no_marker() {
        let commands = render("-.-.-.-.-.-", DiagramOptions::new());
        assert_eq!(commands.len(), 6 + 6);
    }

    #[test]
    fn test_muted_string_is_a_single_cross_path() {
        let commands = render("x.-.-.-.-.-", DiagramOptions::new());
        let DrawCommand::StrokePath { path, stroke } = commands.last().unwrap() else {
            panic!("expected a stroked cross");
        };
        assert_eq!(path.segments().len(), 4);
        assert_eq!(stroke.width(), MARKER_LINE_WIDTH);
    }

    #[test]
    fn test_dot_label_is_white() {
        let commands = render("-.2/A.-.-.-.-", DiagramOptions::new());
        let DrawCommand::FillText { text, color, .. } = commands.last().unwrap() else {
            panic!("expected a dot label");
        };
        assert_eq!(text, "A");
        assert_eq!(*color, Color::white());
    }
}
