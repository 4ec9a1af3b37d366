//! Geometry of a chord diagram.
//!
//! [`DiagramLayout`] maps the string/fret grid of a diagram onto pixel
//! coordinates of a surface. Everything is derived from one length, the
//! *fret unit*, so the diagram scales uniformly with the surface:
//!
//! ```text
//!            name                   margin_top = fret_unit
//!          E A D G B E                          (+ font size with a name)
//!          x     o   o
//!   ml  ═══════════════   3fr       <- nut (open position) or fret row 0
//!        │ │ │ │ │ │
//!       ───────────────
//!        │ ● │ │ │ │                <- dot centered in its row
//!       ───────────────
//!                      mr = fret_unit / 2 (+ fret label width)
//! ```

use fretwork_core::geometry::{Insets, Point, Size};

/// Smallest line width of the nut, so that it stays visibly thicker than the
/// 1px fret rows on tiny surfaces.
const MIN_NUT_WIDTH: f32 = 2.0;

/// Line width of fret rows and strings.
pub const LINE_WIDTH: f32 = 1.0;

/// Line width of the open and muted markers.
pub const MARKER_LINE_WIDTH: f32 = 2.0;

/// Inputs to the layout that do not come from the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub string_count: usize,
    pub fret_count: u32,
    pub has_name: bool,
    /// Measured width of the fret-number label, if one is drawn.
    pub fret_label_width: Option<f32>,
}

/// Pixel geometry of a diagram on a surface of a given size.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramLayout {
    size: Size,
    string_count: usize,
    fret_count: u32,
    fret_unit: f32,
    font_size: f32,
    margins: Insets,
    string_unit: f32,
    row_height: f32,
    nut_width: f32,
}

impl DiagramLayout {
    /// Computes the layout.
    ///
    /// `size` must be drawable, `string_count` at least 2 and `fret_count`
    /// at least 1; [`ChordDiagram`](crate::diagram::ChordDiagram) validates
    /// these before calling.
    pub fn compute(size: Size, params: LayoutParams) -> Self {
        let strings = params.string_count as f32;
        let frets = params.fret_count as f32;

        let fret_unit = (size.height() / (frets + 1.0)).min(size.width() / strings);
        let font_size = fret_unit * 2.0 / 3.0;

        let mut margins = Insets::new(fret_unit, fret_unit / 2.0, 0.0, fret_unit / 2.0);
        if params.has_name {
            margins = margins.with_top(margins.top() + font_size);
        }
        if let Some(width) = params.fret_label_width {
            margins = margins.with_right(margins.right() + width);
        }

        let symbol_width = size.width() - margins.horizontal_sum() - 1.0;
        let symbol_height = size.height() - margins.top() - 1.0;

        Self {
            size,
            string_count: params.string_count,
            fret_count: params.fret_count,
            fret_unit,
            font_size,
            margins,
            string_unit: symbol_width / (strings - 1.0),
            row_height: symbol_height / frets,
            nut_width: (fret_unit / 4.0).max(MIN_NUT_WIDTH),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The base length all other measures derive from.
    pub fn fret_unit(&self) -> f32 {
        self.fret_unit
    }

    /// Font size of the name, tuning and fret-number labels.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Font size of labels inside dots.
    pub fn dot_label_font_size(&self) -> f32 {
        self.font_size * 0.75
    }

    pub fn margins(&self) -> Insets {
        self.margins
    }

    /// Width of the grid, from the first to the last string.
    pub fn symbol_width(&self) -> f32 {
        self.string_unit * (self.string_count as f32 - 1.0)
    }

    /// Height of the grid, from the top row to the bottom row.
    pub fn symbol_height(&self) -> f32 {
        self.row_height * self.fret_count as f32
    }

    /// Horizontal distance between strings.
    pub fn string_unit(&self) -> f32 {
        self.string_unit
    }

    /// Vertical distance between fret rows.
    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Line width of the nut.
    pub fn nut_width(&self) -> f32 {
        self.nut_width
    }

    pub fn string_x(&self, string: usize) -> f32 {
        self.margins.left() + string as f32 * self.string_unit
    }

    /// End points of the vertical line of `string`, down to the bottom edge.
    pub fn string_line(&self, string: usize) -> (Point, Point) {
        let x = self.string_x(string);
        (
            Point::new(x, self.margins.top()),
            Point::new(x, self.size.height() - self.margins.bottom()),
        )
    }

    pub fn fret_y(&self, row: u32) -> f32 {
        self.margins.top() + row as f32 * self.row_height
    }

    /// End points of the horizontal line of fret `row`. The nut starts half a
    /// pixel further left to cover the first string fully.
    pub fn fret_line(&self, row: u32, is_nut: bool) -> (Point, Point) {
        let y = self.fret_y(row);
        let start_x = if is_nut {
            self.margins.left() - 0.5
        } else {
            self.margins.left()
        };
        (
            Point::new(start_x, y),
            Point::new(self.size.width() - self.margins.right() - 0.5, y),
        )
    }

    /// Center of the open and muted markers, above the top row.
    pub fn marker_center(&self, string: usize) -> Point {
        Point::new(
            self.string_x(string),
            self.margins.top() - self.fret_unit / 3.0 - self.nut_width,
        )
    }

    /// Center of a dot on `position`, the 1-based row from the top.
    pub fn dot_center(&self, string: usize, position: u32) -> Point {
        Point::new(
            self.string_x(string),
            self.margins.top() + (position as f32 - 0.5) * self.row_height,
        )
    }

    pub fn dot_radius(&self) -> f32 {
        self.fret_unit / 3.0
    }

    pub fn open_radius(&self) -> f32 {
        self.fret_unit / 4.0
    }

    /// Width and height of the muted-string cross.
    pub fn cross_size(&self) -> f32 {
        self.fret_unit / 2.0
    }

    /// Baseline origin of the chord name, centered over the grid.
    pub fn name_origin(&self, text_width: f32) -> Point {
        Point::new(
            self.margins.left() + self.symbol_width() / 2.0 - text_width / 2.0,
            self.font_size,
        )
    }

    /// Baseline origin of the tuning label of `string`, centered on it.
    pub fn tuning_origin(&self, string: usize, text_width: f32) -> Point {
        Point::new(
            self.string_x(string) - text_width / 2.0,
            self.margins.top() - self.font_size / 2.0,
        )
    }

    /// Baseline origin of the fret-number label, right of the last string.
    pub fn fret_label_origin(&self) -> Point {
        Point::new(
            self.string_x(self.string_count - 1) + self.fret_unit / 4.0,
            self.margins.top() + self.fret_unit * 2.0 / 3.0,
        )
    }

    /// Baseline origin of a label centered inside the dot at `center`.
    pub fn dot_label_origin(&self, center: Point, text_width: f32) -> Point {
        Point::new(
            center.x() - text_width / 2.0,
            center.y() + self.dot_label_font_size() / 3.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn params(string_count: usize, fret_count: u32) -> LayoutParams {
        LayoutParams {
            string_count,
            fret_count,
            has_name: false,
            fret_label_width: None,
        }
    }

    #[test]
    fn test_fret_unit_uses_smaller_axis() {
        // Height-bound: 200 / 6 < 300 / 6
        let tall = DiagramLayout::compute(Size::new(300.0, 200.0), params(6, 5));
        assert_approx_eq!(f32, tall.fret_unit(), 200.0 / 6.0, epsilon = 1e-4);

        // Width-bound: 120 / 6 < 200 / 6
        let narrow = DiagramLayout::compute(Size::new(120.0, 200.0), params(6, 5));
        assert_approx_eq!(f32, narrow.fret_unit(), 20.0, epsilon = 1e-4);
    }

    #[test]
    fn test_reference_geometry() {
        let layout = DiagramLayout::compute(Size::new(120.0, 200.0), params(6, 5));

        assert_approx_eq!(f32, layout.margins().top(), 20.0, epsilon = 1e-4);
        assert_approx_eq!(f32, layout.margins().left(), 10.0, epsilon = 1e-4);
        assert_approx_eq!(f32, layout.margins().right(), 10.0, epsilon = 1e-4);
        assert_approx_eq!(f32, layout.symbol_width(), 99.0, epsilon = 1e-4);
        assert_approx_eq!(f32, layout.string_unit(), 19.8, epsilon = 1e-4);
        assert_approx_eq!(f32, layout.row_height(), 179.0 / 5.0, epsilon = 1e-4);
        assert_approx_eq!(f32, layout.nut_width(), 5.0, epsilon = 1e-4);
        assert_approx_eq!(f32, layout.font_size(), 40.0 / 3.0, epsilon = 1e-4);

        let (top, bottom) = layout.string_line(5);
        assert_approx_eq!(f32, top.x(), 109.0, epsilon = 1e-4);
        assert_approx_eq!(f32, bottom.y(), 200.0, epsilon = 1e-4);
    }

    #[test]
    fn test_name_adds_font_size_to_top_margin() {
        let plain = DiagramLayout::compute(Size::new(120.0, 200.0), params(6, 5));
        let named = DiagramLayout::compute(
            Size::new(120.0, 200.0),
            LayoutParams {
                has_name: true,
                ..params(6, 5)
            },
        );

        assert_approx_eq!(
            f32,
            named.margins().top(),
            plain.margins().top() + plain.font_size(),
            epsilon = 1e-4
        );
        assert!(named.row_height() < plain.row_height());
    }

    #[test]
    fn test_fret_label_widens_right_margin() {
        let plain = DiagramLayout::compute(Size::new(120.0, 200.0), params(6, 5));
        let labeled = DiagramLayout::compute(
            Size::new(120.0, 200.0),
            LayoutParams {
                fret_label_width: Some(14.0),
                ..params(6, 5)
            },
        );

        assert_approx_eq!(
            f32,
            labeled.margins().right(),
            plain.margins().right() + 14.0,
            epsilon = 1e-4
        );
        assert!(labeled.string_unit() < plain.string_unit());
    }

    #[test]
    fn test_nut_width_has_minimum() {
        let tiny = DiagramLayout::compute(Size::new(12.0, 12.0), params(6, 5));
        assert!(tiny.fret_unit() / 4.0 < MIN_NUT_WIDTH);
        assert_approx_eq!(f32, tiny.nut_width(), MIN_NUT_WIDTH);
    }

    #[test]
    fn test_nut_line_starts_half_pixel_left() {
        let layout = DiagramLayout::compute(Size::new(120.0, 200.0), params(6, 5));
        let (nut_start, nut_end) = layout.fret_line(0, true);
        let (fret_start, fret_end) = layout.fret_line(0, false);

        assert_approx_eq!(f32, nut_start.x(), fret_start.x() - 0.5);
        assert_eq!(nut_end, fret_end);
        assert_approx_eq!(f32, nut_end.x(), 109.5, epsilon = 1e-4);
    }

    #[test]
    fn test_dot_is_centered_in_its_row() {
        let layout = DiagramLayout::compute(Size::new(120.0, 200.0), params(6, 5));
        let center = layout.dot_center(1, 3);

        let above = layout.fret_y(2);
        let below = layout.fret_y(3);
        assert_approx_eq!(f32, center.y(), (above + below) / 2.0, epsilon = 1e-4);
        assert_approx_eq!(f32, center.x(), layout.string_x(1));
    }

    #[test]
    fn test_marker_center_sits_above_top_row() {
        let layout = DiagramLayout::compute(Size::new(120.0, 200.0), params(6, 5));
        let center = layout.marker_center(0);
        assert!(center.y() + layout.open_radius() < layout.fret_y(0));
    }
}
