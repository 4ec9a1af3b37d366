//! Chord diagrams and their options.
//!
//! A [`ChordDiagram`] is built once from a [`Fingering`], a set of
//! [`DiagramOptions`] and a base [`StyleTable`]. Construction validates the
//! options against the fingering and captures a complete style snapshot;
//! later changes to the base table do not affect the diagram. Rendering is
//! idempotent.
//!
//! # Example
//!
//! ```
//! # use fretwork::diagram::{ChordDiagram, DiagramOptions};
//! # use fretwork::style::StyleTable;
//! # use fretwork::draw::DisplayList;
//! let options = DiagramOptions::new().with_name("C");
//! let diagram = ChordDiagram::from_shorthand("x.3.2.0.1.0", options, &StyleTable::default())
//!     .expect("valid chord");
//!
//! let mut surface = DisplayList::new();
//! diagram.render(&mut surface, 120.0, 150.0).expect("drawable size");
//! assert!(!surface.commands().is_empty());
//! ```

use log::{debug, info};

use fretwork_core::{
    chord::{Fingering, Marker},
    draw::{FontDefinition, Surface},
    geometry::Size,
    style::{StyleError, StyleKey, StyleOverrides, StyleTable},
};

use crate::{
    error::{ConfigError, FretworkError},
    layout::{DiagramLayout, LayoutParams},
    render,
};

const DEFAULT_FRET_COUNT: u32 = 5;
const DEFAULT_STRING_COUNT: usize = 6;

/// Display options of a chord diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramOptions {
    fret_offset: u32,
    fret_count: u32,
    string_count: usize,
    name: Option<String>,
    tuning: Option<Vec<String>>,
    show_fret_number: bool,
    styles: StyleOverrides,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            fret_offset: 0,
            fret_count: DEFAULT_FRET_COUNT,
            string_count: DEFAULT_STRING_COUNT,
            name: None,
            tuning: None,
            show_fret_number: false,
            styles: StyleOverrides::default(),
        }
    }
}

impl DiagramOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fret at which the top row begins. `0` is the open position
    /// and draws the nut.
    pub fn with_fret_offset(mut self, fret_offset: u32) -> Self {
        self.fret_offset = fret_offset;
        self
    }

    /// Sets the number of fret rows shown.
    pub fn with_fret_count(mut self, fret_count: u32) -> Self {
        self.fret_count = fret_count;
        self
    }

    pub fn with_string_count(mut self, string_count: usize) -> Self {
        self.string_count = string_count;
        self
    }

    /// Sets the chord name drawn above the grid.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets one tuning label per string, drawn above the strings.
    pub fn with_tuning<I, S>(mut self, tuning: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tuning = Some(tuning.into_iter().map(Into::into).collect());
        self
    }

    /// Draws the `<N>fr` label when the fret offset is not zero.
    pub fn with_show_fret_number(mut self, show: bool) -> Self {
        self.show_fret_number = show;
        self
    }

    /// Sets per-diagram style overrides.
    pub fn with_styles(mut self, styles: StyleOverrides) -> Self {
        self.styles = styles;
        self
    }

    /// Adds one per-diagram style override by key name.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError`] for an invalid color value.
    pub fn with_style(mut self, name: &str, value: &str) -> Result<Self, StyleError> {
        self.styles.set_named(name, value)?;
        Ok(self)
    }

    pub fn fret_offset(&self) -> u32 {
        self.fret_offset
    }

    pub fn fret_count(&self) -> u32 {
        self.fret_count
    }

    pub fn string_count(&self) -> usize {
        self.string_count
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn tuning(&self) -> Option<&[String]> {
        self.tuning.as_deref()
    }

    pub fn show_fret_number(&self) -> bool {
        self.show_fret_number
    }

    pub fn styles(&self) -> &StyleOverrides {
        &self.styles
    }
}

/// A validated chord diagram with its resolved styles.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordDiagram {
    fingering: Fingering,
    options: DiagramOptions,
    styles: StyleTable,
}

impl ChordDiagram {
    /// Creates a diagram, resolving `options.styles()` on top of `base`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the fingering does not have one marker
    /// per string, the fret or string count is too small, the tuning does not
    /// have one label per string, or a dot lies below the last row.
    pub fn new(
        fingering: Fingering,
        options: DiagramOptions,
        base: &StyleTable,
    ) -> Result<Self, ConfigError> {
        validate(&fingering, &options)?;

        let styles = base.resolve(options.styles());
        info!(
            strings = options.string_count(),
            frets = options.fret_count(),
            fret_offset = options.fret_offset();
            "Created chord diagram"
        );

        Ok(Self {
            fingering,
            options,
            styles,
        })
    }

    /// Creates a diagram from shorthand such as `"x.3/C.2.0.1.0"`.
    ///
    /// The string count is taken from the shorthand.
    ///
    /// # Errors
    ///
    /// Returns [`FretworkError::Parse`] for malformed shorthand and
    /// [`FretworkError::Config`] for invalid options.
    pub fn from_shorthand(
        shorthand: &str,
        options: DiagramOptions,
        base: &StyleTable,
    ) -> Result<Self, FretworkError> {
        let fingering = fretwork_parser::parse(shorthand)
            .map_err(|err| FretworkError::new_parse_error(err, shorthand))?;
        let options = options.with_string_count(fingering.len());
        Ok(Self::new(fingering, options, base)?)
    }

    pub fn fingering(&self) -> &Fingering {
        &self.fingering
    }

    pub fn options(&self) -> &DiagramOptions {
        &self.options
    }

    /// The resolved style snapshot used for drawing.
    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// Sets one style of this diagram by key.
    pub fn set_style(&mut self, key: StyleKey, value: &str) -> Result<(), StyleError> {
        self.styles.set(key, value)
    }

    /// Sets styles of this diagram by key name. Unknown names are ignored.
    pub fn set_styles<'a, I>(&mut self, entries: I) -> Result<(), StyleError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.styles.set_many(entries)
    }

    /// Applies parsed overrides to this diagram's styles.
    pub fn apply_styles(&mut self, overrides: &StyleOverrides) {
        self.styles = self.styles.resolve(overrides);
    }

    /// Computes the layout of this diagram on `surface`.
    ///
    /// The surface is needed to measure the fret-number label; its drawing
    /// state is left unchanged.
    pub fn layout<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        width: f32,
        height: f32,
    ) -> Result<DiagramLayout, ConfigError> {
        let size = Size::new(width, height);
        if !size.is_drawable() {
            return Err(ConfigError::InvalidSurfaceSize { width, height });
        }

        let fret_label_width = self.fret_label().map(|text| {
            surface.save();
            surface.set_font(self.label_font(size));
            let width = surface.measure_text(&text);
            surface.restore();
            width
        });

        let layout = DiagramLayout::compute(
            size,
            LayoutParams {
                string_count: self.options.string_count(),
                fret_count: self.options.fret_count(),
                has_name: self.options.name().is_some(),
                fret_label_width,
            },
        );
        debug!(
            fret_unit = layout.fret_unit(),
            nut_width = layout.nut_width();
            "Computed diagram layout"
        );
        Ok(layout)
    }

    /// Draws the diagram onto `surface`, sized `width` by `height` pixels.
    ///
    /// Every stateful drawing primitive is bracketed by `save`/`restore`, so
    /// the surface state is the same before and after the call.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSurfaceSize`] without drawing anything
    /// when the size is not finite and positive.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        width: f32,
        height: f32,
    ) -> Result<(), ConfigError> {
        let layout = self.layout(surface, width, height)?;
        render::draw(self, &layout, surface);
        Ok(())
    }

    /// The `<N>fr` label, when it is drawn.
    pub(crate) fn fret_label(&self) -> Option<String> {
        let offset = self.options.fret_offset();
        (self.options.show_fret_number() && offset != 0).then(|| format!("{offset}fr"))
    }

    /// Regular label font at the size derived from `size`.
    fn label_font(&self, size: Size) -> FontDefinition {
        let layout = DiagramLayout::compute(
            size,
            LayoutParams {
                string_count: self.options.string_count(),
                fret_count: self.options.fret_count(),
                has_name: false,
                fret_label_width: None,
            },
        );
        FontDefinition::new(self.styles.font(), layout.font_size())
    }
}

fn validate(fingering: &Fingering, options: &DiagramOptions) -> Result<(), ConfigError> {
    if options.fret_count() == 0 {
        return Err(ConfigError::InvalidFretCount);
    }

    if options.string_count() < 2 {
        return Err(ConfigError::InvalidStringCount(options.string_count()));
    }

    if fingering.len() != options.string_count() {
        return Err(ConfigError::MarkerCountMismatch {
            expected: options.string_count(),
            found: fingering.len(),
        });
    }

    if let Some(found) = options.tuning().map(<[String]>::len) {
        if found != options.string_count() {
            return Err(ConfigError::TuningMismatch {
                expected: options.string_count(),
                found,
            });
        }
    }

    let out_of_range = fingering
        .iter()
        .enumerate()
        .find_map(|(string, marker)| {
            marker
                .and_then(Marker::position)
                .filter(|position| *position > options.fret_count())
                .map(|position| (string, position))
        });
    if let Some((string, position)) = out_of_range {
        return Err(ConfigError::FretOutOfRange {
            string,
            position,
            fret_count: options.fret_count(),
        });
    }

    Ok(())
}
