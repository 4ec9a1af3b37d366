//! Fretwork - chord diagrams for fretted string instruments.
//!
//! Parses chord shorthand such as `"x.3/C.2.0.1.0"`, lays the chord out on a
//! string/fret grid and draws it onto any [`draw::Surface`]. The bundled
//! [`draw::DisplayList`] surface records the drawing so it can be exported to
//! SVG.

pub mod config;
pub mod diagram;
pub mod export;
pub mod layout;

mod error;
mod render;

pub use fretwork_core::{chord, color, draw, geometry, style};

pub use diagram::{ChordDiagram, DiagramOptions};
pub use error::{ConfigError, FretworkError};

use std::{fs, path::Path};

use log::{debug, info, trace};

use fretwork_core::{
    chord::Fingering,
    draw::{DisplayList, FontMetrics},
    style::{StyleTable, global_styles},
};
use fretwork_parser::error::Diagnostic;

use config::AppConfig;
use export::Exporter;

/// Builder for parsing and rendering chord diagrams.
///
/// The builder captures the process-wide default styles with the overrides
/// of its configuration applied when it is created.
///
/// # Examples
///
/// ```rust,no_run
/// use fretwork::{ChordBuilder, config::AppConfig};
///
/// let builder = ChordBuilder::new(AppConfig::default());
///
/// let options = builder.default_options().with_name("D");
/// let diagram = builder.build("x.x.0.2.3.2", options)
///     .expect("Failed to build chord");
///
/// let svg = builder.render_svg(&diagram)
///     .expect("Failed to render");
/// ```
pub struct ChordBuilder {
    config: AppConfig,
    styles: StyleTable,
}

impl Default for ChordBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl ChordBuilder {
    /// Create a new chord builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let styles = global_styles().resolve(config.style());
        Self { config, styles }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The base styles diagrams of this builder are resolved against.
    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// Parse chord shorthand into a fingering.
    ///
    /// # Errors
    ///
    /// Returns [`FretworkError::Parse`] with every diagnostic found.
    pub fn parse(&self, shorthand: &str) -> Result<Fingering, FretworkError> {
        info!("Parsing chord shorthand");

        let fingering = fretwork_parser::parse(shorthand)
            .map_err(|err| FretworkError::new_parse_error(err, shorthand))?;

        trace!(fingering:% = fingering; "Parsed fingering");
        Ok(fingering)
    }

    /// Diagram options carrying the configured fret count and fret-number
    /// display.
    pub fn default_options(&self) -> DiagramOptions {
        DiagramOptions::new()
            .with_fret_count(self.config.diagram().frets())
            .with_show_fret_number(self.config.diagram().show_fret_number())
    }

    /// Parse `shorthand` and build a diagram with `options`.
    ///
    /// # Errors
    ///
    /// Returns [`FretworkError::Parse`] for malformed shorthand and
    /// [`FretworkError::Config`] for options that do not fit the chord.
    pub fn build(
        &self,
        shorthand: &str,
        options: DiagramOptions,
    ) -> Result<ChordDiagram, FretworkError> {
        ChordDiagram::from_shorthand(shorthand, options, &self.styles)
    }

    /// Like [`build`](Self::build), but also returns the shorthand warnings
    /// instead of only logging them.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn build_with_warnings(
        &self,
        shorthand: &str,
        options: DiagramOptions,
    ) -> Result<(ChordDiagram, Vec<Diagnostic>), FretworkError> {
        let (fingering, warnings) = fretwork_parser::parse_with_warnings(shorthand)
            .map_err(|err| FretworkError::new_parse_error(err, shorthand))?;

        let options = options.with_string_count(fingering.len());
        let diagram = ChordDiagram::new(fingering, options, &self.styles)?;
        Ok((diagram, warnings))
    }

    /// Render a diagram to an SVG string at the configured size.
    ///
    /// # Errors
    ///
    /// Returns [`FretworkError::Config`] for an undrawable size and
    /// [`FretworkError::Export`] when the configured background is invalid
    /// or the document cannot be written.
    pub fn render_svg(&self, diagram: &ChordDiagram) -> Result<String, FretworkError> {
        let diagram_config = self.config.diagram();
        let size = diagram_config.size();
        info!(width = size.width(), height = size.height(); "Rendering chord diagram");

        let mut surface = DisplayList::with_metrics(FontMetrics);
        diagram.render(&mut surface, size.width(), size.height())?;
        debug!(commands = surface.commands().len(); "Diagram drawn");

        let background = diagram_config
            .background_color()
            .map_err(export::Error::Render)?;
        let exporter = export::svg::SvgBuilder::new(size)
            .with_background(background)
            .build()?;

        let svg = exporter.export_commands(surface.commands())?;
        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Render a diagram to SVG and write it to `path`.
    pub fn write_svg(
        &self,
        diagram: &ChordDiagram,
        path: impl AsRef<Path>,
    ) -> Result<(), FretworkError> {
        let svg = self.render_svg(diagram)?;
        let path = path.as_ref();
        fs::write(path, svg)?;
        info!(path:? = path; "SVG written");
        Ok(())
    }
}
