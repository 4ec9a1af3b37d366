//! Configuration types for chord diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as a TOML file:
//!
//! ```toml
//! [style]
//! dot = "#cc0000"
//! font = "Helvetica"
//!
//! [diagram]
//! width = 120
//! height = 150
//! frets = 4
//! show_fret_number = true
//! background = "white"
//! ```
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining style and diagram settings.
//! - [`DiagramConfig`] - Output size and defaults for new diagrams.
//! - [`StyleOverrides`] - Style values applied on top of the global defaults.
//!
//! # Example
//!
//! ```
//! # use fretwork::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.diagram().frets(), 5);
//! assert!(config.diagram().background_color().unwrap().is_none());
//! ```

use serde::Deserialize;

use fretwork_core::{color::Color, geometry::Size};

pub use fretwork_core::style::StyleOverrides;

const DEFAULT_WIDTH: f32 = 160.0;
const DEFAULT_HEIGHT: f32 = 200.0;
const DEFAULT_FRETS: u32 = 5;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style overrides section.
    #[serde(default)]
    style: StyleOverrides,

    /// Diagram section.
    #[serde(default)]
    diagram: DiagramConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(style: StyleOverrides, diagram: DiagramConfig) -> Self {
        Self { style, diagram }
    }

    /// Returns the style overrides.
    pub fn style(&self) -> &StyleOverrides {
        &self.style
    }

    /// Returns the diagram configuration.
    pub fn diagram(&self) -> &DiagramConfig {
        &self.diagram
    }

    /// Returns a mutable reference to the diagram configuration, for
    /// command-line overrides.
    pub fn diagram_mut(&mut self) -> &mut DiagramConfig {
        &mut self.diagram
    }

    /// Returns a mutable reference to the style overrides.
    pub fn style_mut(&mut self) -> &mut StyleOverrides {
        &mut self.style
    }
}

/// Output size and diagram defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Output width in pixels.
    width: f32,

    /// Output height in pixels.
    height: f32,

    /// Default number of fret rows.
    frets: u32,

    /// Whether the `<N>fr` label is shown by default.
    show_fret_number: bool,

    /// Background color of exported documents, as a color string.
    background: Option<String>,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frets: DEFAULT_FRETS,
            show_fret_number: false,
            background: None,
        }
    }
}

impl DiagramConfig {
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the output size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn frets(&self) -> u32 {
        self.frets
    }

    pub fn show_fret_number(&self) -> bool {
        self.show_fret_number
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    pub fn set_frets(&mut self, frets: u32) {
        self.frets = frets;
    }

    pub fn set_show_fret_number(&mut self, show: bool) {
        self.show_fret_number = show;
    }

    pub fn set_background(&mut self, background: Option<String>) {
        self.background = background;
    }
}

#[cfg(test)]
mod tests {
    use fretwork_core::style::{StyleKey, StyleValue};

    use super::*;

    #[test]
    fn test_defaults() {
        let config = DiagramConfig::default();
        assert_eq!(config.size(), Size::new(160.0, 200.0));
        assert_eq!(config.frets(), 5);
        assert!(!config.show_fret_number());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: AppConfig = toml::from_str(
            r##"
            [style]
            dot = "#cc0000"
            sparkle = "gold"

            [diagram]
            frets = 4
            background = "white"
            "##,
        )
        .unwrap();

        assert_eq!(config.diagram().frets(), 4);
        assert_eq!(config.diagram().width(), DEFAULT_WIDTH);
        assert_eq!(config.diagram().background_color(), Ok(Some(Color::white())));
        assert_eq!(
            config.style().get(StyleKey::Dot),
            Some(&StyleValue::Color(Color::new("#cc0000").unwrap()))
        );
    }

    #[test]
    fn test_invalid_style_color_fails_deserialization() {
        let result: Result<AppConfig, _> = toml::from_str("[style]\nnut = \"not-a-color\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_background() {
        let mut config = DiagramConfig::default();
        config.set_background(Some("nope".to_string()));
        assert!(config.background_color().is_err());
    }
}
