//! Fonts and text measurement.
//!
//! - [`FontDefinition`] - The font state of a surface (family, pixel size, weight)
//! - [`TextMeasure`] - Measures a text run in a given font
//! - [`ApproximateMetrics`] - Deterministic measurement from character counts
//! - [`FontMetrics`] - Measurement from real font data via `cosmic-text`

use std::sync::{Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use log::info;

use crate::geometry::Size;

/// Average glyph advance relative to the font size, used when no font data
/// is available.
const AVERAGE_ADVANCE: f32 = 0.55;

/// Line height relative to the font size.
const LINE_HEIGHT: f32 = 1.15;

/// The font used for text drawing operations.
///
/// # Examples
///
/// ```
/// # use fretwork_core::draw::FontDefinition;
/// let font = FontDefinition::new("Times", 12.0).bold();
/// assert_eq!(font.to_css(), "bold 12px Times");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FontDefinition {
    family: String,
    size: f32,
    bold: bool,
}

impl FontDefinition {
    /// Creates a regular-weight font of `size` pixels.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
        }
    }

    /// Returns the same font in bold weight.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Returns the same font at a different pixel size.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Font size in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns the CSS `font` shorthand, e.g. `"bold 12px Times"`.
    pub fn to_css(&self) -> String {
        if self.bold {
            format!("bold {}px {}", self.size, self.family)
        } else {
            format!("{}px {}", self.size, self.family)
        }
    }
}

impl Default for FontDefinition {
    /// The initial font of a canvas context.
    fn default() -> Self {
        Self::new("sans-serif", 10.0)
    }
}

/// Measures the extent of a single-line text run.
pub trait TextMeasure {
    /// Returns the width and line height of `text` rendered in `font`.
    fn measure(&self, text: &str, font: &FontDefinition) -> Size;
}

/// Text measurement from the character count and the font size.
///
/// Results do not depend on the fonts installed on the machine, which makes
/// recorded output reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateMetrics;

impl TextMeasure for ApproximateMetrics {
    fn measure(&self, text: &str, font: &FontDefinition) -> Size {
        approximate_size(text, font)
    }
}

fn approximate_size(text: &str, font: &FontDefinition) -> Size {
    if text.is_empty() {
        return Size::default();
    }

    let weight = if font.is_bold() { 1.1 } else { 1.0 };
    let width = text.chars().count() as f32 * font.size() * AVERAGE_ADVANCE * weight;
    Size::new(width, font.size() * LINE_HEIGHT)
}

/// Text measurement using shaped glyph runs from the system fonts.
///
/// Falls back to [`ApproximateMetrics`] when shaping yields no glyphs, for
/// example on machines without any installed fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct FontMetrics;

impl TextMeasure for FontMetrics {
    fn measure(&self, text: &str, font: &FontDefinition) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(text, font)
    }
}

/// Holds a reusable `FontSystem`; loading system fonts is expensive.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    fn calculate_text_size(&self, text: &str, font: &FontDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let metrics = Metrics::new(font.size(), font.size() * LINE_HEIGHT);
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let weight = if font.is_bold() {
            Weight::BOLD
        } else {
            Weight::NORMAL
        };
        let attrs = Attrs::new().family(Family::Name(font.family())).weight(weight);

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let width = buffer
            .layout_runs()
            .filter_map(|run| run.glyphs.last().map(|glyph| glyph.x + glyph.w))
            .fold(0.0_f32, f32::max);

        if width > 0.0 {
            Size::new(width, metrics.line_height)
        } else {
            approximate_size(text, font)
        }
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
