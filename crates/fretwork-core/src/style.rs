//! Style tables for chord diagrams.
//!
//! A [`StyleTable`] is a complete set of visual attributes: one color for each
//! drawn element and the font family for labels. [`StyleOverrides`] is the
//! partial counterpart; [`StyleTable::resolve`] merges the two into a new,
//! complete snapshot.
//!
//! A process-wide default table is available through [`global_styles`],
//! [`set_global_style`] and [`set_global_styles`]. Diagram constructors take
//! an explicit `&StyleTable`, so the shared table is only a convenience.
//!
//! # Recognized keys
//!
//! | Key | Value | Default |
//! |-----|-------|---------|
//! | `string` | color | `#000000` |
//! | `fret` | color | `#000000` |
//! | `nut` | color | `#000000` |
//! | `dot` | color | `#000000` |
//! | `open` | color | `#000000` |
//! | `cross` | color | `#000000` |
//! | `font` | font family | `Times` |
//!
//! Unknown keys are ignored. Empty values count as "not provided".
//!
//! # Example
//!
//! ```
//! # use fretwork_core::style::{StyleKey, StyleOverrides, StyleTable};
//! # use fretwork_core::color::Color;
//! let defaults = StyleTable::default();
//! let mut overrides = StyleOverrides::new();
//! overrides.set_named("dot", "#ff0000").unwrap();
//! overrides.set_named("glow", "yellow").unwrap(); // ignored
//!
//! let styles = defaults.resolve(&overrides);
//! assert_eq!(styles.dot(), Color::new("#ff0000").unwrap());
//! assert_eq!(styles.fret(), defaults.fret());
//! ```

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    str::FromStr,
    sync::{OnceLock, PoisonError, RwLock},
};

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::color::Color;

const DEFAULT_FONT_FAMILY: &str = "Times";

/// Errors produced while setting style values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    #[error("invalid value for style `{key}`: {reason}")]
    InvalidColor { key: StyleKey, reason: String },
}

/// The fixed set of style keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleKey {
    String,
    Fret,
    Nut,
    Dot,
    Open,
    Cross,
    Font,
}

impl StyleKey {
    /// All keys in declaration order.
    pub const ALL: [StyleKey; 7] = [
        Self::String,
        Self::Fret,
        Self::Nut,
        Self::Dot,
        Self::Open,
        Self::Cross,
        Self::Font,
    ];

    /// Returns the lowercase key name.
    pub fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Fret => "fret",
            Self::Nut => "nut",
            Self::Dot => "dot",
            Self::Open => "open",
            Self::Cross => "cross",
            Self::Font => "font",
        }
    }

    /// Returns `true` for every key except [`StyleKey::Font`].
    pub fn is_color(self) -> bool {
        !matches!(self, Self::Font)
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| format!("unknown style key `{s}`"))
    }
}

/// A parsed style value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Color(Color),
    Font(String),
}

impl StyleValue {
    /// Parses `value` for `key`. Returns `Ok(None)` for an empty value.
    fn parse(key: StyleKey, value: &str) -> Result<Option<Self>, StyleError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }

        if key.is_color() {
            Color::new(value)
                .map(|color| Some(Self::Color(color)))
                .map_err(|reason| StyleError::InvalidColor { key, reason })
        } else {
            Ok(Some(Self::Font(value.to_string())))
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => write!(f, "{color}"),
            Self::Font(family) => f.write_str(family),
        }
    }
}

/// A complete set of diagram styles.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    string: Color,
    fret: Color,
    nut: Color,
    dot: Color,
    open: Color,
    cross: Color,
    font: String,
}

impl Default for StyleTable {
    fn default() -> Self {
        let black = Color::default();
        Self {
            string: black,
            fret: black,
            nut: black,
            dot: black,
            open: black,
            cross: black,
            font: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

impl StyleTable {
    /// Color of the vertical string lines.
    pub fn string(&self) -> Color {
        self.string
    }

    /// Color of the horizontal fret lines.
    pub fn fret(&self) -> Color {
        self.fret
    }

    /// Color of the nut bar in open position.
    pub fn nut(&self) -> Color {
        self.nut
    }

    /// Fill color of fretted dots.
    pub fn dot(&self) -> Color {
        self.dot
    }

    /// Outline color of open-string circles.
    pub fn open(&self) -> Color {
        self.open
    }

    /// Color of muted-string crosses.
    pub fn cross(&self) -> Color {
        self.cross
    }

    /// Font family for all labels.
    pub fn font(&self) -> &str {
        &self.font
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: StyleKey) -> StyleValue {
        match key {
            StyleKey::String => StyleValue::Color(self.string),
            StyleKey::Fret => StyleValue::Color(self.fret),
            StyleKey::Nut => StyleValue::Color(self.nut),
            StyleKey::Dot => StyleValue::Color(self.dot),
            StyleKey::Open => StyleValue::Color(self.open),
            StyleKey::Cross => StyleValue::Color(self.cross),
            StyleKey::Font => StyleValue::Font(self.font.clone()),
        }
    }

    /// Sets `key` from its string form. Empty values leave the table unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidColor`] when `key` holds a color and
    /// `value` is not a CSS color.
    pub fn set(&mut self, key: StyleKey, value: &str) -> Result<(), StyleError> {
        if let Some(value) = StyleValue::parse(key, value)? {
            self.assign(key, value);
        }
        Ok(())
    }

    /// Sets a style by key name. Unknown names are ignored.
    pub fn set_named(&mut self, name: &str, value: &str) -> Result<(), StyleError> {
        match name.parse::<StyleKey>() {
            Ok(key) => self.set(key, value),
            Err(_) => {
                debug!(key = name; "Ignoring unknown style key");
                Ok(())
            }
        }
    }

    /// Sets several styles by key name.
    ///
    /// Either every entry is applied or, when one value is invalid, none is.
    pub fn set_many<'a, I>(&mut self, entries: I) -> Result<(), StyleError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut updated = self.clone();
        for (name, value) in entries {
            updated.set_named(name, value)?;
        }
        *self = updated;
        Ok(())
    }

    /// Returns a complete snapshot of this table with `overrides` applied.
    pub fn resolve(&self, overrides: &StyleOverrides) -> StyleTable {
        let mut resolved = self.clone();
        for (key, value) in overrides.iter() {
            resolved.assign(key, value.clone());
        }
        resolved
    }

    fn assign(&mut self, key: StyleKey, value: StyleValue) {
        match (key, value) {
            (StyleKey::String, StyleValue::Color(color)) => self.string = color,
            (StyleKey::Fret, StyleValue::Color(color)) => self.fret = color,
            (StyleKey::Nut, StyleValue::Color(color)) => self.nut = color,
            (StyleKey::Dot, StyleValue::Color(color)) => self.dot = color,
            (StyleKey::Open, StyleValue::Color(color)) => self.open = color,
            (StyleKey::Cross, StyleValue::Color(color)) => self.cross = color,
            (StyleKey::Font, StyleValue::Font(family)) => self.font = family,
            (key, value) => debug!(key:% = key, value:% = value; "Ignoring mismatched style value"),
        }
    }
}

/// A partial set of styles to apply on top of a [`StyleTable`].
///
/// Deserializes from a string map, e.g. a TOML table:
///
/// ```toml
/// dot = "#cc0000"
/// font = "Helvetica"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "HashMap<String, String>")]
pub struct StyleOverrides {
    values: BTreeMap<StyleKey, StyleValue>,
}

impl StyleOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides `key`. An empty value removes nothing and adds nothing.
    pub fn set(&mut self, key: StyleKey, value: &str) -> Result<(), StyleError> {
        if let Some(value) = StyleValue::parse(key, value)? {
            self.values.insert(key, value);
        }
        Ok(())
    }

    /// Overrides a style by key name. Unknown names are ignored.
    pub fn set_named(&mut self, name: &str, value: &str) -> Result<(), StyleError> {
        match name.parse::<StyleKey>() {
            Ok(key) => self.set(key, value),
            Err(_) => {
                debug!(key = name; "Ignoring unknown style override");
                Ok(())
            }
        }
    }

    /// Builder form of [`StyleOverrides::set`].
    pub fn with(mut self, key: StyleKey, value: &str) -> Result<Self, StyleError> {
        self.set(key, value)?;
        Ok(self)
    }

    pub fn get(&self, key: StyleKey) -> Option<&StyleValue> {
        self.values.get(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates the overridden keys in key order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, &StyleValue)> {
        self.values.iter().map(|(key, value)| (*key, value))
    }

    /// Adds every override of `other`, replacing existing entries.
    pub fn merge(&mut self, other: &StyleOverrides) {
        for (key, value) in other.iter() {
            self.values.insert(key, value.clone());
        }
    }
}

impl TryFrom<HashMap<String, String>> for StyleOverrides {
    type Error = StyleError;

    fn try_from(map: HashMap<String, String>) -> Result<Self, Self::Error> {
        let mut overrides = Self::new();
        for (name, value) in &map {
            overrides.set_named(name, value)?;
        }
        Ok(overrides)
    }
}

static GLOBAL_STYLES: OnceLock<RwLock<StyleTable>> = OnceLock::new();

fn global_table() -> &'static RwLock<StyleTable> {
    GLOBAL_STYLES.get_or_init(|| RwLock::new(StyleTable::default()))
}

/// Returns a snapshot of the process-wide default styles.
pub fn global_styles() -> StyleTable {
    global_table()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Sets one process-wide default style by key name.
///
/// Already constructed diagrams keep the styles they were built with.
pub fn set_global_style(name: &str, value: &str) -> Result<(), StyleError> {
    set_global_styles([(name, value)])
}

/// Sets several process-wide default styles by key name.
pub fn set_global_styles<'a, I>(entries: I) -> Result<(), StyleError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut table = global_table()
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    table.set_many(entries)?;
    info!("Updated global style defaults");
    Ok(())
}
