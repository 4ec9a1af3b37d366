//! Error types for Fretwork operations.
//!
//! [`ConfigError`] covers diagrams that cannot be drawn as configured.
//! [`FretworkError`] is the crate-level error wrapping every failure a
//! [`ChordBuilder`](crate::ChordBuilder) can report.

use std::io;

use thiserror::Error;

use fretwork_core::style::StyleError;
use fretwork_parser::ParseError;

/// A diagram configuration that cannot be rendered.
///
/// Returned before anything is drawn.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("expected {expected} markers, one per string, found {found}")]
    MarkerCountMismatch { expected: usize, found: usize },

    #[error("a diagram needs at least one fret row")]
    InvalidFretCount,

    #[error("a diagram needs at least 2 strings, found {0}")]
    InvalidStringCount(usize),

    #[error("expected {expected} tuning labels, one per string, found {found}")]
    TuningMismatch { expected: usize, found: usize },

    #[error("string {string} is fretted on row {position}, but only {fret_count} rows are shown")]
    FretOutOfRange {
        string: usize,
        position: u32,
        fret_count: u32,
    },

    #[error("surface size {width}x{height} is not drawable")]
    InvalidSurfaceSize { width: f32, height: f32 },
}

/// The main error type for Fretwork operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the shorthand next to the parser diagnostics so
/// that their byte spans can be rendered against it.
#[derive(Debug, Error)]
pub enum FretworkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Invalid diagram: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid style: {0}")]
    Style(#[from] StyleError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for FretworkError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl FretworkError {
    /// Create a new `Parse` error with the associated shorthand.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
