//! Export of recorded drawings.
//!
//! Rendering a [`ChordDiagram`](crate::diagram::ChordDiagram) onto a
//! [`DisplayList`](fretwork_core::draw::DisplayList) yields a sequence of
//! [`DrawCommand`]s. An [`Exporter`] turns that sequence into an output
//! format.
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]

/// SVG export backend.
pub mod svg;

use std::fmt;

use fretwork_core::draw::DrawCommand;

/// Abstraction for export backends.
pub trait Exporter {
    /// Exports recorded draw commands, in drawing order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the commands cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_commands(&self, commands: &[DrawCommand]) -> Result<String, Error>;
}

/// Errors that can occur during export.
///
/// Converted into [`FretworkError::Export`](crate::FretworkError::Export) at
/// the crate boundary.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
