//! # Fretwork Parser
//!
//! Parser for the compact chord shorthand. A shorthand lists one marker per
//! string, separated by `.`; a fretted position may carry a label after `/`:
//!
//! | Shorthand | Meaning |
//! |-----------|---------|
//! | `x` / `X` | muted string |
//! | `o` / `O` / `0` | open string |
//! | `3` | finger on the third row |
//! | `3/C` | finger on the third row, labeled `C` |
//! | `-` | no marker |
//!
//! ## Usage
//!
//! ```
//! # use fretwork_parser::{parse, ParseError};
//! # use fretwork_core::chord::Marker;
//!
//! fn main() -> Result<(), ParseError> {
//!     let fingering = parse("x.3/C.2.0.1.0")?;
//!     assert_eq!(fingering.len(), 6);
//!     assert_eq!(fingering.markers()[0], Some(Marker::Muted));
//!     Ok(())
//! }
//! ```

pub mod error;
mod shorthand;
mod span;

pub use error::ParseError;
pub use span::Span;

use fretwork_core::chord::Fingering;
use log::{debug, info, warn};

use error::Diagnostic;

/// Parse a chord shorthand into a fingering.
///
/// Every malformed string position is reported; the returned [`ParseError`]
/// carries one diagnostic per problem, each with a byte span into `source`.
/// Warnings on an otherwise valid shorthand are logged.
pub fn parse(source: &str) -> Result<Fingering, ParseError> {
    let (fingering, warnings) = parse_with_warnings(source)?;
    for warning in &warnings {
        warn!(warning:%; "Chord shorthand warning");
    }
    Ok(fingering)
}

/// Parse a chord shorthand, handing warnings back to the caller.
///
/// Use this when the warnings are rendered against `source`, as the command
/// line does.
pub fn parse_with_warnings(source: &str) -> Result<(Fingering, Vec<Diagnostic>), ParseError> {
    debug!(source; "Parsing chord shorthand");

    let (fingering, warnings) = shorthand::parse(source)?;

    info!(strings = fingering.len(), warnings = warnings.len(); "Parsed chord shorthand");
    Ok((fingering, warnings))
}
