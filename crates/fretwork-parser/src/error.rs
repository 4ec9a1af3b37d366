//! Error and diagnostic system for the shorthand parser.
//!
//! A [`Diagnostic`] is a single error or warning with an optional
//! [`ErrorCode`], labeled byte spans into the shorthand and help text.
//! All diagnostics from one parse are returned together in a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use fretwork_parser::error::{Diagnostic, ErrorCode};
//! # use fretwork_parser::Span;
//!
//! let diag = Diagnostic::error("unrecognized marker `q`")
//!     .with_code(ErrorCode::E102)
//!     .with_label(Span::new(2..3), "not a marker")
//!     .with_help("use `x`, `o` or a fret number");
//!
//! assert_eq!(diag.to_string(), "error[E102]: unrecognized marker `q`");
//! ```

mod diagnostic;
mod error_code;
mod parse_error;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use parse_error::ParseError;
