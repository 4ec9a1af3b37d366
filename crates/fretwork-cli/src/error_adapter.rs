//! Miette reports for Fretwork errors and shorthand warnings.
//!
//! Shorthand diagnostics carry byte spans, so each one is drawn against the
//! chord as it was typed on the command line. Every other [`FretworkError`]
//! becomes a single report with a `fretwork::*` code.

use std::fmt;

use log::warn;
use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan,
    Severity as MietteSeverity, SourceCode, SourceSpan,
};

use fretwork::FretworkError;
use fretwork_parser::{
    Span,
    error::{Diagnostic, Severity},
};

/// A shorthand diagnostic shown against the chord it was found in.
#[derive(Debug)]
pub struct ShorthandReport<'a> {
    diag: &'a Diagnostic,
    chord: &'a str,
}

impl<'a> ShorthandReport<'a> {
    pub fn new(diag: &'a Diagnostic, chord: &'a str) -> Self {
        Self { diag, chord }
    }
}

impl fmt::Display for ShorthandReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diag.message())
    }
}

impl std::error::Error for ShorthandReport<'_> {}

impl MietteDiagnostic for ShorthandReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|code| Box::new(code) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<MietteSeverity> {
        Some(match self.diag.severity() {
            Severity::Error => MietteSeverity::Error,
            Severity::Warning => MietteSeverity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.chord as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = source_span(label.span());
            let text = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(text, span)
            } else {
                LabeledSpan::new_with_span(text, span)
            }
        })))
    }
}

/// Any [`FretworkError`] other than a shorthand parse error.
#[derive(Debug)]
pub struct FailureReport<'a>(&'a FretworkError);

impl fmt::Display for FailureReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl std::error::Error for FailureReport<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for FailureReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            FretworkError::Io(_) => "fretwork::io",
            FretworkError::Parse { .. } => "fretwork::parse",
            FretworkError::Config(_) => "fretwork::config",
            FretworkError::Style(_) => "fretwork::style",
            FretworkError::Export(_) => "fretwork::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            FretworkError::Config(_) => {
                "check the chord against --frets, --tuning, --width and --height"
            }
            FretworkError::Style(_) => "style values are CSS colors, e.g. `-s dot=#336699`",
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// Split an error into the reports to show, one per shorthand diagnostic.
pub fn reports(err: &FretworkError) -> Vec<Box<dyn MietteDiagnostic + '_>> {
    match err {
        FretworkError::Parse { err: parse_err, src } => parse_err
            .diagnostics()
            .iter()
            .map(|diag| {
                Box::new(ShorthandReport::new(diag, src)) as Box<dyn MietteDiagnostic + '_>
            })
            .collect(),
        _ => vec![Box::new(FailureReport(err)) as Box<dyn MietteDiagnostic + '_>],
    }
}

/// Render one report with miette's graphical handler.
///
/// Falls back to the plain message if rendering fails.
pub fn render(report: &dyn MietteDiagnostic) -> String {
    let mut out = String::new();
    if GraphicalReportHandler::new()
        .render_report(&mut out, report)
        .is_err()
    {
        return report.to_string();
    }
    out
}

/// Log the warnings of a chord that parsed, each drawn against `chord`.
pub fn report_warnings(warnings: &[Diagnostic], chord: &str) {
    for diag in warnings {
        warn!("{}", render(&ShorthandReport::new(diag, chord)));
    }
}

fn source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

#[cfg(test)]
mod tests {
    use fretwork::ConfigError;
    use fretwork_parser::error::{ErrorCode, ParseError};

    use super::*;

    fn parse_error(chord: &str) -> FretworkError {
        let err = fretwork_parser::parse(chord).expect_err("chord should be rejected");
        FretworkError::new_parse_error(err, chord)
    }

    #[test]
    fn test_one_report_per_bad_position() {
        let err = parse_error("q..x/A");

        let reports = reports(&err);
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].code().unwrap().to_string(), "E102");
        assert_eq!(reports[1].code().unwrap().to_string(), "E101");
        assert_eq!(reports[2].code().unwrap().to_string(), "E103");
        assert!(reports[0].help().is_some());
    }

    #[test]
    fn test_report_points_into_the_chord() {
        let err = parse_error("x.3.?.0");

        let reports = reports(&err);
        let source = reports[0].source_code().unwrap();
        let labels: Vec<_> = reports[0].labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
        assert_eq!(labels[0].offset(), 4);

        let contents = source.read_span(labels[0].inner(), 0, 0).unwrap();
        assert_eq!(contents.data(), b"?");
    }

    #[test]
    fn test_warning_severity_is_kept() {
        let (_, warnings) = fretwork_parser::parse_with_warnings("3/Cmaj.0").unwrap();

        let report = ShorthandReport::new(&warnings[0], "3/Cmaj.0");
        assert_eq!(report.severity(), Some(MietteSeverity::Warning));
        assert!(render(&report).contains("may not fit inside the dot"));
    }

    #[test]
    fn test_secondary_label_on_conflicting_marker() {
        let diag = Diagnostic::error("label on open string")
            .with_code(ErrorCode::E103)
            .with_label(Span::new(2..3), "an open string has no dot to label")
            .with_secondary_label(Span::new(0..1), "marked open here");
        let err = FretworkError::new_parse_error(ParseError::from(diag), "0/A.3");

        let reports = reports(&err);
        let labels: Vec<_> = reports[0].labels().unwrap().collect();
        assert!(labels[0].primary());
        assert!(!labels[1].primary());
        assert_eq!(labels[1].label(), Some("marked open here"));
    }

    #[test]
    fn test_other_errors_get_code_and_help() {
        let err = FretworkError::Config(ConfigError::InvalidFretCount);

        let reports = reports(&err);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].code().unwrap().to_string(), "fretwork::config");
        assert!(reports[0].help().unwrap().to_string().contains("--frets"));
        assert!(reports[0].to_string().starts_with("Invalid diagram:"));
        assert!(reports[0].source_code().is_none());
    }
}
