//! Grammar of the chord shorthand.
//!
//! ```text
//! shorthand := position ("." position)*
//! position  := token ("/" label)?
//! token     := "x" | "X" | "o" | "O" | "-" | digit+
//! ```
//!
//! A fret number of `0` is an open string. `-` leaves the string without a
//! marker. Only fretted positions may carry a label.
//!
//! Parsing runs in two steps: the structural split into positions never fails
//! and records byte spans, then every position is interpreted on its own so
//! that all malformed positions are reported together.

use std::ops::Range;

use fretwork_core::chord::{Fingering, Marker};
use log::trace;
use winnow::{
    Parser as _,
    ascii::digit1,
    combinator::{alt, opt, preceded, separated},
    error::ModalResult,
    stream::{LocatingSlice, Location},
    token::{one_of, take_till},
};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    span::Span,
};

/// Labels longer than this are unlikely to fit inside a dot.
const MAX_FITTING_LABEL_CHARS: usize = 2;

type Input<'a> = LocatingSlice<&'a str>;

/// The raw pieces of one `.`-delimited string position.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawPosition<'a> {
    token: &'a str,
    token_span: Span,
    label: Option<(&'a str, Span)>,
    /// Anything left between the label and the next `.`.
    trailing: Option<Span>,
}

/// The recognized marker tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Muted,
    Open,
    Blank,
    Fret(&'a str),
}

fn position<'a>(input: &mut Input<'a>) -> ModalResult<RawPosition<'a>> {
    let (token, token_span) = take_till(0.., ['.', '/'])
        .with_span()
        .parse_next(input)?;
    let label = opt(preceded('/', take_till(0.., ['.', '/']).with_span())).parse_next(input)?;
    let (trailing, trailing_span) = take_till(0.., '.').with_span().parse_next(input)?;

    Ok(RawPosition {
        token,
        token_span: token_span.into(),
        label: label.map(|(text, span): (&str, Range<usize>)| (text, span.into())),
        trailing: (!trailing.is_empty()).then(|| trailing_span.into()),
    })
}

fn positions<'a>(input: &mut Input<'a>) -> ModalResult<Vec<RawPosition<'a>>> {
    separated(1.., position, '.').parse_next(input)
}

fn token<'a>(input: &mut &'a str) -> ModalResult<Token<'a>> {
    alt((
        one_of(['x', 'X']).value(Token::Muted),
        one_of(['o', 'O']).value(Token::Open),
        '-'.value(Token::Blank),
        digit1.map(Token::Fret),
    ))
    .parse_next(input)
}

/// Parses a shorthand into a fingering.
///
/// Returns the fingering together with any warnings.
pub(crate) fn parse(source: &str) -> Result<(Fingering, Vec<Diagnostic>), ParseError> {
    let mut input = LocatingSlice::new(source);

    // Every position consumes up to the next `.`, so the split only stops at
    // the end of the input.
    let raw = positions(&mut input).map_err(|_| {
        let at = input.current_token_start();
        ParseError::from(unexpected_character(Span::new(at..source.len())))
    })?;

    let mut diagnostics = Vec::new();
    let mut markers = Vec::with_capacity(raw.len());
    for position in &raw {
        trace!(token = position.token, start = position.token_span.start(); "Interpreting string position");
        match interpret(position) {
            Ok(marker) => {
                diagnostics.extend(label_warning(position, marker.as_ref()));
                markers.push(marker);
            }
            Err(diag) => diagnostics.push(diag),
        }
    }

    if diagnostics.iter().any(|diag| diag.severity().is_error()) {
        return Err(ParseError::new(diagnostics));
    }
    Ok((Fingering::new(markers), diagnostics))
}

fn interpret(raw: &RawPosition<'_>) -> Result<Option<Marker>, Diagnostic> {
    if let Some(span) = raw.trailing {
        return Err(unexpected_character(span));
    }

    if raw.token.is_empty() {
        return Err(match raw.label {
            Some((_, label_span)) => Diagnostic::error("label without a fret")
                .with_code(ErrorCode::E101)
                .with_label(raw.token_span, "expected a fret number here")
                .with_secondary_label(label_span, "label for this position")
                .with_help("put the fret in front of the label, e.g. `3/C`"),
            None => Diagnostic::error("empty string position")
                .with_code(ErrorCode::E101)
                .with_label(raw.token_span, ErrorCode::E101.description())
                .with_help("use `-` for a string without any marker"),
        });
    }

    let marker = match token.parse(raw.token) {
        Ok(Token::Muted) => Some(Marker::Muted),
        Ok(Token::Open) => Some(Marker::Open),
        Ok(Token::Blank) => None,
        Ok(Token::Fret(digits)) => {
            let fret = digits.parse::<u32>().map_err(|_| {
                Diagnostic::error(format!("fret number `{digits}` is too large"))
                    .with_code(ErrorCode::E105)
                    .with_label(raw.token_span, ErrorCode::E105.description())
            })?;
            Some(Marker::fretted(fret))
        }
        Err(_) => {
            return Err(
                Diagnostic::error(format!("unrecognized marker `{}`", raw.token))
                    .with_code(ErrorCode::E102)
                    .with_label(raw.token_span, ErrorCode::E102.description())
                    .with_help("use `x` (muted), `o` or `0` (open), `-` (none) or a fret number"),
            );
        }
    };

    let Some((text, label_span)) = raw.label else {
        return Ok(marker);
    };

    if text.is_empty() {
        let slash = Span::new(label_span.start().saturating_sub(1)..label_span.start());
        return Err(Diagnostic::error("empty label")
            .with_code(ErrorCode::E104)
            .with_label(slash, "expected label text after `/`")
            .with_help("remove the `/` or add a label, e.g. `3/C`"));
    }

    match marker {
        Some(marker @ Marker::Fretted { .. }) => Ok(Some(marker.with_label(text))),
        other => {
            let kind = match other {
                Some(Marker::Muted) => "muted",
                Some(Marker::Open) => "open",
                _ => "blank",
            };
            Err(Diagnostic::error(format!("label on {kind} string"))
                .with_code(ErrorCode::E103)
                .with_label(label_span, format!("a {kind} string has no dot to label"))
                .with_secondary_label(raw.token_span, format!("marked {kind} here"))
                .with_help("remove the label or fret the string, e.g. `3/A`"))
        }
    }
}

fn label_warning(raw: &RawPosition<'_>, marker: Option<&Marker>) -> Option<Diagnostic> {
    let label = marker?.label()?;
    let (_, span) = raw.label?;
    (label.chars().count() > MAX_FITTING_LABEL_CHARS).then(|| {
        Diagnostic::warning(format!("label `{label}` may not fit inside the dot"))
            .with_label(span, "long label")
            .with_help("labels of one or two characters fit best")
    })
}

fn unexpected_character(span: Span) -> Diagnostic {
    Diagnostic::error("unexpected character")
        .with_code(ErrorCode::E100)
        .with_label(span, "a position takes at most one `/label`")
        .with_help("separate string positions with `.`, e.g. `3/C.2.0`")
}
