use fretwork_core::chord::Marker;
use fretwork_parser::{Span, error::ErrorCode, parse, parse_with_warnings};

#[test]
fn test_open_c_major() {
    let fingering = parse("x.3.2.0.1.0").expect("Failed to parse");

    assert_eq!(fingering.len(), 6);
    assert_eq!(
        fingering.markers(),
        &[
            Some(Marker::Muted),
            Some(Marker::fretted(3)),
            Some(Marker::fretted(2)),
            Some(Marker::Open),
            Some(Marker::fretted(1)),
            Some(Marker::Open),
        ]
    );
}

#[test]
fn test_labeled_position() {
    let fingering = parse("3/C.2.0").expect("Failed to parse");

    assert_eq!(fingering.len(), 3);
    match &fingering.markers()[0] {
        Some(Marker::Fretted { position, label }) => {
            assert_eq!(position.get(), 3);
            assert_eq!(label.as_deref(), Some("C"));
        }
        other => panic!("Expected a fretted marker, got {other:?}"),
    }
    assert_eq!(fingering.markers()[1], Some(Marker::fretted(2)));
    assert_eq!(fingering.markers()[2], Some(Marker::Open));
}

#[test]
fn test_four_string_ukulele_chord() {
    let fingering = parse("0.0.0.3").expect("Failed to parse");
    assert_eq!(fingering.len(), 4);
    assert_eq!(fingering.markers()[3], Some(Marker::fretted(3)));
}

#[test]
fn test_single_position() {
    let fingering = parse("5").expect("Failed to parse");
    assert_eq!(fingering.markers(), &[Some(Marker::fretted(5))]);
}

#[test]
fn test_error_display_counts_extra_diagnostics() {
    let err = parse("x..q").unwrap_err();

    assert_eq!(err.diagnostics().len(), 2);
    assert_eq!(
        err.to_string(),
        "error[E101]: empty string position (+1 more)"
    );
}

#[test]
fn test_error_spans_point_into_source() {
    let source = "x.3.2/.0.1.0";
    let err = parse(source).unwrap_err();
    let diag = &err.diagnostics()[0];

    assert_eq!(diag.code(), Some(ErrorCode::E104));
    let span = diag.primary_span().expect("primary label");
    assert_eq!(span, Span::new(5..6));
    assert_eq!(&source[span.to_range()], "/");
}

#[test]
fn test_label_on_muted_string_has_two_labels() {
    let err = parse("x/A.3").unwrap_err();
    let diag = &err.diagnostics()[0];

    assert_eq!(diag.code(), Some(ErrorCode::E103));
    assert_eq!(diag.labels().len(), 2);
    assert_eq!(diag.message(), "label on muted string");
}

#[test]
fn test_warnings_are_returned() {
    let (fingering, warnings) =
        parse_with_warnings("x.3/Cmaj7.2.0").expect("Failed to parse");

    assert_eq!(fingering.len(), 4);
    assert_eq!(warnings.len(), 1);
    assert!(!warnings[0].severity().is_error());
    assert_eq!(warnings[0].primary_span(), Some(Span::new(4..9)));
}
