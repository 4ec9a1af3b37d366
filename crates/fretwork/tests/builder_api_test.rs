//! Integration tests for the ChordBuilder API

use fretwork::{
    ChordBuilder, FretworkError,
    color::Color,
    config::{AppConfig, DiagramConfig, StyleOverrides},
    style::StyleKey,
};

#[test]
fn test_builder_api_exists() {
    let _builder = ChordBuilder::default();
}

#[test]
fn test_parse_simple_chord() {
    let builder = ChordBuilder::default();
    let result = builder.parse("x.3.2.0.1.0");
    assert!(
        result.is_ok(),
        "Should parse valid chord: {:?}",
        result.as_ref().err()
    );
    assert_eq!(result.unwrap().len(), 6);
}

#[test]
fn test_parse_invalid_shorthand_returns_error() {
    let builder = ChordBuilder::default();
    let result = builder.parse("x.3.?.0");
    match result {
        Err(FretworkError::Parse { src, .. }) => assert_eq!(src, "x.3.?.0"),
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_render_simple_chord() {
    let builder = ChordBuilder::default();
    let options = builder.default_options().with_name("C");
    let diagram = builder
        .build("x.3.2.0.1.0", options)
        .expect("Failed to build chord");

    let svg = builder.render_svg(&diagram).expect("Failed to render");
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains(">C<"), "Output should contain the chord name");
}

#[test]
fn test_build_with_warnings_returns_long_labels() {
    let builder = ChordBuilder::default();
    let (diagram, warnings) = builder
        .build_with_warnings("x.3/Cmaj.2.0.1.0", builder.default_options())
        .expect("Failed to build chord");

    assert_eq!(diagram.options().string_count(), 6);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message().contains("Cmaj"));

    let (_, warnings) = builder
        .build_with_warnings("x.3/C.2.0.1.0", builder.default_options())
        .expect("Failed to build chord");
    assert!(warnings.is_empty());
}

#[test]
fn test_default_options_follow_config() {
    let mut diagram = DiagramConfig::default();
    diagram.set_frets(4);
    diagram.set_show_fret_number(true);
    let builder = ChordBuilder::new(AppConfig::new(StyleOverrides::default(), diagram));

    let options = builder.default_options();
    assert_eq!(options.fret_count(), 4);
    assert!(options.show_fret_number());
}

#[test]
fn test_config_styles_apply_to_diagrams() {
    let style = StyleOverrides::new().with(StyleKey::Dot, "#cc0000").unwrap();
    let builder = ChordBuilder::new(AppConfig::new(style, DiagramConfig::default()));
    let dot = Color::new("#cc0000").unwrap();
    assert_eq!(builder.styles().dot(), dot);

    let diagram = builder
        .build("x.3.2.0.1.0", builder.default_options())
        .unwrap();
    assert_eq!(diagram.styles().dot(), dot);

    let svg = builder.render_svg(&diagram).unwrap();
    assert!(
        svg.contains(&format!("fill=\"{dot}\"")),
        "Dots should use the configured color"
    );
}

#[test]
fn test_build_rejects_out_of_range_fret() {
    let builder = ChordBuilder::default();
    let options = builder.default_options().with_fret_count(3);
    let result = builder.build("x.5.2.0.1.0", options);
    assert!(matches!(result, Err(FretworkError::Config(_))));
}

#[test]
fn test_invalid_background_is_export_error() {
    let mut diagram_config = DiagramConfig::default();
    diagram_config.set_background(Some("not-a-color".to_string()));
    let builder = ChordBuilder::new(AppConfig::new(StyleOverrides::default(), diagram_config));

    let diagram = builder.build("0.0.0.3", builder.default_options()).unwrap();
    let result = builder.render_svg(&diagram);
    assert!(matches!(result, Err(FretworkError::Export(_))));
}

#[test]
fn test_builder_reusability() {
    let builder = ChordBuilder::default();

    let first = builder.build("x.3.2.0.1.0", builder.default_options()).unwrap();
    let second = builder.build("x.x.0.2.3.2", builder.default_options()).unwrap();

    let svg1 = builder.render_svg(&first).expect("Failed to render first");
    let svg2 = builder.render_svg(&second).expect("Failed to render second");
    assert_ne!(svg1, svg2);
    assert_eq!(svg1, builder.render_svg(&first).unwrap());
}

#[test]
fn test_write_svg() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("chord.svg");

    let builder = ChordBuilder::default();
    let diagram = builder.build("0.2.2.1.0.0", builder.default_options()).unwrap();
    builder.write_svg(&diagram, &path).expect("Failed to write SVG");

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<svg"));
}
