use std::{fs, path::Path};

use tempfile::tempdir;

use fretwork::FretworkError;
use fretwork_cli::{Args, run};

const VALID_CHORDS: &[&str] = &[
    "x.3.2.0.1.0",
    "x.3/C.2/E.0.1/C.0",
    "0.2.2.1.0.0",
    "x.x.0.2.3.2",
    "3.2.0.0.0.3",
    "0.0.0.3",
    "-.-.-.-.-.-",
    "x.3/Cmaj.2.0.1.0",
];

const INVALID_CHORDS: &[&str] = &["", "x..0", "x.3.?.0", "0/A.2", "3/.2", "x.3/C/D"];

fn args(chord: &str, output: &Path) -> Args {
    Args {
        chord: chord.to_string(),
        output: output.to_string_lossy().to_string(),
        name: None,
        fret_offset: 0,
        frets: None,
        tuning: None,
        show_fret_number: false,
        width: None,
        height: None,
        styles: Vec::new(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_chords() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let mut failed = Vec::new();
    for (i, chord) in VALID_CHORDS.iter().enumerate() {
        let output_path = temp_dir.path().join(format!("chord_{i}.svg"));
        match run(&args(chord, &output_path)) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("Output should exist");
                assert!(svg.contains("<svg"), "{chord}: output is not SVG");
            }
            Err(err) => failed.push((chord, err)),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nValid chords that failed:");
        for (chord, err) in &failed {
            eprintln!("  - {chord}: {err}");
        }
        panic!("{} valid chord(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_invalid_chords() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    for chord in INVALID_CHORDS {
        let output_path = temp_dir.path().join("error.svg");
        let result = run(&args(chord, &output_path));

        assert!(
            matches!(result, Err(FretworkError::Parse { .. })),
            "`{chord}` should fail to parse, got {result:?}"
        );
        assert!(!output_path.exists(), "`{chord}` should not write output");
    }
}

#[test]
fn e2e_display_options() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("barre.svg");

    let mut args = args("x.1/1.3/3.3/3.3/3.1/1", &output_path);
    args.name = Some("C#".to_string());
    args.fret_offset = 4;
    args.show_fret_number = true;
    args.tuning = Some(
        ["E", "A", "D", "G", "B", "E"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    args.width = Some(240.0);
    args.height = Some(300.0);
    args.styles = vec!["dot = navy".to_string(), "font=Helvetica".to_string()];

    run(&args).expect("Failed to render barre chord");

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains(">4fr<"));
    assert!(svg.contains(">C#<"));
    assert!(svg.contains("font-family=\"Helvetica\""));
    assert!(svg.contains("width=\"240\""));
}

#[test]
fn e2e_config_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    let output_path = temp_dir.path().join("configured.svg");

    fs::write(
        &config_path,
        r#"
        [style]
        font = "Courier"

        [diagram]
        width = 100
        height = 140
        frets = 4
        background = "white"
        "#,
    )
    .unwrap();

    let mut args = args("x.3.2.0.1.0", &output_path);
    args.config = Some(config_path.to_string_lossy().to_string());
    args.name = Some("C".to_string());
    run(&args).expect("Failed to render with config");

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains("<rect"));
    assert!(svg.contains("height=\"140\""));
    assert!(svg.contains("font-family=\"Courier\""));
}

#[test]
fn e2e_rejected_options() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("rejected.svg");

    let mut too_few_frets = args("x.5.2.0.1.0", &output_path);
    too_few_frets.frets = Some(4);
    assert!(matches!(
        run(&too_few_frets),
        Err(FretworkError::Config(_))
    ));

    let mut bad_style = args("x.3.2.0.1.0", &output_path);
    bad_style.styles = vec!["dot".to_string()];
    assert!(run(&bad_style).is_err());

    let mut bad_color = args("x.3.2.0.1.0", &output_path);
    bad_color.styles = vec!["dot=not-a-color".to_string()];
    assert!(matches!(run(&bad_color), Err(FretworkError::Style(_))));

    let mut missing_config = args("x.3.2.0.1.0", &output_path);
    let missing_path = temp_dir.path().join("nope.toml");
    missing_config.config = Some(missing_path.to_string_lossy().to_string());
    assert!(run(&missing_config).is_err());

    assert!(!output_path.exists());
}
