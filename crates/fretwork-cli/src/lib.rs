//! CLI logic for the Fretwork chord diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::info;

use fretwork::{ChordBuilder, FretworkError};

/// Run the Fretwork CLI application
///
/// Parses the chord shorthand, builds the diagram with the configured and
/// command-line options, and writes the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `FretworkError` for:
/// - Configuration loading errors
/// - Shorthand parsing errors
/// - Invalid diagram options
/// - Rendering and file I/O errors
pub fn run(args: &Args) -> Result<(), FretworkError> {
    info!(
        chord = args.chord,
        output_path = args.output;
        "Processing chord"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    config::apply_overrides(&mut app_config, args)?;

    let builder = ChordBuilder::new(app_config);

    let mut options = builder.default_options().with_fret_offset(args.fret_offset);
    if let Some(name) = &args.name {
        options = options.with_name(name);
    }
    if let Some(tuning) = &args.tuning {
        options = options.with_tuning(tuning);
    }

    let (diagram, warnings) = builder.build_with_warnings(&args.chord, options)?;
    error_adapter::report_warnings(&warnings, &args.chord);

    builder.write_svg(&diagram, &args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
