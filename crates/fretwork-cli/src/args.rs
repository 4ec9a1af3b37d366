//! Command-line argument definitions for the Fretwork CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the chord, its display options, the
//! output path, configuration file and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Fretwork chord diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Chord shorthand, one dot-separated marker per string
    #[arg(help = "Chord shorthand such as x.3/C.2.0.1.0")]
    pub chord: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Chord name drawn above the diagram
    #[arg(short, long)]
    pub name: Option<String>,

    /// Fret at which the top row begins; 0 draws the nut
    #[arg(long = "fret", default_value_t = 0)]
    pub fret_offset: u32,

    /// Number of fret rows, overriding the configuration
    #[arg(long)]
    pub frets: Option<u32>,

    /// Comma-separated tuning labels, one per string
    #[arg(short, long, value_delimiter = ',')]
    pub tuning: Option<Vec<String>>,

    /// Draw the `<N>fr` label when the diagram does not start at the nut
    #[arg(long)]
    pub show_fret_number: bool,

    /// Output width in pixels, overriding the configuration
    #[arg(long)]
    pub width: Option<f32>,

    /// Output height in pixels, overriding the configuration
    #[arg(long)]
    pub height: Option<f32>,

    /// Style override as key=value, e.g. dot=#cc0000; may be repeated
    #[arg(short, long = "style")]
    pub styles: Vec<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
