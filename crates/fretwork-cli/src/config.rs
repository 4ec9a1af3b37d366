//! Configuration loading for the CLI
//!
//! This module finds and loads TOML configuration files from various
//! locations (explicit path, local directory, system directory) and applies
//! command-line overrides on top.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use fretwork::{
    FretworkError,
    config::{AppConfig, StyleOverrides},
};

use crate::Args;

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for FretworkError {
    fn from(err: ConfigError) -> Self {
        FretworkError::Io(io::Error::other(err.to_string()))
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (fretwork/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, FretworkError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("fretwork/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "fretwork", "fretwork") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Apply command-line size, fret and style overrides to `config`.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] for a style override that is not of
/// the form `key=value`, and a style error for an invalid color.
pub fn apply_overrides(config: &mut AppConfig, args: &Args) -> Result<(), FretworkError> {
    let diagram = config.diagram_mut();
    if let Some(width) = args.width {
        diagram.set_width(width);
    }
    if let Some(height) = args.height {
        diagram.set_height(height);
    }
    if let Some(frets) = args.frets {
        diagram.set_frets(frets);
    }
    if args.show_fret_number {
        diagram.set_show_fret_number(true);
    }

    // Every `-s` entry is checked before any of them is applied.
    let mut styles = StyleOverrides::new();
    for entry in &args.styles {
        let (key, value) = entry.split_once('=').ok_or_else(|| {
            ConfigError::Validation(format!(
                "style override `{entry}` is not of the form key=value"
            ))
        })?;
        styles.set_named(key.trim(), value.trim())?;
        debug!(key = key.trim(), value = value.trim(); "Parsed style override");
    }
    config.style_mut().merge(&styles);

    Ok(())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, FretworkError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}
