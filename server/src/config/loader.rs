//! Configuration file loading and parsing
//!
//! Loads badge configuration from RON files, searching the standard
//! locations when no explicit path is given.

use super::Config;
use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};

/// Standard config file names to search for
const CONFIG_FILENAMES: &[&str] = &["badges.ron", ".badges/config.ron"];

/// Load configuration from a specific file path
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_ron(&content).with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Load configuration with automatic file discovery
///
/// Searches for config files in the following locations (in order):
/// 1. Path specified in BADGES_CONFIG_PATH environment variable
/// 2. badges.ron in current directory
/// 3. .badges/config.ron relative to current directory
///
/// If no config file is found, returns a default configuration.
pub fn load_with_discovery() -> Result<Config> {
    if let Ok(env_path) = std::env::var("BADGES_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            tracing::info!("Loading config from BADGES_CONFIG_PATH: {}", path.display());
            return load_from_file(&path);
        } else {
            tracing::warn!(
                "BADGES_CONFIG_PATH specified but file not found: {}",
                path.display()
            );
        }
    }

    for filename in CONFIG_FILENAMES {
        let path = PathBuf::from(filename);
        if path.exists() {
            tracing::info!("Loading config from: {}", path.display());
            return load_from_file(&path);
        }
    }

    tracing::info!("No config file found, using defaults");
    Ok(Config::default())
}

/// Parse and validate a RON configuration string
fn parse_ron(content: &str) -> Result<Config> {
    let config: Config = ron::from_str(content).context("Failed to parse RON configuration")?;
    config.validate().map_err(|e| anyhow!(e))?;
    Ok(config)
}
