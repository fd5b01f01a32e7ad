//! File-based configuration loading

use crate::{error::ConfigError, loader::ConfigFormat, loader::ConfigLayer, Result};
use std::fs;
use std::path::Path;

/// Read the settings a file mentions; validation happens once all layers
/// are merged.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ConfigLayer> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = detect_format(path)?;

    let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    format.parse(&content, path.to_str())
}

/// Detect configuration format from file extension
fn detect_format(path: &Path) -> Result<ConfigFormat> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yml") | Some("yaml") => Ok(ConfigFormat::Yaml),
        Some("toml") => Ok(ConfigFormat::Toml),
        Some("json") => Ok(ConfigFormat::Json),
        _ => Err(ConfigError::UnknownFormat {
            path: path.to_path_buf(),
        }),
    }
}
