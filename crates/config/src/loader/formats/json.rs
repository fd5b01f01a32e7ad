//! JSON format parser

use crate::{error::ConfigError, loader::ConfigFormat, loader::ConfigLayer, Result};

/// Parse configuration from JSON string
pub fn parse(content: &str) -> Result<ConfigLayer> {
    parse_with_path(content, None)
}

/// Parse configuration from JSON string with file path for better errors
pub fn parse_with_path(content: &str, path: Option<&str>) -> Result<ConfigLayer> {
    serde_json::from_str(content).map_err(|e| {
        let position = Some((e.line(), Some(e.column())));
        ConfigError::parse_failure(ConfigFormat::Json, e.to_string(), content, position, path)
    })
}
