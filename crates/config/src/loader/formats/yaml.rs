//! YAML format parser

use crate::{error::ConfigError, loader::ConfigFormat, loader::ConfigLayer, Result};

/// Parse configuration from YAML string
pub fn parse(content: &str) -> Result<ConfigLayer> {
    parse_with_path(content, None)
}

/// Parse configuration from YAML string with file path for better errors
pub fn parse_with_path(content: &str, path: Option<&str>) -> Result<ConfigLayer> {
    serde_yaml::from_str(content).map_err(|e| {
        let position = e.location().map(|loc| (loc.line(), None));
        ConfigError::parse_failure(ConfigFormat::Yaml, e.to_string(), content, position, path)
    })
}
