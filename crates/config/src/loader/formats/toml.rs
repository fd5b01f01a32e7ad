//! TOML format parser

use crate::{error::ConfigError, loader::ConfigFormat, loader::ConfigLayer, Result};

/// Parse configuration from TOML string
pub fn parse(content: &str) -> Result<ConfigLayer> {
    parse_with_path(content, None)
}

/// Parse configuration from TOML string with file path for better errors
pub fn parse_with_path(content: &str, path: Option<&str>) -> Result<ConfigLayer> {
    ::toml::from_str(content).map_err(|e| {
        let position = e
            .span()
            .map(|span| (content[..span.start].matches('\n').count() + 1, None));
        ConfigError::parse_failure(ConfigFormat::Toml, e.message(), content, position, path)
    })
}
