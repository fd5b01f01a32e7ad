//! Format-specific parsers

pub mod json;
pub mod toml;
pub mod yaml;

use super::{ConfigFormat, ConfigLayer};
use crate::Result;

impl ConfigFormat {
    /// Parse `content`; `path` only decorates error messages.
    pub fn parse(self, content: &str, path: Option<&str>) -> Result<ConfigLayer> {
        match self {
            ConfigFormat::Yaml => yaml::parse_with_path(content, path),
            ConfigFormat::Toml => toml::parse_with_path(content, path),
            ConfigFormat::Json => json::parse_with_path(content, path),
        }
    }
}
