//! Configuration loading from various sources

pub mod env;
pub mod file;
pub mod formats;
pub mod merge;

pub use merge::ConfigLayer;

use crate::{Config, Result, Validate};
use std::fmt;
use std::path::{Path, PathBuf};

/// Format for configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfigFormat::Yaml => "YAML",
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Json => "JSON",
        })
    }
}

/// Configuration source for layered loading
#[derive(Debug, Clone)]
pub enum ConfigSource {
    File(PathBuf),
    Environment,
    /// Explicit config object (for programmatic use)
    Explicit(Config),
}

/// Default file names, in lookup order
pub const DEFAULT_PATHS: [&str; 4] = [
    ".waypoint.toml",
    ".waypoint.yml",
    ".waypoint.yaml",
    ".waypoint.json",
];

/// Builder for loading and merging configurations
///
/// Later sources take precedence:
/// defaults < file < environment < explicit overrides
///
/// # Example
///
/// ```no_run
/// use waypoint_config::loader::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_file(".waypoint.toml")
///     .with_env()
///     .build()?;
/// # Ok::<(), waypoint_config::ConfigError>(())
/// ```
pub struct ConfigBuilder {
    sources: Vec<ConfigSource>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources
            .push(ConfigSource::File(path.as_ref().to_path_buf()));
        self
    }

    pub fn with_env(mut self) -> Self {
        self.sources.push(ConfigSource::Environment);
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.sources.push(ConfigSource::Explicit(config));
        self
    }

    /// Merge all sources in order and validate the result
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        for source in self.sources {
            match source {
                ConfigSource::File(path) => {
                    config = merge::merge(config, file::load_from_file(&path)?);
                }
                ConfigSource::Environment => {
                    if let Some(env_layer) = env::from_env()? {
                        config = merge::merge(config, env_layer);
                    }
                }
                ConfigSource::Explicit(explicit_config) => {
                    config = merge::merge(config, ConfigLayer::from(explicit_config));
                }
            }
        }

        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Load configuration from the first default location that exists
    ///
    /// Falls back to defaults when no file is found. Environment variables
    /// are always applied on top.
    pub fn load() -> Result<Self> {
        Self::load_from_dir(Path::new("."))
    }

    /// Same as [`Config::load`], searching `dir` instead of the working directory
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut builder = ConfigBuilder::new();

        if let Some(path) = DEFAULT_PATHS
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
        {
            builder = builder.with_file(path);
        }

        builder.with_env().build()
    }

    /// Load configuration from a specific file, with environment overlay
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        ConfigBuilder::new().with_file(path).with_env().build()
    }
}
