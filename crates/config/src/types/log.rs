//! Diagnostics configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;

/// Verbosity of the diagnostic log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub const ALL: [&'static str; 5] = ["trace", "debug", "info", "warn", "error"];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::invalid_enum("log.level", s, &LogLevel::ALL)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level emitted when `RUST_LOG` is not set
    #[serde(default)]
    pub level: LogLevel,

    /// Append log lines to this file instead of stderr
    ///
    /// The terminal UI only logs when this is set.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl crate::validation::Validate for LogConfig {
    fn validate(&self) -> crate::error::Result<()> {
        if let Some(file) = &self.file {
            if file.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError {
                    field: "log.file".to_string(),
                    message: "path must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
