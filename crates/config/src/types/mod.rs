//! Configuration type definitions
//!
//! Each section is self-contained with validation and sensible defaults.

pub mod graph;
pub mod log;
pub mod ui;

pub use graph::GraphConfig;
pub use log::{LogConfig, LogLevel};
pub use ui::UiConfig;

use serde::{Deserialize, Serialize};

/// Main configuration struct aggregating all settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Graph editing behaviour
    #[serde(default)]
    pub graph: GraphConfig,

    /// Terminal front end
    #[serde(default)]
    pub ui: UiConfig,

    /// Diagnostics output
    #[serde(default)]
    pub log: LogConfig,
}

impl crate::validation::Validate for Config {
    fn validate(&self) -> crate::error::Result<()> {
        self.graph.validate()?;
        self.ui.validate()?;
        self.log.validate()?;
        Ok(())
    }
}
