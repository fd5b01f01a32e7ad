//! Terminal front-end configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Print edge weights at edge midpoints
    #[serde(default = "default_true")]
    pub show_weights: bool,

    /// Print node labels next to nodes
    #[serde(default = "default_true")]
    pub show_labels: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_weights: true,
            show_labels: true,
        }
    }
}

impl crate::validation::Validate for UiConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;
        use crate::validation::validate_positive;

        validate_positive("ui.tick_rate_ms", self.tick_rate_ms, 0)?;
        if self.tick_rate_ms > 1000 {
            return Err(ConfigError::ValidationError {
                field: "ui.tick_rate_ms".to_string(),
                message: format!(
                    "tick_rate_ms too large ({}), input would feel laggy; use <= 1000",
                    self.tick_rate_ms
                ),
            });
        }
        Ok(())
    }
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_is_valid() {
        assert!(UiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_tick_rejected() {
        let config = UiConfig {
            tick_rate_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_slow_tick_rejected() {
        let config = UiConfig {
            tick_rate_ms: 5000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
