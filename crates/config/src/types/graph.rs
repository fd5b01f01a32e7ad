//! Graph editing configuration

use serde::{Deserialize, Serialize};

/// Settings that shape how pointer input edits the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Hit-test radius for picking an existing node, in normalized units
    ///
    /// A click closer than this to a node selects it instead of creating a
    /// new one. The drawable area spans -1.0..1.0 on both axes.
    #[serde(default = "default_selection_radius")]
    pub selection_radius: f32,

    /// Factor applied to the Euclidean distance when an edge is drawn
    ///
    /// Only affects the displayed weights; shortest paths are invariant under
    /// a positive scale.
    #[serde(default = "default_weight_scale")]
    pub weight_scale: f32,

    /// Accept a second edge between a pair that is already connected
    #[serde(default = "default_allow_parallel_edges")]
    pub allow_parallel_edges: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            selection_radius: default_selection_radius(),
            weight_scale: default_weight_scale(),
            allow_parallel_edges: default_allow_parallel_edges(),
        }
    }
}

impl crate::validation::Validate for GraphConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;
        use crate::validation::validate_range;

        validate_range("graph.selection_radius", self.selection_radius, 0.001, 1.0)?;

        if !self.weight_scale.is_finite() || self.weight_scale <= 0.0 {
            return Err(ConfigError::ValidationError {
                field: "graph.weight_scale".to_string(),
                message: format!(
                    "weight_scale must be a positive finite number, got {}",
                    self.weight_scale
                ),
            });
        }

        Ok(())
    }
}

fn default_selection_radius() -> f32 {
    0.05
}

fn default_weight_scale() -> f32 {
    1.0
}

fn default_allow_parallel_edges() -> bool {
    true
}
