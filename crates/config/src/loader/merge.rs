//! Configuration merging logic
//!
//! Files and the environment are read into a [`ConfigLayer`], where every
//! field is optional. Merging applies the fields a layer actually sets, so a
//! later source wins even when it restates a built-in default.

use crate::{types::*, Config};
use serde::Deserialize;
use std::path::PathBuf;

/// A partial configuration: only the fields its source mentioned.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub graph: GraphLayer,
    pub ui: UiLayer,
    pub log: LogLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphLayer {
    pub selection_radius: Option<f32>,
    pub weight_scale: Option<f32>,
    pub allow_parallel_edges: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiLayer {
    pub tick_rate_ms: Option<u64>,
    pub show_weights: Option<bool>,
    pub show_labels: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogLayer {
    pub level: Option<LogLevel>,
    pub file: Option<PathBuf>,
}

impl From<Config> for ConfigLayer {
    /// Every field set, so an explicit config replaces all earlier values.
    /// An unset `log.file` keeps whatever file an earlier layer chose.
    fn from(config: Config) -> Self {
        Self {
            graph: GraphLayer {
                selection_radius: Some(config.graph.selection_radius),
                weight_scale: Some(config.graph.weight_scale),
                allow_parallel_edges: Some(config.graph.allow_parallel_edges),
            },
            ui: UiLayer {
                tick_rate_ms: Some(config.ui.tick_rate_ms),
                show_weights: Some(config.ui.show_weights),
                show_labels: Some(config.ui.show_labels),
            },
            log: LogLayer {
                level: Some(config.log.level),
                file: config.log.file,
            },
        }
    }
}

/// Apply every field `layer` sets on top of `base`.
pub fn merge(mut base: Config, layer: ConfigLayer) -> Config {
    let ConfigLayer { graph, ui, log } = layer;

    set(&mut base.graph.selection_radius, graph.selection_radius);
    set(&mut base.graph.weight_scale, graph.weight_scale);
    set(&mut base.graph.allow_parallel_edges, graph.allow_parallel_edges);

    set(&mut base.ui.tick_rate_ms, ui.tick_rate_ms);
    set(&mut base.ui.show_weights, ui.show_weights);
    set(&mut base.ui.show_labels, ui.show_labels);

    set(&mut base.log.level, log.level);
    if log.file.is_some() {
        base.log.file = log.file;
    }
    base
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
