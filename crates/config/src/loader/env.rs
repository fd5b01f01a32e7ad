//! Environment variable configuration overlay
//!
//! Supports environment variables in the format:
//! `WAYPOINT_<section>_<field>=value`
//!
//! Examples:
//! - `WAYPOINT_GRAPH_SELECTION_RADIUS=0.08`
//! - `WAYPOINT_GRAPH_WEIGHT_SCALE=800`
//! - `WAYPOINT_LOG_LEVEL=debug`
//!
//! Variables whose section is not a config section (`WAYPOINT_HOME`, ...)
//! belong to something else and are skipped. A bad field or value inside a
//! known section is an error.

use crate::{
    error::ConfigError,
    loader::merge::{ConfigLayer, GraphLayer, LogLayer, UiLayer},
    Result,
};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

const PREFIX: &str = "WAYPOINT_";

/// Read the settings given by `WAYPOINT_` variables
///
/// Returns `None` when no variable applies to a config section.
pub fn from_env() -> Result<Option<ConfigLayer>> {
    from_vars(env::vars())
}

fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Result<Option<ConfigLayer>> {
    let mut layer = ConfigLayer::default();
    let mut applied = false;

    for (key, value) in vars {
        let Some(name) = key.strip_prefix(PREFIX) else {
            continue;
        };
        applied |= apply_env_var(&mut layer, name, &value)?;
    }

    Ok(applied.then_some(layer))
}

/// Apply one variable; `false` when it names no config section
fn apply_env_var(layer: &mut ConfigLayer, name: &str, value: &str) -> Result<bool> {
    let Some((section, field)) = name.split_once('_') else {
        warn!(var = %format!("{PREFIX}{name}"), "ignoring variable outside any config section");
        return Ok(false);
    };
    let section = section.to_lowercase();
    let field = field.to_lowercase();

    match section.as_str() {
        "graph" => apply_graph_var(&mut layer.graph, &field, value)?,
        "ui" => apply_ui_var(&mut layer.ui, &field, value)?,
        "log" => apply_log_var(&mut layer.log, &field, value)?,
        _ => {
            warn!(var = %format!("{PREFIX}{name}"), "ignoring variable outside any config section");
            return Ok(false);
        }
    }
    Ok(true)
}

fn var_name(section: &str, field: &str) -> String {
    format!("{PREFIX}{}_{}", section.to_uppercase(), field.to_uppercase())
}

fn unknown_field(section: &str, field: &str) -> ConfigError {
    ConfigError::EnvVarError {
        var: var_name(section, field),
        message: format!("Unknown field: {}", field),
    }
}

fn parse_number<T: FromStr>(section: &str, field: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| ConfigError::EnvVarError {
        var: var_name(section, field),
        message: format!("Invalid number: {}", value),
    })
}

fn apply_graph_var(layer: &mut GraphLayer, field: &str, value: &str) -> Result<()> {
    match field {
        "selection_radius" => layer.selection_radius = Some(parse_number("graph", field, value)?),
        "weight_scale" => layer.weight_scale = Some(parse_number("graph", field, value)?),
        "allow_parallel_edges" => {
            layer.allow_parallel_edges = Some(parse_bool("graph", field, value)?)
        }
        _ => return Err(unknown_field("graph", field)),
    }
    Ok(())
}

fn apply_ui_var(layer: &mut UiLayer, field: &str, value: &str) -> Result<()> {
    match field {
        "tick_rate_ms" => layer.tick_rate_ms = Some(parse_number("ui", field, value)?),
        "show_weights" => layer.show_weights = Some(parse_bool("ui", field, value)?),
        "show_labels" => layer.show_labels = Some(parse_bool("ui", field, value)?),
        _ => return Err(unknown_field("ui", field)),
    }
    Ok(())
}

fn apply_log_var(layer: &mut LogLayer, field: &str, value: &str) -> Result<()> {
    match field {
        "level" => layer.level = Some(value.parse()?),
        "file" => layer.file = Some(PathBuf::from(value)),
        _ => return Err(unknown_field("log", field)),
    }
    Ok(())
}

fn parse_bool(section: &str, field: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::EnvVarError {
            var: var_name(section, field),
            message: format!(
                "Invalid boolean: {} (use true/false, 1/0, yes/no, on/off)",
                value
            ),
        }),
    }
}
