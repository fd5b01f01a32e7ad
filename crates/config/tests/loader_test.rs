use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;
use waypoint_config::{Config, ConfigBuilder, ConfigError, LogLevel};

#[test]
fn loads_toml_from_default_location() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".waypoint.toml"),
        "[graph]\nselection_radius = 0.1\nweight_scale = 800.0\n",
    )
    .unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.graph.selection_radius, 0.1);
    assert_eq!(config.graph.weight_scale, 800.0);
    assert_eq!(config.ui, Config::default().ui);
}

#[test]
fn toml_takes_precedence_over_yaml_in_lookup() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".waypoint.toml"), "[log]\nlevel = \"warn\"\n").unwrap();
    fs::write(dir.path().join(".waypoint.yml"), "log:\n  level: error\n").unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.log.level, LogLevel::Warn);
}

#[test]
fn missing_default_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn later_file_overrides_earlier_file() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("base.yaml");
    let local = dir.path().join("local.json");
    fs::write(&base, "graph:\n  selection_radius: 0.2\n  allow_parallel_edges: false\n").unwrap();
    fs::write(&local, r#"{ "graph": { "selection_radius": 0.3 } }"#).unwrap();

    let config = ConfigBuilder::new()
        .with_file(&base)
        .with_file(&local)
        .build()
        .unwrap();
    assert_eq!(config.graph.selection_radius, 0.3);
    assert!(!config.graph.allow_parallel_edges);
}

#[test]
fn out_of_range_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[graph]\nselection_radius = 4.0\n").unwrap();

    let err = ConfigBuilder::new().with_file(&path).build().unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { .. }));
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("waypoint.ini");
    fs::write(&path, "radius=1").unwrap();

    let err = ConfigBuilder::new().with_file(&path).build().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownFormat { .. }));
}
