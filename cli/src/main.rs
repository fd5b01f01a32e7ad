mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{handle_replay, Cli, Commands};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use waypoint_config::{Config, ErrorFormatter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", ErrorFormatter::new(e));
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Tui => {
            init_file_logging(&config)?;
            waypoint_tui::run_tui(&config)?;
        }
        Commands::Replay { script, json } => {
            init_logging(&config)?;
            handle_replay(&script, json, &config)?;
        }
    }

    Ok(())
}

/// `RUST_LOG` wins over the configured level.
fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log.level.as_str()))
}

/// Log to `log.file` when set, otherwise stderr.
fn init_logging(config: &Config) -> Result<()> {
    if config.log.file.is_some() {
        return init_file_logging(config);
    }
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// The terminal belongs to the editor, so logs only go to `log.file`.
fn init_file_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log.file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
