pub mod replay;

pub use replay::handle_replay;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "waypoint")]
#[command(about = "Draw a weighted graph and query shortest paths between its nodes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive editor
    Tui,
    /// Feed a script of input events through a fresh session
    Replay {
        /// Script file, one event per line (`-` reads stdin)
        script: PathBuf,

        /// Print the final session as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}
