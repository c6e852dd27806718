pub mod completions;
pub mod context;
pub mod list;
pub mod preview;
pub mod show;
pub mod spawn;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// mapinfo - Multiplayer map descriptors and spawn configurations
#[derive(Parser, Debug)]
#[command(name = "mapinfo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./mapinfo.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Game directory (overrides the configuration file)
    #[arg(long, global = true)]
    pub game_path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all registry and custom maps by game mode
    List(list::ListArgs),

    /// Show a single map descriptor
    Show(show::ShowArgs),

    /// Generate a spawn configuration for a map
    Spawn(spawn::SpawnArgs),

    /// Render a map preview with starting locations
    Preview(preview::PreviewArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
