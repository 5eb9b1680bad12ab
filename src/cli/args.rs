use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::types::Watch;

#[derive(Parser)]
#[command(name = "fypgraph", version, about = "Personalized for-you feed over an interaction graph")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Catalog JSON file (array of video rows)
    #[arg(long, short, value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,
    /// Event log JSON file replayed before the command
    #[arg(long, short, value_name = "FILE", global = true)]
    pub events: Option<PathBuf>,
    #[arg(long, short, default_value = "user_1", global = true)]
    pub user: String,
    /// Config file (defaults to ./fypgraph.toml when present)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
    /// Override the configured coefficient preset
    #[arg(long, value_enum, global = true)]
    pub profile: Option<Preset>,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    GenreAware,
    Simple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Dot,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the for-you page
    Rank {
        #[arg(long, short)]
        top: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Record one interaction, then print the refreshed page
    Interact {
        #[arg(value_name = "VIDEO")]
        video: String,
        #[arg(long)]
        like: bool,
        #[arg(long)]
        comment: bool,
        #[arg(long)]
        share: bool,
        #[arg(long)]
        save: bool,
        #[arg(long, value_enum, default_value_t = Watch::Full)]
        watch: Watch,
        #[arg(long, short)]
        top: Option<usize>,
    },
    /// Draw the next video, weighted by rank
    Next {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Dump nodes and edges for visualization
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
    /// Print the effective configuration
    Config,
}
