//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// GUI Odyssey - Convert cross-app navigation annotations into dataset samples
#[derive(Parser, Debug)]
#[command(name = "odyssey")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert dataset splits into per-step samples
    Convert {
        /// Dataset checkout root
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Split to convert (repeatable; defaults to the configured splits)
        #[arg(short, long = "split")]
        splits: Vec<String>,

        /// Maximum episodes per split
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output directory for exported datasets
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Dataset name (only with a single split)
        #[arg(short, long)]
        name: Option<String>,

        /// Split file, relative to the root
        #[arg(long)]
        split_file: Option<String>,

        /// Fail instead of replacing an existing dataset
        #[arg(long)]
        no_overwrite: bool,
    },

    /// Show statistics for a split or an exported dataset
    Stats {
        /// Dataset checkout root
        #[arg(short, long, conflicts_with = "dataset")]
        root: Option<PathBuf>,

        /// Split to summarize
        #[arg(short, long, default_value = "train")]
        split: String,

        /// Maximum episodes to read
        #[arg(short, long)]
        limit: Option<usize>,

        /// Split file, relative to the root
        #[arg(long, conflicts_with = "dataset")]
        split_file: Option<String>,

        /// Exported dataset directory
        #[arg(short, long)]
        dataset: Option<PathBuf>,
    },

    /// Print the samples built from one episode
    Inspect {
        /// Annotation file name (as listed in the split file)
        episode: String,

        /// Dataset checkout root
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Print the dataset card
    Card,

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// View or reset configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "export.name_prefix")
        key: String,
    },

    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
