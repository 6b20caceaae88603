//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::classifier::Tier;
use crate::model::ShellDialect;

#[derive(Parser)]
#[command(name = "envmerge")]
#[command(about = "Merge prioritized environment fragments into shell init files")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Fragment source directory (overrides config)
    #[arg(short = 'd', long, global = true)]
    pub fragments_dir: Option<PathBuf>,

    /// Output directory for generated files (overrides config)
    #[arg(short, long, global = true)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge fragments and generate shell environment files
    Build {
        /// Generate only these dialects (default: all)
        #[arg(long, value_delimiter = ',')]
        dialect: Vec<DialectArg>,
    },

    /// List loaded fragments in merge order
    #[command(visible_alias = "ls")]
    List {
        /// Only show fragments of this tier
        #[arg(long)]
        tier: Option<TierArg>,
    },

    /// Search fragment variables and scripts with a regex
    Search {
        /// Regular expression matched against keys, values, and scripts
        pattern: String,
    },

    /// Show the merged value and provenance chain for one variable
    Trace {
        /// Variable name
        key: String,
    },

    /// Show when the outputs were last generated
    Status,

    /// Install a fragment file from a path or URL into the fragments directory
    Import {
        /// File path or URL
        source: String,
        /// Skip preview confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Write an example fragment file
    Example {
        /// Destination path (default: ./sample_fragment.yaml)
        path: Option<PathBuf>,
    },

    /// Save or restore full manager state
    Snapshot {
        #[command(subcommand)]
        snapshot_command: SnapshotCommands,
    },
}

#[derive(Subcommand)]
pub enum SnapshotCommands {
    /// Save merged state to a snapshot file
    Save {
        /// Snapshot file path
        path: PathBuf,
    },
    /// Restore state from a snapshot and re-merge
    Restore {
        /// Snapshot file path
        path: PathBuf,
        /// Also regenerate the output files
        #[arg(long)]
        emit: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DialectArg {
    Bash,
    Zsh,
    Pwsh,
}

impl From<DialectArg> for ShellDialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Bash => ShellDialect::Bash,
            DialectArg::Zsh => ShellDialect::Zsh,
            DialectArg::Pwsh => ShellDialect::PowerShell,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TierArg {
    System,
    Internal,
    Custom,
}

impl From<TierArg> for Tier {
    fn from(arg: TierArg) -> Self {
        match arg {
            TierArg::System => Tier::System,
            TierArg::Internal => Tier::Internal,
            TierArg::Custom => Tier::Custom,
        }
    }
}
