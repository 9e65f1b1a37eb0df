//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --json, --color, --verbose, host selection) are inherited by all subcommands
//! - Host selection narrows the configured topology; it never adds hosts

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorWhen {
    #[default]
    Auto,
    Always,
    Never,
}

/// connector-admin - manage query engine connector configuration across a cluster
#[derive(Parser, Debug)]
#[command(name = "connector-admin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: $CONNECTOR_ADMIN_CONFIG, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the per-host report as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only act on these hosts (comma-separated)
    #[arg(short = 'H', long, global = true, value_delimiter = ',', value_name = "HOSTS")]
    pub hosts: Vec<String>,

    /// Skip these hosts (comma-separated)
    #[arg(short = 'x', long, global = true, value_delimiter = ',', value_name = "HOSTS")]
    pub exclude_hosts: Vec<String>,

    /// Run hosts concurrently
    #[arg(long, global = true)]
    pub parallel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy or remove connector configurations
    Connector {
        #[command(subcommand)]
        action: ConnectorAction,
    },

    /// Inspect the coordinator
    Coordinator {
        #[command(subcommand)]
        action: CoordinatorAction,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConnectorAction {
    /// Deploy one staged connector, or every staged connector when NAME is omitted
    Add {
        /// Connector name (file name without .properties)
        name: Option<String>,
    },

    /// Remove a connector from every host and from the local staging directory
    Remove {
        /// Connector name (file name without .properties)
        name: String,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum CoordinatorAction {
    /// Print the URL clients should use to reach the coordinator
    Endpoint,
}
