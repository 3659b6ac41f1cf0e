//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CardMatch auth gateway CLI
#[derive(Parser, Debug)]
#[command(name = "cardmatch-gateway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Gateway configuration file (YAML)
    #[arg(short, long, global = true, default_value = "gateway.yaml")]
    pub config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Probe backend reachability
    Check,
}
