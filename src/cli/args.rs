//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::constants;

/// tunnelview - location and tunnel info panel for VPN clients
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, global = true, env = constants::CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// NDJSON event feed to replay (plays a demo when omitted)
    #[arg(long)]
    pub feed: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a feed without the TUI and print the final panel state
    Render {
        /// NDJSON feed file, or '-' for stdin
        file: PathBuf,
        /// Print the state as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the built-in demo scenario as an NDJSON feed
    Demo,
}
