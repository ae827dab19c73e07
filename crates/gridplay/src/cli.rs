//! Command-line interface for gridplay.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gridplay_engine::{Mark, WinPolicy};

/// Default log file for the interactive terminal.
pub const DEFAULT_LOG_FILE: &str = "gridplay.log";

/// Gridplay - N x N tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "gridplay")]
#[command(about = "Tic-tac-toe on an N x N board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Board side length (at least 3)
    #[arg(long, global = true)]
    pub size: Option<usize>,

    /// Mark that moves first (X or O)
    #[arg(long, global = true)]
    pub start: Option<Mark>,

    /// Win policy (full_line or fixed_run)
    #[arg(long, global = true)]
    pub policy: Option<WinPolicy>,

    /// Subcommand to run (defaults to play)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// File that receives log output while the UI is up
        #[arg(long, default_value = DEFAULT_LOG_FILE)]
        log_file: PathBuf,
    },

    /// Replay a list of clicks and print the result
    Script {
        /// Space-separated moves, e.g. "0,0 1,1 2,2"
        #[arg(short, long)]
        moves: String,

        /// Click restart after the moves
        #[arg(long)]
        restart_after: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
