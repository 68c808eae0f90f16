//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timetravel - tic-tac-toe with a rewindable history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Two-player tic-tac-toe in the terminal, with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it doesn't exist)
    #[arg(short, long, global = true, default_value = "strictly_timetravel.toml")]
    pub config: PathBuf,

    /// Report a full board without a winner as a draw
    #[arg(long, global = true)]
    pub report_draws: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Write logs to this file instead of the configured one
        #[arg(long)]
        log_file: Option<PathBuf>,

        /// Leave empty squares blank instead of numbering them
        #[arg(long)]
        no_hints: bool,
    },

    /// Apply a sequence of actions and print the resulting view
    Replay {
        /// Actions in order: a square (1-9 or a label like `center`) places
        /// a mark, `jN` jumps to step N
        #[arg(required = true)]
        actions: Vec<String>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}
