//! Command-line interface for notakto.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Notakto - misère tic-tac-toe on several boards
#[derive(Parser, Debug)]
#[command(name = "notakto")]
#[command(about = "Evaluate Notakto positions and play the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./notakto.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the computer's move selection
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Print reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a start position
    New {
        /// Number of boards (overrides the config)
        #[arg(short, long)]
        boards: Option<usize>,
    },

    /// Evaluate a position given as board strings, e.g. `----X---- ---------`
    Evaluate {
        /// Boards in wire encoding (`-` empty, anything else marked)
        #[arg(required = true)]
        boards: Vec<String>,
    },

    /// Ask the computer for its reply to a position
    Reply {
        /// Boards in wire encoding
        #[arg(required = true)]
        boards: Vec<String>,
    },

    /// Play a human move, then let the computer answer
    Play {
        /// Index of the board to mark
        #[arg(short, long)]
        board: usize,

        /// Square to mark (0-8, row-major)
        #[arg(short, long)]
        square: usize,

        /// Boards in wire encoding
        #[arg(required = true)]
        boards: Vec<String>,
    },
}
