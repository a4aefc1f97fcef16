//! Command-line interface for unbeatable_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unbeatable_tictactoe::{Board, Player};

/// Unbeatable tic-tac-toe - play against a full-depth minimax engine
#[derive(Parser, Debug)]
#[command(name = "unbeatable_tictactoe")]
#[command(about = "Tic-tac-toe against an opponent that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Mark played by the human (X or O)
    #[arg(long, global = true)]
    pub human: Option<Player>,

    /// Mark that moves first (X or O)
    #[arg(long, global = true)]
    pub first: Option<Player>,

    /// Pause before the computer replies, in milliseconds
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Tui,

    /// Play line by line on stdin/stdout
    Play,

    /// Show the engine's evaluation of a position
    Hint {
        /// Board as nine cells of X, O or '.', e.g. "XX./.O./..."
        #[arg(short, long)]
        board: Board,

        /// Player to move
        #[arg(short, long, default_value = "O")]
        mover: Player,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play the engine against every human line and count the results
    Audit {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
