//! Command-line interface for strictly_search.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{ExplorationMode, Player, Strategy};

/// Strictly Search - tic-tac-toe against BFS, DFS, UCS or IDS
#[derive(Parser, Debug)]
#[command(name = "strictly_search")]
#[command(about = "Play tic-tac-toe against a search-driven opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_search.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Overrides shared by every subcommand that runs a search.
#[derive(clap::Args, Debug, Default)]
pub struct SearchArgs {
    /// Search technique: BFS, DFS, UCS or IDS
    #[arg(short, long)]
    pub strategy: Option<Strategy>,

    /// Exploration rules: normalized or parity
    #[arg(long)]
    pub exploration: Option<ExplorationMode>,

    /// Largest depth limit for iterative deepening
    #[arg(long)]
    pub depth_ceiling: Option<usize>,

    /// Seed for the random fallback move
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Search overrides
        #[command(flatten)]
        search: SearchArgs,

        /// Mark you play (X moves first)
        #[arg(long)]
        human: Option<Player>,

        /// Delay before the opponent moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Log file (the terminal is taken by the UI)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Print the move a strategy picks for a board, and the resulting candidates
    Search {
        /// Board as 9 cells in row-major order, e.g. "OO.XX...." (`.`, `_` or `-` for empty)
        board: String,

        /// Mark to search for
        #[arg(short, long, default_value = "O")]
        player: Player,

        /// Search overrides
        #[command(flatten)]
        search: SearchArgs,
    },

    /// List the search techniques
    Strategies,
}
