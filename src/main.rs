//! Strictly Search - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, SearchArgs};
use std::sync::Arc;
use strictly_search::{GameConfig, plan_move};
use strictly_tictactoe::{Board, Player, Strategy, enumerate_candidates};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            search,
            human,
            delay_ms,
            log_file,
        } => {
            let mut config = apply_search_args(config, search);
            if let Some(human) = human {
                config = config.with_human_mark(human);
            }
            if let Some(delay_ms) = delay_ms {
                config = config.with_opponent_delay_ms(delay_ms);
            }
            if let Some(log_file) = log_file {
                config = config.with_log_file(log_file);
            }
            run_play(config).await
        }
        Command::Search {
            board,
            player,
            search,
        } => {
            init_stderr_logging();
            run_search(apply_search_args(config, search), &board, player)
        }
        Command::Strategies => {
            list_strategies();
            Ok(())
        }
    }
}

fn apply_search_args(mut config: GameConfig, args: SearchArgs) -> GameConfig {
    if let Some(strategy) = args.strategy {
        config = config.with_strategy(strategy);
    }
    if let Some(exploration) = args.exploration {
        config = config.with_exploration(exploration);
    }
    if let Some(depth_ceiling) = args.depth_ceiling {
        config = config.with_depth_ceiling(depth_ceiling);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Play in the terminal UI, logging to a file
async fn run_play(config: GameConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?config, "Starting game");
    strictly_search::tui::run_tui(config).await
}

/// One-shot search on a board given on the command line
#[instrument(skip(config), fields(strategy = %config.strategy()))]
fn run_search(config: GameConfig, board: &str, player: Player) -> Result<()> {
    let board: Board = board.parse()?;
    debug!(%board, "Parsed board");

    let strategy = *config.strategy();
    let mut fallback = config.fallback();
    let planned = plan_move(strategy, &config.search_config(), &mut fallback, &board, player)?;
    let after = board.with_mark(*planned.position(), player);

    println!("{}: {}", strategy, strategy.description());
    println!("Exploration: {}\n", config.exploration());
    println!("{}\n", board.display());
    println!(
        "{} plays {} ({})\n",
        player,
        planned.position(),
        planned.source()
    );
    println!("{}\n", after.display());

    let candidates = enumerate_candidates(&after, player);
    println!("Candidate boards for {} ({}):", player, candidates.len());
    for candidate in candidates {
        println!("  {}", candidate.compact());
    }
    Ok(())
}

fn list_strategies() {
    for strategy in Strategy::iter() {
        println!(
            "{:<4} {:<28} {}",
            strategy.to_string(),
            strategy.title(),
            strategy.description()
        );
    }
}
