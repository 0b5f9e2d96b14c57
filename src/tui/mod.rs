//! Terminal UI: a human plays against the search-driven opponent.

mod app;
mod input;
mod ui;

pub use app::App;

use crate::config::GameConfig;
use crate::opponent::OpponentController;
use crate::session::GameSession;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use strictly_tictactoe::RandomFallback;
use tokio::time::{Instant, sleep};
use tracing::{error, info, instrument};

/// How often input is polled and the opponent's timer checked.
const TICK: Duration = Duration::from_millis(25);

/// Runs the terminal UI until the user quits.
#[instrument(skip_all, fields(strategy = %config.strategy(), human = %config.human_mark()))]
pub async fn run_tui(config: GameConfig) -> Result<()> {
    info!("Starting Strictly Search TUI");

    let session = GameSession::new(config.roles());
    let opponent = OpponentController::new(
        *config.strategy(),
        config.search_config(),
        config.fallback(),
    );
    let app = App::new(session, opponent, config.opponent_delay(), Instant::now());

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = open_or_restore(open_terminal, restore_terminal)?;

    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn open_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Runs `open`; if it fails, runs `restore` before reporting the failure.
fn open_or_restore<T>(
    open: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    match open() {
        Ok(value) => Ok(value),
        Err(e) => {
            error!(error = %e, "Failed to set up terminal");
            if let Err(restore_err) = restore() {
                error!(error = %restore_err, "Failed to restore terminal");
            }
            Err(e).context("Failed to set up terminal")
        }
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App<RandomFallback>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        app.tick(Instant::now());

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                app.handle_key(key.code, Instant::now());
            }
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }

        sleep(TICK).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: Result<()> = open_or_restore(
            || Err(io::Error::other("no tty")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_leaves_terminal_alone() {
        let restored = Cell::new(false);
        let value = open_or_restore(
            || Ok(7),
            || {
                restored.set(true);
                Ok(())
            },
        )
        .unwrap();
        assert_eq!(value, 7);
        assert!(!restored.get());
    }
}
