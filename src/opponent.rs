//! Search-driven opponent.

use crate::session::{GameSession, GameState};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{
    Board, FallbackPicker, MoveError, Player, Position, RandomFallback, SearchConfig, Strategy,
    enumerate_candidates,
};
use tracing::{debug, info, instrument, warn};

/// Where a chosen move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum MoveSource {
    /// The strategy found a path to a win.
    Search,
    /// The strategy found nothing and a random empty square was taken.
    Fallback,
}

/// A move chosen for a board, not yet applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct PlannedMove {
    /// Square to fill.
    position: Position,
    /// How it was chosen.
    source: MoveSource,
}

/// Runs `strategy` on `board` for `player`, falling back to `fallback` when
/// the search finds no goal.
///
/// # Errors
///
/// [`MoveError::NoLegalMoves`] when the search fails on a full board.
#[instrument(skip(board, search, fallback), fields(board = %board))]
pub fn plan_move<F>(
    strategy: Strategy,
    search: &SearchConfig,
    fallback: &mut F,
    board: &Board,
    player: Player,
) -> Result<PlannedMove, MoveError>
where
    F: FallbackPicker + ?Sized,
{
    if let Some(position) = strategy.search(board, player, search) {
        debug!(%position, "Search chose move");
        return Ok(PlannedMove {
            position,
            source: MoveSource::Search,
        });
    }

    let empties = Position::valid_moves(board);
    let position = fallback.pick(&empties).ok_or(MoveError::NoLegalMoves)?;
    info!(%position, empties = empties.len(), "Search found no goal, using fallback move");
    Ok(PlannedMove {
        position,
        source: MoveSource::Fallback,
    })
}

/// Outcome of one opponent turn.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct OpponentTurn {
    /// The move played.
    planned: PlannedMove,
    /// Session state after the move.
    state: GameState,
    /// One-ply boards for the opponent after its move, empty once the game ends.
    candidates: Vec<Board>,
}

/// Plays the search-driven side of a [`GameSession`].
#[derive(Debug, Clone, derive_new::new)]
pub struct OpponentController<F = RandomFallback> {
    strategy: Strategy,
    search: SearchConfig,
    fallback: F,
}

impl<F: FallbackPicker> OpponentController<F> {
    /// Currently selected strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Search tunables.
    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    /// Switches strategy for subsequent turns.
    #[instrument(skip(self), fields(previous = %self.strategy))]
    pub fn set_strategy(&mut self, strategy: Strategy) {
        info!(%strategy, "Strategy selected");
        self.strategy = strategy;
    }

    /// Chooses and plays the opponent's move, then enumerates the
    /// opponent's candidate boards for the next round.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] or [`MoveError::NotYourTurn`] when the session
    /// is not waiting on the opponent.
    #[instrument(skip(self, session), fields(strategy = %self.strategy))]
    pub fn take_turn(&mut self, session: &mut GameSession) -> Result<OpponentTurn, MoveError> {
        let mark = session.roles().opponent();
        if session.state().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if session.to_move() != mark {
            warn!(%mark, to_move = %session.to_move(), "Opponent asked to move out of turn");
            return Err(MoveError::NotYourTurn(mark));
        }

        let board = *session.board();
        let planned = plan_move(self.strategy, &self.search, &mut self.fallback, &board, mark)?;
        let state = session.play(planned.position, mark)?;
        info!(position = %planned.position, source = %planned.source, %state, "Opponent moved");

        let candidates = if state == GameState::InProgress {
            enumerate_candidates(session.board(), mark)
        } else {
            Vec::new()
        };

        Ok(OpponentTurn {
            planned,
            state,
            candidates,
        })
    }
}
