//! Application state and logic.

use crate::opponent::{MoveSource, OpponentController, PlannedMove};
use crate::session::{GameSession, GameState, RoleBinding};
use crossterm::event::KeyCode;
use std::time::Duration;
use strictly_tictactoe::{Board, FallbackPicker, Position, RandomFallback, Strategy};
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

use super::input::{digit_position, move_cursor};

/// Main application state.
///
/// Time is passed in by the caller so the opponent's delayed move can be
/// driven deterministically.
pub struct App<F = RandomFallback> {
    session: GameSession,
    opponent: OpponentController<F>,
    delay: Duration,
    cursor: Position,
    status_message: String,
    candidates: Vec<Board>,
    last_opponent_move: Option<PlannedMove>,
    opponent_due: Option<Instant>,
    should_quit: bool,
}

impl<F: FallbackPicker> App<F> {
    /// Creates the application; schedules the opponent if it moves first.
    pub fn new(
        session: GameSession,
        opponent: OpponentController<F>,
        delay: Duration,
        now: Instant,
    ) -> Self {
        let mut app = Self {
            session,
            opponent,
            delay,
            cursor: Position::Center,
            status_message: String::new(),
            candidates: Vec::new(),
            last_opponent_move: None,
            opponent_due: None,
            should_quit: false,
        };
        app.start_round(now);
        app
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Selected strategy.
    pub fn strategy(&self) -> Strategy {
        self.opponent.strategy()
    }

    /// Cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Opponent's one-ply candidate boards from its last move.
    pub fn candidates(&self) -> &[Board] {
        &self.candidates
    }

    /// The opponent's most recent move in this game.
    pub fn last_opponent_move(&self) -> Option<PlannedMove> {
        self.last_opponent_move
    }

    /// When the opponent's scheduled move is due.
    pub fn opponent_due(&self) -> Option<Instant> {
        self.opponent_due
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self, now))]
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.session.terminate();
                self.opponent_due = None;
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.reset(now),
            KeyCode::Char('b') => self.select_strategy(Strategy::Bfs, now),
            KeyCode::Char('d') => self.select_strategy(Strategy::Dfs, now),
            KeyCode::Char('u') => self.select_strategy(Strategy::Ucs, now),
            KeyCode::Char('i') => self.select_strategy(Strategy::Ids, now),
            KeyCode::Tab => self.select_strategy(self.strategy().next(), now),
            KeyCode::Char('s') => self.swap_sides(now),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.human_move(self.cursor, now),
            KeyCode::Char(c) => {
                if let Some(position) = digit_position(c) {
                    self.cursor = position;
                    self.human_move(position, now);
                }
            }
            _ => {}
        }
    }

    /// Plays the opponent's move once its delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        match self.opponent_due {
            Some(due) if now >= due => {
                self.opponent_due = None;
                self.opponent_move();
            }
            _ => {}
        }
    }

    fn human_move(&mut self, position: Position, now: Instant) {
        if !self.session.accepts_human_input() {
            debug!(state = %self.session.state(), "Ignoring input outside the human's turn");
            if !self.session.state().is_terminal() {
                self.status_message = "Wait for the opponent to move.".to_string();
            }
            return;
        }

        match self.session.human_move(position) {
            Ok(GameState::InProgress) => {
                self.status_message = format!("Opponent ({}) is thinking...", self.strategy());
                self.opponent_due = Some(now + self.delay);
            }
            Ok(state) => self.finish(state),
            Err(e) => {
                self.status_message = format!("Invalid move: {}. Try again.", e);
            }
        }
    }

    fn opponent_move(&mut self) {
        match self.opponent.take_turn(&mut self.session) {
            Ok(turn) => {
                let planned = *turn.planned();
                self.last_opponent_move = Some(planned);
                self.candidates = turn.candidates().clone();
                match turn.state() {
                    GameState::InProgress => {
                        let how = match planned.source() {
                            MoveSource::Search => "by search",
                            MoveSource::Fallback => "at random",
                        };
                        self.status_message = format!(
                            "Opponent played {} {}. Your turn.",
                            planned.position(),
                            how
                        );
                    }
                    state => self.finish(*state),
                }
            }
            Err(e) => {
                warn!(error = %e, "Opponent move failed");
                self.status_message = format!("Opponent could not move: {}", e);
            }
        }
    }

    fn finish(&mut self, state: GameState) {
        info!(%state, "Game over");
        let outcome = match state {
            GameState::HumanWon => "Human wins :)".to_string(),
            GameState::OpponentWon => format!("Opponent ({}) wins :)", self.strategy()),
            GameState::Draw => "Draw!".to_string(),
            GameState::Terminated | GameState::InProgress => return,
        };
        self.status_message = format!("{} Press 'r' to restart or 'q' to quit.", outcome);
    }

    fn select_strategy(&mut self, strategy: Strategy, now: Instant) {
        self.opponent.set_strategy(strategy);
        self.reset(now);
    }

    fn swap_sides(&mut self, now: Instant) {
        let human = self.session.roles().opponent();
        info!(%human, "Swapping sides");
        self.session.rebind(RoleBinding::new(human));
        self.start_round(now);
    }

    /// Clears the board; a pending opponent move is cancelled.
    fn reset(&mut self, now: Instant) {
        self.session.reset();
        self.start_round(now);
    }

    fn start_round(&mut self, now: Instant) {
        self.candidates.clear();
        self.last_opponent_move = None;
        self.opponent_due = None;
        self.cursor = Position::Center;
        if self.session.awaits_opponent() {
            self.status_message = format!("Opponent ({}) moves first...", self.strategy());
            self.opponent_due = Some(now + self.delay);
        } else {
            self.status_message = format!(
                "You are {}. Press 1-9 or arrows + Enter to move.",
                self.session.roles().human()
            );
        }
    }
}
