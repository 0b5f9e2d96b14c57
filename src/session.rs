//! Game session: board, turn and outcome for one human-versus-search game.

use serde::{Deserialize, Serialize};
use strictly_tictactoe::{Board, Move, MoveError, Player, Position, is_full, is_win};
use tracing::{debug, info, instrument};

/// Who supplies the moves for a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Controller {
    /// Moves come from keyboard input.
    Human,
    /// Moves come from the opponent's search.
    Search,
}

/// Assignment of marks to controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleBinding {
    human: Player,
}

impl RoleBinding {
    /// Binds `human` to keyboard input and the other mark to search.
    pub fn new(human: Player) -> Self {
        Self { human }
    }

    /// The human's mark.
    pub fn human(&self) -> Player {
        self.human
    }

    /// The search-driven mark.
    pub fn opponent(&self) -> Player {
        self.human.opponent()
    }

    /// Controller for `mark`.
    pub fn controller(&self, mark: Player) -> Controller {
        if mark == self.human {
            Controller::Human
        } else {
            Controller::Search
        }
    }
}

impl Default for RoleBinding {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GameState {
    /// Moves are being played.
    InProgress,
    /// The human completed a line.
    HumanWon,
    /// The opponent completed a line.
    OpponentWon,
    /// The board filled with no winner.
    Draw,
    /// The session was ended before the game finished.
    Terminated,
}

impl GameState {
    /// True for every state except [`GameState::InProgress`].
    pub fn is_terminal(self) -> bool {
        self != GameState::InProgress
    }
}

/// One game between a human and the search-driven opponent.
///
/// X always moves first; [`RoleBinding`] decides which side that is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    to_move: Player,
    state: GameState,
    roles: RoleBinding,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a session with an empty board.
    #[instrument]
    pub fn new(roles: RoleBinding) -> Self {
        info!(human = %roles.human(), "Creating new game session");
        Self {
            board: Board::new(),
            to_move: Player::X,
            state: GameState::InProgress,
            roles,
            history: Vec::new(),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark due to move next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Role assignment.
    pub fn roles(&self) -> RoleBinding {
        self.roles
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Whether keyboard moves are accepted right now.
    pub fn accepts_human_input(&self) -> bool {
        self.state == GameState::InProgress
            && self.roles.controller(self.to_move) == Controller::Human
    }

    /// Whether the opponent is due to move.
    pub fn awaits_opponent(&self) -> bool {
        self.state == GameState::InProgress
            && self.roles.controller(self.to_move) == Controller::Search
    }

    /// Plays `position` for `player` and returns the resulting state.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] in a terminal state
    /// - [`MoveError::NotYourTurn`] when `player` is not due to move
    /// - [`MoveError::SquareOccupied`] when the square is taken
    ///
    /// A rejected move leaves the session unchanged.
    #[instrument(skip(self), fields(state = %self.state, to_move = %self.to_move))]
    pub fn play(&mut self, position: Position, player: Player) -> Result<GameState, MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if player != self.to_move {
            return Err(MoveError::NotYourTurn(player));
        }

        self.board.apply_move(position, player)?;
        self.history.push(Move::new(player, position));
        debug!(board = %self.board, "Move applied");

        if is_win(&self.board, player) {
            self.state = match self.roles.controller(player) {
                Controller::Human => GameState::HumanWon,
                Controller::Search => GameState::OpponentWon,
            };
            info!(winner = %player, state = %self.state, "Game won");
        } else if is_full(&self.board) {
            self.state = GameState::Draw;
            info!("Game drawn");
        } else {
            self.to_move = player.opponent();
        }

        Ok(self.state)
    }

    /// Plays a move for the human's mark.
    pub fn human_move(&mut self, position: Position) -> Result<GameState, MoveError> {
        self.play(position, self.roles.human())
    }

    /// Clears the board and starts a new game with the same roles.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn reset(&mut self) {
        info!("Resetting game session");
        self.board.clear();
        self.to_move = Player::X;
        self.state = GameState::InProgress;
        self.history.clear();
    }

    /// Starts over with a different role assignment.
    pub fn rebind(&mut self, roles: RoleBinding) {
        self.roles = roles;
        self.reset();
    }

    /// Ends the session; no further moves are accepted until [`reset`](Self::reset).
    #[instrument(skip(self))]
    pub fn terminate(&mut self) {
        info!(state = %self.state, "Terminating game session");
        self.state = GameState::Terminated;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(RoleBinding::default())
    }
}
