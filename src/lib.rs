//! Strictly Search - tic-tac-toe against a search-driven opponent
//!
//! The opponent picks its moves with one of four uninformed search
//! techniques (BFS, DFS, UCS, IDS), selectable at runtime.
//!
//! # Architecture
//!
//! - **Core** ([`strictly_tictactoe`]): board model, expansion, search strategies
//! - **Session**: board, turn and outcome of one game
//! - **Opponent**: runs the selected search each turn and applies its move
//! - **Config**: TOML settings with CLI overrides
//! - **TUI**: ratatui front end
//!
//! # Example
//!
//! ```
//! use strictly_search::{GameSession, OpponentController, RoleBinding};
//! use strictly_tictactoe::{FirstEmpty, Player, Position, SearchConfig, Strategy};
//!
//! let mut session = GameSession::new(RoleBinding::new(Player::X));
//! let mut opponent = OpponentController::new(Strategy::Bfs, SearchConfig::default(), FirstEmpty);
//!
//! session.human_move(Position::Center).unwrap();
//! let turn = opponent.take_turn(&mut session).unwrap();
//! assert_eq!(turn.candidates().len(), 7);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod opponent;
mod session;
pub mod tui;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
pub use opponent::{MoveSource, OpponentController, OpponentTurn, PlannedMove, plan_move};
pub use session::{Controller, GameSession, GameState, RoleBinding};
