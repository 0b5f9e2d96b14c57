//! Pure tic-tac-toe game logic with uninformed move search.
//!
//! The crate is split leaf-first:
//!
//! - **Board model**: [`Board`], [`Player`], [`Square`], [`Position`] and the
//!   win/draw rules in [`rules`]
//! - **State expansion**: [`expand`] enumerates one player's successor boards
//! - **Search**: four interchangeable strategies behind the closed [`Strategy`] enum
//! - **Fallback**: [`FallbackPicker`] resolves searches that find no goal
//! - **Candidates**: [`enumerate_candidates`] exposes one-ply boards for display
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, Player, Position, SearchConfig, Strategy};
//!
//! let board: Board = "OO.XX....".parse().unwrap();
//! let chosen = Strategy::Dfs.search(&board, Player::O, &SearchConfig::default());
//! assert_eq!(chosen, Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod candidates;
mod error;
mod expansion;
mod fallback;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use action::Move;
pub use candidates::enumerate_candidates;
pub use error::{BoardParseError, MoveError};
pub use expansion::{Successor, expand, successors};
pub use fallback::{FallbackPicker, FirstEmpty, RandomFallback};
pub use position::Position;
pub use rules::{is_full, is_win, winner};
pub use search::{DEFAULT_DEPTH_CEILING, ExplorationMode, SearchConfig, Strategy};
pub use types::{Board, Player, Square};
