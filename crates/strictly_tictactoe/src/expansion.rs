//! Successor-state expansion.

use crate::{Board, Player, Position};
use tracing::instrument;

/// One legal successor of a board: the move played and the board it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Successor {
    /// The square filled to reach `board`.
    pub position: Position,
    /// Independent copy of the parent with `position` filled.
    pub board: Board,
}

/// Lazily yields every successor of `board` for `player`, in ascending
/// index order.
///
/// The order is the tie-break for every search strategy.
pub fn successors(board: Board, player: Player) -> impl Iterator<Item = Successor> {
    Position::ALL
        .into_iter()
        .filter(move |&pos| board.is_empty(pos))
        .map(move |position| Successor {
            position,
            board: board.with_mark(position, player),
        })
}

/// Collects [`successors`] into a vector.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn expand(board: &Board, player: Player) -> Vec<Successor> {
    successors(*board, player).collect()
}
