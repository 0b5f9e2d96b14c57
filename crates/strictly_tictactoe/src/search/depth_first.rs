//! Depth-first search.

use super::ExplorationMode;
use super::frontier::explore;
use crate::{Board, Player, Position};

/// Dives into the most recently generated branch first, so the highest
/// square is explored before its siblings.
pub fn depth_first(board: &Board, player: Player, mode: ExplorationMode) -> Option<Position> {
    explore(Vec::new(), board, player, mode)
}
