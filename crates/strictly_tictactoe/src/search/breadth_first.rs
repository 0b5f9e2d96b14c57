//! Breadth-first search.

use super::ExplorationMode;
use super::frontier::explore;
use crate::{Board, Player, Position};
use std::collections::VecDeque;

/// Explores level by level; ties go to the lower square.
pub fn breadth_first(board: &Board, player: Player, mode: ExplorationMode) -> Option<Position> {
    explore(VecDeque::new(), board, player, mode)
}
