//! One-ply candidate boards for display.

use crate::{Board, Player, successors};
use tracing::{debug, instrument};

/// Returns every board `player` could produce with one move, ascending by
/// the square filled. The input board is never modified.
#[instrument(skip(board), fields(board = %board))]
pub fn enumerate_candidates(board: &Board, player: Player) -> Vec<Board> {
    let candidates: Vec<Board> = successors(*board, player)
        .map(|successor| successor.board)
        .collect();
    debug!(count = candidates.len(), "Enumerated candidate boards");
    candidates
}
