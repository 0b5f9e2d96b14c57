//! Iterative-deepening search.

use super::{ExplorationMode, SearchConfig, SearchNode};
use crate::rules::is_win;
use crate::{Board, Player, Position, successors};
use tracing::{debug, instrument, warn};

/// Runs [`depth_limited`] with limits 0, 1, 2, ... up to the configured
/// ceiling and returns the first move found.
#[instrument(level = "debug", skip(board, config), fields(ceiling = config.depth_ceiling))]
pub fn iterative_deepening(board: &Board, player: Player, config: &SearchConfig) -> Option<Position> {
    for limit in 0..=config.depth_ceiling {
        if let Some(found) = depth_limited(board, player, limit, config.exploration) {
            return Some(found);
        }
    }
    warn!(
        ceiling = config.depth_ceiling,
        "No solution found by iterative deepening, falling back"
    );
    None
}

/// Depth-first search that only expands nodes shallower than `limit`.
///
/// At limit 0 only the root is examined, and the root carries no move, so
/// the result is always `None`.
pub fn depth_limited(board: &Board, player: Player, limit: usize, mode: ExplorationMode) -> Option<Position> {
    let mut stack = vec![SearchNode::root(*board, 0usize)];

    while let Some(node) = stack.pop() {
        if is_win(&node.board, player) {
            if node.origin.is_some() {
                debug!(depth = node.meta, limit, "Found winning move at depth {}", node.meta);
            }
            return node.origin;
        }
        if node.meta < limit {
            for step in successors(node.board, player) {
                stack.push(node.child(step, node.meta + 1, mode));
            }
        }
    }

    None
}
