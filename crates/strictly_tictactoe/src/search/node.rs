//! Search tree nodes.

use super::ExplorationMode;
use crate::{Board, Position, Successor};

/// A board snapshot, the root move it descends from, and per-strategy
/// metadata (`()` for BFS/DFS, accumulated cost for UCS, depth for IDS).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode<M = ()> {
    /// Independent copy of the board at this node.
    pub board: Board,
    /// Move recorded for this node; `None` only at the root.
    pub origin: Option<Position>,
    /// Strategy-specific metadata.
    pub meta: M,
}

impl<M> SearchNode<M> {
    /// The root of a search.
    pub fn root(board: Board, meta: M) -> Self {
        Self {
            board,
            origin: None,
            meta,
        }
    }

    /// The child reached through `step`.
    pub fn child<N>(&self, step: Successor, meta: N, mode: ExplorationMode) -> SearchNode<N> {
        SearchNode {
            board: step.board,
            origin: mode.origin(self.origin, step.position),
            meta,
        }
    }
}
