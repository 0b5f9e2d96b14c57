//! Uniform-cost search.

use super::{ExplorationMode, SearchNode};
use crate::rules::is_win;
use crate::{Board, Player, Position, successors};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use tracing::debug;

/// Every move costs the same.
const STEP_COST: u32 = 1;

/// Heap entry ordered so the cheapest, earliest-queued node pops first.
#[derive(Debug)]
struct Queued {
    cost: u32,
    seq: u64,
    node: SearchNode<u32>,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap.
        (other.cost, other.seq).cmp(&(self.cost, self.seq))
    }
}

/// Pops the minimum-cost node each iteration; equal costs come out in
/// insertion order.
///
/// With unit edge costs this visits nodes in breadth-first order. Goals are
/// tested when a node is popped.
pub fn uniform_cost(board: &Board, player: Player, mode: ExplorationMode) -> Option<Position> {
    let mut heap = BinaryHeap::new();
    let mut seen = HashSet::from([*board]);
    let mut seq = 0u64;
    heap.push(Queued {
        cost: 0,
        seq,
        node: SearchNode::root(*board, 0),
    });
    let mut visited = 0usize;

    while let Some(Queued { node, .. }) = heap.pop() {
        visited += 1;
        if is_win(&node.board, player) {
            debug!(visited, cost = node.meta, origin = ?node.origin, "Goal selected");
            return node.origin;
        }

        for step in successors(node.board, player) {
            let cost = match mode {
                ExplorationMode::Normalized => {
                    if !seen.insert(step.board) {
                        continue;
                    }
                    node.meta + STEP_COST
                }
                ExplorationMode::Parity => STEP_COST,
            };
            seq += 1;
            heap.push(Queued {
                cost,
                seq,
                node: node.child(step, cost, mode),
            });
        }
    }

    debug!(visited, "Frontier exhausted");
    None
}
