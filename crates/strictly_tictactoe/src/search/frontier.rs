//! Frontier containers and the walk shared by breadth- and depth-first search.

use super::{ExplorationMode, SearchNode};
use crate::rules::is_win;
use crate::{Board, Player, Position, successors};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Ordered collection of nodes waiting to be explored.
pub(crate) trait Frontier<T> {
    /// Adds an item.
    fn push(&mut self, item: T);
    /// Removes the next item to explore.
    fn pop(&mut self) -> Option<T>;
    /// Index of the first item in `batch` matching `pred` in the order this
    /// frontier would hand the batch back out after pushing it in sequence.
    fn first_out<P: Fn(&T) -> bool>(batch: &[T], pred: P) -> Option<usize>;
}

/// FIFO: earliest pushed comes out first.
impl<T> Frontier<T> for VecDeque<T> {
    fn push(&mut self, item: T) {
        self.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn first_out<P: Fn(&T) -> bool>(batch: &[T], pred: P) -> Option<usize> {
        batch.iter().position(pred)
    }
}

/// LIFO: most recently pushed comes out first.
impl<T> Frontier<T> for Vec<T> {
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    fn first_out<P: Fn(&T) -> bool>(batch: &[T], pred: P) -> Option<usize> {
        batch.iter().rposition(pred)
    }
}

/// Walks the successor tree in the order `frontier` imposes.
pub(crate) fn explore<F>(frontier: F, board: &Board, player: Player, mode: ExplorationMode) -> Option<Position>
where
    F: Frontier<SearchNode>,
{
    let root = SearchNode::root(*board, ());
    match mode {
        ExplorationMode::Normalized => explore_full(frontier, root, player),
        ExplorationMode::Parity => explore_root_only(frontier, root, player),
    }
}

fn explore_full<F>(mut frontier: F, root: SearchNode, player: Player) -> Option<Position>
where
    F: Frontier<SearchNode>,
{
    if is_win(&root.board, player) {
        return None;
    }

    let mut seen = HashSet::from([root.board]);
    frontier.push(root);
    let mut expanded = 0usize;

    while let Some(node) = frontier.pop() {
        expanded += 1;
        let children: Vec<SearchNode> = successors(node.board, player)
            .filter(|step| seen.insert(step.board))
            .map(|step| node.child(step, (), ExplorationMode::Normalized))
            .collect();

        // Goals among siblings are taken in the order the frontier would pop them.
        if let Some(index) = F::first_out(&children, |child| is_win(&child.board, player)) {
            let origin = children[index].origin;
            debug!(expanded, ?origin, "Goal generated");
            return origin;
        }
        for child in children {
            frontier.push(child);
        }
    }

    debug!(expanded, "Frontier exhausted");
    None
}

fn explore_root_only<F>(mut frontier: F, root: SearchNode, player: Player) -> Option<Position>
where
    F: Frontier<SearchNode>,
{
    frontier.push(root);
    let mut visited = 0usize;

    while let Some(node) = frontier.pop() {
        visited += 1;
        if is_win(&node.board, player) {
            debug!(visited, origin = ?node.origin, "Goal selected");
            return node.origin;
        }
        if lacks_origin(node.origin) {
            for step in successors(node.board, player) {
                frontier.push(node.child(step, (), ExplorationMode::Parity));
            }
        }
    }

    debug!(visited, "Frontier exhausted");
    None
}

/// Index 0 reads as "no move" under this guard.
fn lacks_origin(origin: Option<Position>) -> bool {
    origin.is_none_or(|pos| pos.to_index() == 0)
}
