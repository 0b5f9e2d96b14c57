//! Uninformed move search over one player's successor states.
//!
//! Every strategy treats the board as the root of an implicit tree whose
//! children come from [`successors`](crate::successors) for the *same*
//! player: hypothetical sequences of that player's moves, with no replies
//! from the opponent. A node is a goal when the player has completed a line.
//! The result is the move at the root leading toward the first goal found,
//! or `None` when the frontier runs dry and the caller must fall back.

mod breadth_first;
mod depth_first;
mod frontier;
mod iterative_deepening;
mod node;
mod uniform_cost;

pub use breadth_first::breadth_first;
pub use depth_first::depth_first;
pub use iterative_deepening::{depth_limited, iterative_deepening};
pub use node::SearchNode;
pub use uniform_cost::uniform_cost;

use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default depth ceiling for iterative deepening.
pub const DEFAULT_DEPTH_CEILING: usize = 50;

/// The four search techniques the opponent can use.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(ascii_case_insensitive)]
pub enum Strategy {
    /// Breadth-first search.
    #[default]
    #[strum(serialize = "BFS")]
    Bfs,
    /// Depth-first search.
    #[strum(serialize = "DFS")]
    Dfs,
    /// Uniform-cost search.
    #[strum(serialize = "UCS")]
    Ucs,
    /// Iterative-deepening search.
    #[strum(serialize = "IDS")]
    Ids,
}

impl Strategy {
    /// Long name of the technique.
    pub fn title(self) -> &'static str {
        match self {
            Strategy::Bfs => "Breadth-First Search",
            Strategy::Dfs => "Depth-First Search",
            Strategy::Ucs => "Uniform-Cost Search",
            Strategy::Ids => "Iterative Deepening Search",
        }
    }

    /// One-sentence description shown when the technique is selected.
    pub fn description(self) -> &'static str {
        match self {
            Strategy::Bfs => "Breadth-First Search explores nodes level by level.",
            Strategy::Dfs => "Depth-First Search explores as deep as possible along a branch.",
            Strategy::Ucs => "Uniform-Cost Search expands the least-cost nodes first.",
            Strategy::Ids => "Iterative Deepening Search uses increasing depth limits.",
        }
    }

    /// The technique after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Strategy::Bfs => Strategy::Dfs,
            Strategy::Dfs => Strategy::Ucs,
            Strategy::Ucs => Strategy::Ids,
            Strategy::Ids => Strategy::Bfs,
        }
    }

    /// Searches for a move that leads `player` toward a completed line.
    ///
    /// Returns `None` when no goal is reachable; the caller is expected to
    /// fall back to a random empty square.
    #[instrument(skip(board, config), fields(board = %board, exploration = %config.exploration))]
    pub fn search(self, board: &Board, player: Player, config: &SearchConfig) -> Option<Position> {
        let chosen = match self {
            Strategy::Bfs => breadth_first(board, player, config.exploration),
            Strategy::Dfs => depth_first(board, player, config.exploration),
            Strategy::Ucs => uniform_cost(board, player, config.exploration),
            Strategy::Ids => iterative_deepening(board, player, config),
        };
        debug!(?chosen, "Search finished");
        chosen
    }
}

/// How far the strategies explore and which move they report.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExplorationMode {
    /// All four strategies search the full successor tree and report the
    /// root move of the branch holding the goal.
    ///
    /// BFS and DFS test nodes as they are generated and skip boards already
    /// seen; UCS accumulates one unit of cost per move.
    #[default]
    Normalized,
    /// BFS and DFS only expand nodes without an originating move (the root,
    /// plus any node reached by playing index 0). UCS expands everything at a
    /// flat cost of 1. UCS and IDS report the last move on the goal path.
    Parity,
}

impl ExplorationMode {
    /// Originating move recorded on a child reached by playing `step`.
    pub(crate) fn origin(self, parent: Option<Position>, step: Position) -> Option<Position> {
        match self {
            ExplorationMode::Normalized => parent.or(Some(step)),
            ExplorationMode::Parity => Some(step),
        }
    }
}

/// Tunables shared by every strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Exploration rules.
    pub exploration: ExplorationMode,
    /// Largest depth limit tried by iterative deepening.
    pub depth_ceiling: usize,
}

impl SearchConfig {
    /// Creates a search configuration.
    pub fn new(exploration: ExplorationMode, depth_ceiling: usize) -> Self {
        Self {
            exploration,
            depth_ceiling,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(ExplorationMode::default(), DEFAULT_DEPTH_CEILING)
    }
}
