//! Last-resort move selection when a search finds no goal.

use crate::Position;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Chooses a move from the empty squares of the board being searched.
///
/// Implementations must return one of `empties`, or `None` when it is empty.
pub trait FallbackPicker {
    /// Picks one of `empties`.
    fn pick(&mut self, empties: &[Position]) -> Option<Position>;
}

/// Uniformly random choice among the empty squares.
#[derive(Debug, Clone)]
pub struct RandomFallback<R = SmallRng> {
    rng: R,
}

impl RandomFallback<SmallRng> {
    /// Seeds from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic picker for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> FallbackPicker for RandomFallback<R> {
    #[instrument(level = "debug", skip(self))]
    fn pick(&mut self, empties: &[Position]) -> Option<Position> {
        let chosen = empties.choose(&mut self.rng).copied();
        debug!(?chosen, "Random fallback");
        chosen
    }
}

/// Always takes the lowest empty square.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEmpty;

impl FallbackPicker for FirstEmpty {
    fn pick(&mut self, empties: &[Position]) -> Option<Position> {
        empties.first().copied()
    }
}
