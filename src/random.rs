use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::GameState;

/// A player that selects uniformly at random from legal columns.
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        RandomPlayer {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic player for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        RandomPlayer {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a column, or `None` when the game has no legal move left.
    pub fn select_column(&mut self, state: &GameState) -> Option<usize> {
        let columns = state.legal_columns();
        if columns.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..columns.len());
        Some(columns[idx])
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}
