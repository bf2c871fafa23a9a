// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game engine interfaces and AI backend

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::heuristic::{self, Difficulty};
use crate::{Coord, GameState};

/// Player backend trait for computer opponents
pub trait PlayerBackend {
    /// Get the next move from this player, `None` if there is nowhere to play
    fn next_move(&mut self, pos: &GameState) -> Option<Coord>;
}

/// Opponent that always plays White using the heuristic scorer
pub struct HeuristicBot {
    difficulty: Difficulty,
    rng: StdRng,
}

impl HeuristicBot {
    /// Create a bot seeded from the operating system
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a bot with a fixed seed, for reproducible games
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl PlayerBackend for HeuristicBot {
    fn next_move(&mut self, pos: &GameState) -> Option<Coord> {
        heuristic::select_move(pos.board(), self.difficulty, &mut self.rng)
    }
}
