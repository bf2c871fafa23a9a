// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic move selection.
//!
//! Each empty intersection is scored from three additive terms:
//! friendly orthogonal neighbours, closeness to the board centre, and
//! closeness to opponent stones within two lines. The difficulty level
//! decides how much of that ranking is used when picking a move.

use std::cmp::Ordering;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Board, Cell, Color, Coord};

/// Weight of the centrality term
const CENTER_WEIGHT: f64 = 5.0;
/// Weight of each opponent stone in the proximity window
const OPPONENT_WEIGHT: f64 = 2.0;
/// Half-width of the opponent proximity window (5x5)
const PROXIMITY_RADIUS: i32 = 2;
/// Number of best candidates sampled on medium
const MEDIUM_POOL: usize = 3;

/// Move selection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Uniformly random empty cell
    #[default]
    Easy,
    /// Random pick among the three best scored cells
    Medium,
    /// Best scored cell, first in row-major order on ties
    Hard,
}

/// Anything unrecognised plays as [`Difficulty::Easy`]
impl From<&str> for Difficulty {
    fn from(label: &str) -> Self {
        match label {
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(label)
    }
}

/// All empty intersections in row-major order
pub fn empty_cells(board: &Board) -> Vec<Coord> {
    board
        .iter()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(coord, _)| coord)
        .collect()
}

/// Heuristic value of playing `player` at `coord`
pub fn score(board: &Board, coord: Coord, player: Color) -> f64 {
    let size = board.size();
    let own = Cell::from(player);
    let opponent = Cell::from(player.opposite());

    let adjacency = board
        .adjacent_coords(coord)
        .into_iter()
        .filter(|n| board.get(*n) == Some(own))
        .count() as f64;

    let center = Coord::new(size / 2, size / 2);
    let centrality = CENTER_WEIGHT / (coord.distance(center) + 1.0);

    let mut proximity = 0.0;
    for dy in -PROXIMITY_RADIUS..=PROXIMITY_RADIUS {
        for dx in -PROXIMITY_RADIUS..=PROXIMITY_RADIUS {
            let Some(near) = coord.offset(dx, dy, size) else {
                continue;
            };
            if board.get(near) == Some(opponent) {
                proximity += OPPONENT_WEIGHT / (coord.distance(near) + 1.0);
            }
        }
    }

    adjacency + centrality + proximity
}

/// Pick a move for White according to `difficulty`
///
/// Returns `None` when the board is full.
pub fn select_move<R: Rng + ?Sized>(board: &Board, difficulty: Difficulty, rng: &mut R) -> Option<Coord> {
    let candidates = empty_cells(board);
    if candidates.is_empty() {
        return None;
    }

    match difficulty {
        Difficulty::Easy => candidates.choose(rng).copied(),
        Difficulty::Medium => {
            if candidates.len() <= MEDIUM_POOL {
                return candidates.choose(rng).copied();
            }
            let mut scored = score_all(board, &candidates, Color::White);
            scored.sort_unstable_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
            scored[..MEDIUM_POOL].choose(rng).map(|(coord, _)| *coord)
        }
        Difficulty::Hard => best_move(board, &candidates, Color::White),
    }
}

/// Highest scoring candidate; earlier candidates win ties
pub fn best_move(board: &Board, candidates: &[Coord], player: Color) -> Option<Coord> {
    let mut best: Option<(Coord, f64)> = None;
    for (coord, value) in score_all(board, candidates, player) {
        let better = match best {
            Some((_, top)) => value > top,
            None => true,
        };
        if better {
            best = Some((coord, value));
        }
    }
    best.map(|(coord, _)| coord)
}

fn score_all(board: &Board, candidates: &[Coord], player: Color) -> Vec<(Coord, f64)> {
    candidates
        .iter()
        .map(|coord| (*coord, score(board, *coord, player)))
        .collect()
}
