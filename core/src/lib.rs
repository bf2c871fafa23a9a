// SPDX-License-Identifier: MIT OR Apache-2.0

//! tengen Core - Board State and Move Advisor
//!
//! This crate provides the game functionality behind the tengen server:
//! - Go board representation with a strictly alternating turn marker
//! - Per-game statistics (move counters and move timestamps)
//! - A heuristic move advisor with easy / medium / hard policies
//! - A lock-guarded handle that owns the single shared game
//!
//! Placement is accepted on any empty intersection. There is no capture,
//! ko or scoring logic.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod engine;
pub mod game;
pub mod handle;
pub mod heuristic;
pub mod stats;

use serde_repr::Serialize_repr;
use thiserror::Error;

pub use board::Board;
pub use engine::{HeuristicBot, PlayerBackend};
pub use game::GameState;
pub use handle::GameHandle;
pub use heuristic::Difficulty;
pub use stats::GameStats;

/// Board sizes accepted by [`GameState::new`]
pub const VALID_BOARD_SIZES: [u8; 3] = [9, 13, 19];

/// Board size used when a requested size is not accepted
pub const DEFAULT_BOARD_SIZE: u8 = 19;

/// Player color (Black or White)
///
/// Serialized as `1` for Black and `2` for White.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr)]
#[repr(u8)]
pub enum Color {
    /// Black player (moves first)
    Black = 1,
    /// White player (the advisor's side)
    White = 2,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Contents of a single intersection
///
/// Serialized as `0` (empty), `1` (black) or `2` (white).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize_repr)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Black = 1,
    White = 2,
}

impl Cell {
    /// Returns true if no stone occupies the cell
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// Board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// X coordinate (column)
    pub x: u8,
    /// Y coordinate (row)
    pub y: u8,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Build a coordinate from untrusted signed input, checking it against the board size
    pub fn from_signed(x: i64, y: i64, board_size: u8) -> Result<Self, GameError> {
        let size = i64::from(board_size);
        if !(0..size).contains(&x) || !(0..size).contains(&y) {
            return Err(GameError::OutOfBounds);
        }
        // Both values are below board_size, which fits in a u8
        Ok(Self::new(x as u8, y as u8))
    }

    /// Check if coordinate is valid for a board of given size
    pub fn is_valid(&self, board_size: u8) -> bool {
        self.x < board_size && self.y < board_size
    }

    /// Shift the coordinate by (dx, dy), returning `None` when it leaves the board
    pub fn offset(&self, dx: i32, dy: i32, board_size: u8) -> Option<Coord> {
        let x = i32::from(self.x) + dx;
        let y = i32::from(self.y) + dy;
        let size = i32::from(board_size);
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some(Coord::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Euclidean distance between two coordinates
    pub fn distance(&self, other: Coord) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Errors that can occur during game play
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The requested board size is not 9, 13 or 19
    #[error("Invalid board size: {0}")]
    InvalidSize(i64),

    /// The coordinate is outside the board
    #[error("Invalid move position")]
    OutOfBounds,

    /// The position is already occupied
    #[error("Position already occupied")]
    CellOccupied,

    /// An advisor move was requested while Black is to play
    #[error("Not AI's turn")]
    WrongTurn,

    /// The board is full
    #[error("No moves available")]
    NoMovesAvailable,
}
