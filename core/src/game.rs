// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game state: board, turn marker and statistics

use serde::Serialize;

use crate::{Board, Color, Coord, GameError, GameStats, DEFAULT_BOARD_SIZE, VALID_BOARD_SIZES};

/// Represents the current state of a game
///
/// Serializes to `{"board": [[..]], "size": n, "currentPlayer": 1|2, "stats": {..}}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    board: Board,
    size: u8,
    current_player: Color,
    stats: GameStats,
}

impl GameState {
    /// Create a new game with the specified board size
    pub fn new(size: u8) -> Result<Self, GameError> {
        if !VALID_BOARD_SIZES.contains(&size) {
            return Err(GameError::InvalidSize(i64::from(size)));
        }

        Ok(Self {
            board: Board::new(size),
            size,
            current_player: Color::Black, // Black goes first
            stats: GameStats::new(),
        })
    }

    /// Create a new game, falling back to the default size for anything not accepted
    pub fn with_size_or_default(requested: i64) -> Self {
        let size = u8::try_from(requested)
            .ok()
            .filter(|s| VALID_BOARD_SIZES.contains(s))
            .unwrap_or_else(|| {
                tracing::debug!(requested, "Unsupported board size, using {}", DEFAULT_BOARD_SIZE);
                DEFAULT_BOARD_SIZE
            });

        Self::new(size).unwrap_or_else(|_| Self::default())
    }

    /// Place a stone for the player whose turn it is
    ///
    /// On success the mover's counter and the move log are updated and the
    /// turn passes to the opponent. On failure nothing changes.
    pub fn place_stone(&mut self, coord: Coord) -> Result<(), GameError> {
        let color = self.current_player;
        self.board.place(coord, color)?;

        self.stats.record_move(color);
        self.current_player = color.opposite();

        Ok(())
    }

    /// Consistent copy of the whole state
    pub fn snapshot(&self) -> GameState {
        self.clone()
    }

    /// The board contents
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the board
    pub fn size(&self) -> u8 {
        self.size
    }

    /// The player whose turn it is
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Move counters and timestamps
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Number of accepted moves so far
    pub fn total_moves(&self) -> u32 {
        self.stats.total_moves()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::new(DEFAULT_BOARD_SIZE),
            size: DEFAULT_BOARD_SIZE,
            current_player: Color::Black,
            stats: GameStats::new(),
        }
    }
}
