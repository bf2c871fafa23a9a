// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation

use serde::ser::{Serialize, Serializer};

use crate::{Cell, Color, Coord, GameError};

/// Square Go board, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Size of the board (9, 13 or 19)
    size: u8,
    /// Positions on the board, `y * size + x`
    positions: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the specified size
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(size: u8) -> Self {
        assert!(size > 0, "board size must be positive");
        let cells = (size as usize) * (size as usize);
        Self {
            size,
            positions: vec![Cell::Empty; cells],
        }
    }

    /// Get the contents of the specified coordinate, `None` if off the board
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if !coord.is_valid(self.size) {
            return None;
        }

        Some(self.positions[self.coord_to_index(coord)])
    }

    /// Place a stone at the specified coordinate
    ///
    /// The board is left untouched when the coordinate is off the board or occupied.
    pub fn place(&mut self, coord: Coord, color: Color) -> Result<(), GameError> {
        if !coord.is_valid(self.size) {
            return Err(GameError::OutOfBounds);
        }

        let idx = self.coord_to_index(coord);
        if !self.positions[idx].is_empty() {
            return Err(GameError::CellOccupied);
        }

        self.positions[idx] = color.into();
        Ok(())
    }

    /// Convert a coordinate to a vector index
    fn coord_to_index(&self, coord: Coord) -> usize {
        (coord.y as usize) * (self.size as usize) + (coord.x as usize)
    }

    /// Get adjacent coordinates (up, down, left, right) that lie on the board
    pub fn adjacent_coords(&self, coord: Coord) -> Vec<Coord> {
        [(0, -1), (0, 1), (-1, 0), (1, 0)]
            .into_iter()
            .filter_map(|(dx, dy)| coord.offset(dx, dy, self.size))
            .collect()
    }

    /// Get the size of the board
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Iterate over every intersection in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let size = self.size as usize;
        self.positions.iter().enumerate().map(move |(idx, cell)| {
            // idx < size * size, so both parts fit in a u8
            let coord = Coord::new((idx % size) as u8, (idx / size) as u8);
            (coord, *cell)
        })
    }

    /// Rows of the board, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.positions.chunks(self.size as usize)
    }

    /// Count stones of specified color on the board
    pub fn count_stones_for(&self, color: Color) -> usize {
        let cell = Cell::from(color);
        self.positions.iter().filter(|c| **c == cell).count()
    }

    /// Returns true once no empty intersection remains
    pub fn is_full(&self) -> bool {
        self.positions.iter().all(|c| !c.is_empty())
    }
}

/// Serialized as an array of rows so that `board[y][x]` addresses a cell
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}
