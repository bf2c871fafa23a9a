// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-game statistics

use serde::Serialize;

use crate::Color;

/// Counters and timestamps collected over one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub black_moves: u32,
    pub white_moves: u32,
    /// Never incremented, there is no capture logic
    pub black_captures: u32,
    /// Never incremented, there is no capture logic
    pub white_captures: u32,
    /// RFC 3339 timestamp of game creation
    pub game_start_time: String,
    /// Unix epoch milliseconds of each accepted move, oldest first
    pub move_times: Vec<i64>,
}

impl GameStats {
    /// Fresh statistics stamped with the current time
    pub fn new() -> Self {
        Self {
            black_moves: 0,
            white_moves: 0,
            black_captures: 0,
            white_captures: 0,
            game_start_time: chrono::Utc::now().to_rfc3339(),
            move_times: Vec::new(),
        }
    }

    /// Count a move by `color` at the current time
    pub fn record_move(&mut self, color: Color) {
        self.record_move_at(color, chrono::Utc::now().timestamp_millis());
    }

    /// Count a move by `color` at `millis`
    ///
    /// Timestamps never go backwards: a value older than the last entry is
    /// clamped to it.
    pub fn record_move_at(&mut self, color: Color, millis: i64) {
        match color {
            Color::Black => self.black_moves += 1,
            Color::White => self.white_moves += 1,
        }

        let stamp = self.move_times.last().map_or(millis, |last| millis.max(*last));
        self.move_times.push(stamp);
    }

    /// Total accepted moves
    pub fn total_moves(&self) -> u32 {
        self.black_moves + self.white_moves
    }
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}
