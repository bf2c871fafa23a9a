// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared ownership of the single live game
//!
//! One mutex guards the whole [`GameState`]. Every operation holds it until
//! its state change is complete, so readers never observe a half-applied
//! move and a reset swaps the entire state at once. Logging happens after
//! the guard is released.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::engine::PlayerBackend;
use crate::{Color, Coord, GameError, GameState};

/// Cloneable handle to the live game
#[derive(Clone, Default)]
pub struct GameHandle {
    state: Arc<Mutex<GameState>>,
}

impl GameHandle {
    /// Start a game with the requested size, coerced to an accepted one
    pub fn new(requested_size: i64) -> Self {
        Self::from_state(GameState::with_size_or_default(requested_size))
    }

    /// Wrap an existing state
    pub fn from_state(state: GameState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Consistent copy of the current state
    pub fn snapshot(&self) -> GameState {
        self.state.lock().snapshot()
    }

    /// Run `f` against the current state while holding the lock
    pub fn read<T>(&self, f: impl FnOnce(&GameState) -> T) -> T {
        f(&self.state.lock())
    }

    /// Place a stone for the player to move at untrusted coordinates
    pub fn place_stone(&self, x: i64, y: i64) -> Result<GameState, GameError> {
        let mut game = self.state.lock();
        let coord = Coord::from_signed(x, y, game.size())?;
        game.place_stone(coord)?;
        Ok(game.snapshot())
    }

    /// Replace the game with a fresh one, discarding all statistics
    pub fn reset(&self, requested_size: i64) -> GameState {
        let fresh = GameState::with_size_or_default(requested_size);
        let mut game = self.state.lock();
        *game = fresh;
        let snapshot = game.snapshot();
        drop(game);

        tracing::info!(size = snapshot.size(), "Board reset");
        snapshot
    }

    /// Let `backend` choose and play White's move
    ///
    /// Fails with [`GameError::WrongTurn`] when Black is to move and with
    /// [`GameError::NoMovesAvailable`] when the board is full.
    pub fn play_advisor_move<B>(&self, backend: &mut B) -> Result<(Coord, GameState), GameError>
    where
        B: PlayerBackend + ?Sized,
    {
        let mut game = self.state.lock();
        if game.current_player() != Color::White {
            return Err(GameError::WrongTurn);
        }

        let coord = backend.next_move(&game).ok_or(GameError::NoMovesAvailable)?;
        game.place_stone(coord)?;
        Ok((coord, game.snapshot()))
    }
}
