// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health check endpoint

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tengen_core::GameHandle;

/// Overall service status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    /// Serving requests, moves can still be played
    Healthy,
    /// Serving requests, but the board is full until the next reset
    Degraded,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: HealthStatus,
    /// RFC 3339 time of the check
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub board_size: u8,
    pub moves_played: u32,
}

/// Health check manager
pub struct HealthManager {
    start_time: Instant,
    game: GameHandle,
}

impl HealthManager {
    pub fn new(game: GameHandle) -> Self {
        Self {
            start_time: Instant::now(),
            game,
        }
    }

    /// Perform health check
    pub fn check_health(&self) -> HealthReport {
        let (board_size, moves_played, full) =
            self.game.read(|g| (g.size(), g.total_moves(), g.board().is_full()));

        HealthReport {
            status: if full { HealthStatus::Degraded } else { HealthStatus::Healthy },
            timestamp: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            board_size,
            moves_played,
        }
    }
}

/// HTTP health check endpoint handler
pub async fn health_handler(
    health_manager: Arc<HealthManager>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let health = health_manager.check_health();
    Ok(warp::reply::with_status(
        warp::reply::json(&health),
        warp::http::StatusCode::OK,
    ))
}
