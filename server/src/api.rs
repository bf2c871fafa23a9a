// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request bodies and reply helpers for the game API

use serde::Deserialize;
use tengen_core::{GameError, GameState, DEFAULT_BOARD_SIZE};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

/// Body of `POST /api/move`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MoveRequest {
    pub x: i64,
    pub y: i64,
    /// Accepted for symmetry with the advisor request, not used
    pub difficulty: Option<String>,
}

/// Body of `POST /api/reset`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResetRequest {
    pub size: i64,
}

impl Default for ResetRequest {
    fn default() -> Self {
        Self {
            size: i64::from(DEFAULT_BOARD_SIZE),
        }
    }
}

impl ResetRequest {
    /// Parse a reset body; anything unreadable asks for the default board
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Body of `POST /api/ai-move`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdvisorRequest {
    pub difficulty: String,
}

/// Full game state as JSON
pub fn state_reply(state: &GameState) -> Response {
    warp::reply::json(state).into_response()
}

/// Plain-text `400 Bad Request` carrying the error message
pub fn error_reply(err: &GameError) -> Response {
    warp::reply::with_status(err.to_string(), StatusCode::BAD_REQUEST).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_body_falls_back_to_default_size() {
        assert_eq!(ResetRequest::from_body(b"").size, 19);
        assert_eq!(ResetRequest::from_body(b"not json").size, 19);
        assert_eq!(ResetRequest::from_body(b"{}").size, 19);
        assert_eq!(ResetRequest::from_body(br#"{"size": 9}"#).size, 9);
        assert_eq!(ResetRequest::from_body(br#"{"size": "nine"}"#).size, 19);
    }

    #[test]
    fn move_body_ignores_difficulty() {
        let req: MoveRequest = serde_json::from_str(r#"{"x": 3, "y": -1, "difficulty": "hard"}"#).unwrap();
        assert_eq!((req.x, req.y), (3, -1));

        let req: MoveRequest = serde_json::from_str("{}").unwrap();
        assert_eq!((req.x, req.y), (0, 0));
    }

    #[test]
    fn error_replies_are_bad_requests() {
        let resp = error_reply(&GameError::CellOccupied);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
