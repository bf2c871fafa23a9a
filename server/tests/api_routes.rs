// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};
use tengen_core::GameHandle;
use tengen_server::{routes, HealthManager};
use warp::http::StatusCode;
use warp::test::request;

fn setup(static_dir: &Path) -> (GameHandle, impl warp::Filter<Extract = (impl warp::Reply,), Error = std::convert::Infallible> + Clone) {
    let game = GameHandle::new(19);
    let health = Arc::new(HealthManager::new(game.clone()));
    let filter = routes(game.clone(), health, static_dir.to_path_buf());
    (game, filter)
}

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("response should be JSON")
}

#[tokio::test]
async fn state_reports_fresh_board() {
    let dir = tempfile::tempdir().unwrap();
    let (_, api) = setup(dir.path());

    let resp = request().method("GET").path("/api/state").reply(&api).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["content-type"], "application/json");

    let state = body_json(resp.body());
    assert_eq!(state["size"], 19);
    assert_eq!(state["currentPlayer"], 1);
    assert_eq!(state["board"].as_array().unwrap().len(), 19);
    assert_eq!(state["stats"]["blackMoves"], 0);
    assert!(state["stats"]["gameStartTime"].is_string());
}

#[tokio::test]
async fn move_then_repeat_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (game, api) = setup(dir.path());
    request().method("POST").path("/api/reset").json(&json!({"size": 9})).reply(&api).await;

    let resp = request()
        .method("POST")
        .path("/api/move")
        .json(&json!({"x": 4, "y": 4, "difficulty": "hard"}))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let state = body_json(resp.body());
    assert_eq!(state["board"][4][4], 1);
    assert_eq!(state["currentPlayer"], 2);
    assert_eq!(state["stats"]["blackMoves"], 1);
    assert_eq!(state["stats"]["moveTimes"].as_array().unwrap().len(), 1);

    let resp = request()
        .method("POST")
        .path("/api/move")
        .json(&json!({"x": 4, "y": 4}))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.body(), "Position already occupied");
    assert_eq!(game.snapshot().total_moves(), 1);
}

#[tokio::test]
async fn out_of_bounds_and_bad_json_are_bad_requests() {
    let dir = tempfile::tempdir().unwrap();
    let (game, api) = setup(dir.path());

    let resp = request()
        .method("POST")
        .path("/api/move")
        .json(&json!({"x": -1, "y": 0}))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.body(), "Invalid move position");

    let resp = request()
        .method("POST")
        .path("/api/move")
        .header("content-type", "application/json")
        .body("{not json")
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(game.snapshot().total_moves(), 0);
}

#[tokio::test]
async fn api_writes_require_post() {
    let dir = tempfile::tempdir().unwrap();
    let (_, api) = setup(dir.path());

    for path in ["/api/move", "/api/reset", "/api/ai-move"] {
        let resp = request().method("GET").path(path).reply(&api).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{path}");
    }
}

#[tokio::test]
async fn reset_coerces_size() {
    let dir = tempfile::tempdir().unwrap();
    let (_, api) = setup(dir.path());

    let cases: [(&str, u64); 5] = [
        (r#"{"size": 13}"#, 13),
        (r#"{"size": 9}"#, 9),
        (r#"{"size": 12}"#, 19),
        (r#"{}"#, 19),
        ("", 19),
    ];
    for (body, expected) in cases {
        let resp = request().method("POST").path("/api/reset").body(body).reply(&api).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let state = body_json(resp.body());
        assert_eq!(state["size"], expected, "body {body:?}");
        assert_eq!(state["stats"]["blackMoves"], 0);
    }
}

#[tokio::test]
async fn advisor_plays_white_only() {
    let dir = tempfile::tempdir().unwrap();
    let (_, api) = setup(dir.path());
    request().method("POST").path("/api/reset").json(&json!({"size": 9})).reply(&api).await;

    let resp = request()
        .method("POST")
        .path("/api/ai-move")
        .json(&json!({"difficulty": "hard"}))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.body(), "Not AI's turn");

    request().method("POST").path("/api/move").json(&json!({"x": 0, "y": 0})).reply(&api).await;

    let resp = request()
        .method("POST")
        .path("/api/ai-move")
        .json(&json!({"difficulty": "hard"}))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let state = body_json(resp.body());
    assert_eq!(state["board"][4][4], 2);
    assert_eq!(state["currentPlayer"], 1);
    assert_eq!(state["stats"]["whiteMoves"], 1);
    assert_eq!(state["stats"]["moveTimes"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn health_and_static_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("hello.txt"), "hi").unwrap();
    let (_, api) = setup(dir.path());

    let resp = request().method("GET").path("/healthz").reply(&api).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let health = body_json(resp.body());
    assert_eq!(health["status"], "Healthy");
    assert_eq!(health["boardSize"], 19);

    let resp = request().method("GET").path("/hello.txt").reply(&api).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.body(), "hi");

    let resp = request().method("GET").path("/missing.txt").reply(&api).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn oversized_bodies_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (game, api) = setup(dir.path());
    request().method("POST").path("/api/reset").json(&json!({"size": 9})).reply(&api).await;

    let padding = "x".repeat(64 * 1024);
    let resp = request()
        .method("POST")
        .path("/api/reset")
        .body(format!(r#"{{"size": 13, "padding": "{padding}"}}"#))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(game.snapshot().size(), 9);

    let resp = request()
        .method("POST")
        .path("/api/move")
        .body(format!(r#"{{"x": 1, "y": 1, "padding": "{padding}"}}"#))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(game.snapshot().total_moves(), 0);
}

#[tokio::test]
async fn move_body_is_read_as_json_whatever_the_content_type() {
    let dir = tempfile::tempdir().unwrap();
    let (game, api) = setup(dir.path());

    let resp = request()
        .method("POST")
        .path("/api/move")
        .header("content-type", "text/plain")
        .body(r#"{"x": 2, "y": 3}"#)
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp.body())["board"][3][2], 1);
    assert_eq!(game.snapshot().total_moves(), 1);
}

#[tokio::test]
async fn advisor_on_full_board_is_a_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let (game, api) = setup(dir.path());
    request().method("POST").path("/api/reset").json(&json!({"size": 9})).reply(&api).await;
    for y in 0..9 {
        for x in 0..9 {
            game.place_stone(x, y).unwrap();
        }
    }

    let resp = request()
        .method("POST")
        .path("/api/ai-move")
        .json(&json!({"difficulty": "hard"}))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.body(), "No moves available");
    assert_eq!(game.snapshot().total_moves(), 81);
}
