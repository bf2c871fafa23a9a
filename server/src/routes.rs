// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP routes
//!
//! | Path           | Method | Action                         |
//! |----------------|--------|--------------------------------|
//! | `/api/state`   | any    | current game state             |
//! | `/api/move`    | POST   | place a stone for the mover    |
//! | `/api/reset`   | POST   | start a new game               |
//! | `/api/ai-move` | POST   | let the advisor play White     |
//! | `/healthz`     | GET    | health report                  |
//! | everything else| GET    | static files                   |

use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;

use futures_util::{pin_mut, Stream, StreamExt};
use serde::de::DeserializeOwned;
use tengen_core::{Difficulty, GameHandle, HeuristicBot};
use tracing::{debug, info};
use uuid::Uuid;
use warp::http::StatusCode;
use warp::hyper::body::Buf;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

use crate::api::{error_reply, state_reply, AdvisorRequest, MoveRequest, ResetRequest};
use crate::health::{health_handler, HealthManager};

/// Largest request body accepted by the API
const BODY_LIMIT: usize = 16 * 1024;

/// Request body went past [`BODY_LIMIT`]
#[derive(Debug)]
struct BodyTooLarge;

impl warp::reject::Reject for BodyTooLarge {}

/// Request body could not be read or parsed
#[derive(Debug)]
struct InvalidBody(String);

impl warp::reject::Reject for InvalidBody {}

/// All routes, with request tracing and error recovery applied
pub fn routes(
    game: GameHandle,
    health: Arc<HealthManager>,
    static_dir: PathBuf,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let health_route = warp::path!("healthz")
        .and(warp::get())
        .and(warp::any().map(move || health.clone()))
        .and_then(health_handler);

    let static_files = warp::get().and(warp::fs::dir(static_dir));

    api(game)
        .or(health_route)
        .or(static_files)
        .with(warp::trace(|info| {
            tracing::info_span!(
                "request",
                method = %info.method(),
                path = %info.path(),
                id = %Uuid::new_v4().simple(),
            )
        }))
        .recover(handle_rejection)
}

/// The `/api` routes on their own
pub fn api(game: GameHandle) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone {
    let state = warp::path!("api" / "state")
        .and(with_game(game.clone()))
        .map(|game: GameHandle| state_reply(&game.snapshot()));

    let play = warp::path!("api" / "move")
        .and(warp::post())
        .and(json_body::<MoveRequest>())
        .and(with_game(game.clone()))
        .map(handle_move);

    // An empty or unreadable body resets to the default size
    let reset = warp::path!("api" / "reset")
        .and(warp::post())
        .and(capped_body())
        .and(with_game(game.clone()))
        .map(|body: Vec<u8>, game: GameHandle| {
            let request = ResetRequest::from_body(&body);
            state_reply(&game.reset(request.size))
        });

    let advisor = warp::path!("api" / "ai-move")
        .and(warp::post())
        .and(json_body::<AdvisorRequest>())
        .and(with_game(game))
        .map(handle_advisor_move);

    state.or(play).unify().or(reset).unify().or(advisor).unify()
}

fn with_game(game: GameHandle) -> impl Filter<Extract = (GameHandle,), Error = Infallible> + Clone {
    warp::any().map(move || game.clone())
}

/// Whole request body, rejected with [`BodyTooLarge`] past [`BODY_LIMIT`]
///
/// Works for chunked bodies and bodies without `Content-Length`.
fn capped_body() -> impl Filter<Extract = (Vec<u8>,), Error = Rejection> + Clone {
    warp::body::stream().and_then(read_capped)
}

/// JSON request body, whatever the declared `Content-Type`
fn json_body<T>() -> impl Filter<Extract = (T,), Error = Rejection> + Clone
where
    T: DeserializeOwned + Send + 'static,
{
    capped_body().and_then(|body: Vec<u8>| async move {
        serde_json::from_slice::<T>(&body)
            .map_err(|err| warp::reject::custom(InvalidBody(format!("Invalid request body: {err}"))))
    })
}

async fn read_capped<S, B>(body: S) -> Result<Vec<u8>, Rejection>
where
    S: Stream<Item = Result<B, warp::Error>>,
    B: Buf,
{
    pin_mut!(body);
    let mut bytes = Vec::new();
    while let Some(chunk) = body.next().await {
        let mut chunk = chunk.map_err(|err| warp::reject::custom(InvalidBody(err.to_string())))?;
        if bytes.len() + chunk.remaining() > BODY_LIMIT {
            return Err(warp::reject::custom(BodyTooLarge));
        }
        while chunk.has_remaining() {
            let part = chunk.chunk();
            let len = part.len();
            bytes.extend_from_slice(part);
            chunk.advance(len);
        }
    }
    Ok(bytes)
}

fn handle_move(request: MoveRequest, game: GameHandle) -> Response {
    match game.place_stone(request.x, request.y) {
        Ok(state) => state_reply(&state),
        Err(err) => {
            debug!(x = request.x, y = request.y, %err, "Move rejected");
            error_reply(&err)
        }
    }
}

fn handle_advisor_move(request: AdvisorRequest, game: GameHandle) -> Response {
    let difficulty = Difficulty::from(request.difficulty.as_str());
    let mut bot = HeuristicBot::new(difficulty);
    match game.play_advisor_move(&mut bot) {
        Ok((coord, state)) => {
            info!(
                x = coord.x,
                y = coord.y,
                %difficulty,
                "AI made move"
            );
            state_reply(&state)
        }
        Err(err) => {
            debug!(%err, "Advisor move rejected");
            error_reply(&err)
        }
    }
}

/// Map rejections to plain-text replies
///
/// Body errors are checked before method mismatches: a bad body on
/// `POST /api/move` is also rejected by the GET-only static route.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (code, message) = if let Some(InvalidBody(reason)) = err.find::<InvalidBody>() {
        (StatusCode::BAD_REQUEST, reason.clone())
    } else if err.find::<BodyTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Payload too large".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else {
        tracing::error!("Unhandled rejection: {:?}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
    };

    Ok(warp::reply::with_status(message, code))
}
