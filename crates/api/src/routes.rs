use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json,
    Router,
};
use serde::Serialize;

use crate::{state::AppState, ws};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sessions", post(start_session))
        .route("/status", get(engine_status))
        .route("/ws/events", get(ws::events_socket))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct StartSessionResponse {
    session_id: u64,
}

async fn start_session(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let session_id = state
        .start_session()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let location = format!("/sessions/{session_id}");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(StartSessionResponse { session_id }),
    ))
}

async fn engine_status(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.engine_status())
}
