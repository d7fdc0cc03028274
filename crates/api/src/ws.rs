use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::Response,
};
use serde::Deserialize;
use tokio::sync::broadcast::error::RecvError;

use crate::state::{ApiEvent, AppState};

#[derive(Debug, Deserialize)]
pub(crate) struct EventStreamParams {
    /// Session the client is watching; echoed back in the greeting.
    session: Option<u64>,
}

pub(crate) async fn events_socket(
    ws: WebSocketUpgrade,
    Query(params): Query<EventStreamParams>,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(move |socket| stream_events(socket, state, params.session))
}

async fn stream_events(mut socket: WebSocket, state: AppState, session_id: Option<u64>) {
    // Subscribe before greeting so no event published after the greeting
    // was received can be missed.
    let mut events = state.subscribe_events();

    if forward(&mut socket, &ApiEvent::connected(session_id))
        .await
        .is_err()
    {
        return;
    }

    loop {
        tokio::select! {
            inbound = socket.recv() => match inbound {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => return,
                Some(Ok(_)) => {}
            },
            event = events.recv() => match event {
                Ok(event) => {
                    if forward(&mut socket, &event).await.is_err() {
                        return;
                    }
                }
                // A lagged receiver resumes from the oldest retained event.
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => return,
            },
        }
    }
}

async fn forward(socket: &mut WebSocket, event: &ApiEvent) -> Result<(), ()> {
    let payload = serde_json::to_string(event).map_err(|_| ())?;
    socket.send(Message::Text(payload)).await.map_err(|_| ())
}
