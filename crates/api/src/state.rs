use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use tokio::sync::broadcast;
use trade_core::Signal;

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngineMode {
    Replay,
    Sim,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EngineStatusResponse {
    pub mode: EngineMode,
    pub sessions_started: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StartSessionError {
    SessionIdOverflow,
}

#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum ApiEvent {
    Connected {
        session_id: Option<u64>,
    },
    SessionStarted {
        session_id: u64,
    },
    SignalEmitted {
        tick: u64,
        state: i64,
        signal: Signal,
        price: f64,
    },
    PortfolioUpdated {
        tick: u64,
        cash: f64,
        position: f64,
        portfolio_value: f64,
    },
}

impl ApiEvent {
    pub fn connected(session_id: Option<u64>) -> Self {
        Self::Connected { session_id }
    }

    pub fn session_started(session_id: u64) -> Self {
        Self::SessionStarted { session_id }
    }

    pub fn signal_emitted(tick: u64, state: i64, signal: Signal, price: f64) -> Self {
        Self::SignalEmitted {
            tick,
            state,
            signal,
            price,
        }
    }

    pub fn portfolio_updated(tick: u64, cash: f64, position: f64, portfolio_value: f64) -> Self {
        Self::PortfolioUpdated {
            tick,
            cash,
            position,
            portfolio_value,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    next_session_id: Arc<AtomicU64>,
    events_tx: broadcast::Sender<ApiEvent>,
    engine_mode: EngineMode,
}

impl Default for AppState {
    fn default() -> Self {
        let (events_tx, _) = broadcast::channel(256);
        Self {
            next_session_id: Arc::new(AtomicU64::new(0)),
            events_tx,
            engine_mode: EngineMode::Replay,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine_mode(engine_mode: EngineMode) -> Self {
        let (events_tx, _) = broadcast::channel(256);
        Self {
            next_session_id: Arc::new(AtomicU64::new(0)),
            events_tx,
            engine_mode,
        }
    }

    pub fn start_session(&self) -> Result<u64, StartSessionError> {
        let previous = self
            .next_session_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                current.checked_add(1)
            })
            .map_err(|_| StartSessionError::SessionIdOverflow)?;

        Ok(previous + 1)
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ApiEvent> {
        self.events_tx.subscribe()
    }

    pub fn publish_event(
        &self,
        event: ApiEvent,
    ) -> Result<usize, broadcast::error::SendError<ApiEvent>> {
        self.events_tx.send(event)
    }

    pub fn engine_status(&self) -> EngineStatusResponse {
        EngineStatusResponse {
            mode: self.engine_mode,
            sessions_started: self.next_session_id.load(Ordering::Relaxed),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_next_session_id_for_test(next_session_id: u64) -> Self {
        let (events_tx, _) = broadcast::channel(256);
        Self {
            next_session_id: Arc::new(AtomicU64::new(next_session_id)),
            events_tx,
            engine_mode: EngineMode::Replay,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use trade_core::Signal;

    use super::{ApiEvent, AppState, EngineMode};

    #[test]
    fn start_session_returns_overflow_error_at_u64_max() {
        let state = AppState::with_next_session_id_for_test(u64::MAX);

        assert!(state.start_session().is_err());
    }

    #[test]
    fn session_ids_are_sequential_from_one() {
        let state = AppState::new();

        assert_eq!(state.start_session().unwrap(), 1);
        assert_eq!(state.start_session().unwrap(), 2);
    }

    #[test]
    fn engine_status_returns_configured_mode() {
        let state = AppState::with_engine_mode(EngineMode::Sim);

        assert_eq!(state.engine_status().mode, EngineMode::Sim);
    }

    #[test]
    fn engine_status_counts_started_sessions() {
        let state = AppState::new();
        state.start_session().unwrap();
        state.start_session().unwrap();

        assert_eq!(state.engine_status().sessions_started, 2);
    }

    #[test]
    fn signal_event_serializes_with_exact_payload_shape() {
        let event = ApiEvent::signal_emitted(3, 2, Signal::Buy, 101.5);
        let json = serde_json::to_value(event).unwrap();

        assert_eq!(
            json,
            json!({
                "event_type": "signal_emitted",
                "tick": 3,
                "state": 2,
                "signal": "buy",
                "price": 101.5,
            })
        );
    }

    #[test]
    fn connected_event_serializes_with_null_session() {
        let json = serde_json::to_value(ApiEvent::connected(None)).unwrap();

        assert_eq!(
            json,
            json!({ "event_type": "connected", "session_id": null })
        );
    }

    #[test]
    fn connected_event_echoes_the_watched_session() {
        let json = serde_json::to_value(ApiEvent::connected(Some(7))).unwrap();

        assert_eq!(json, json!({ "event_type": "connected", "session_id": 7 }));
    }
}
