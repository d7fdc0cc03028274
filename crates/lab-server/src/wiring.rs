use api::state::EngineMode;
use axum::{routing::get, Router};

use crate::config::RunMode;

pub fn build_app(mode: RunMode) -> Router {
    debug_assert!(trade_core::module_ready());
    debug_assert!(state_feed::module_ready());
    debug_assert!(runtime::module_ready());
    debug_assert!(api::module_ready());

    api::app_with_mode(engine_mode(mode)).route("/health", get(healthcheck))
}

fn engine_mode(mode: RunMode) -> EngineMode {
    match mode {
        RunMode::Replay => EngineMode::Replay,
        RunMode::Sim => EngineMode::Sim,
    }
}

async fn healthcheck() -> &'static str {
    "ok"
}
