pub mod routes;
pub mod state;

mod ws;

use axum::Router;

pub fn module_ready() -> bool {
    true
}

pub fn app() -> Router {
    routes::router(state::AppState::new())
}

pub fn app_with_mode(mode: state::EngineMode) -> Router {
    routes::router(state::AppState::with_engine_mode(mode))
}
