pub mod portfolio;
pub mod signal;
pub mod state;

pub use portfolio::{step, PortfolioLog, TradeError};
pub use signal::{signal_for_transition, Signal};
pub use state::StateMark;

pub fn module_ready() -> bool {
    true
}
