use trade_core::{step, PortfolioLog, TradeError};

use crate::events::{RuntimeEvent, RuntimeStage};

/// Owns the head of the portfolio-log chain and a tick counter. Each
/// successful `step_once` appends one link to the chain; a failed step
/// leaves both the chain and the counter untouched.
pub struct SessionEngine {
    log: PortfolioLog,
    tick: u64,
}

impl SessionEngine {
    pub fn new(bootstrap: PortfolioLog) -> Self {
        Self {
            log: bootstrap,
            tick: 0,
        }
    }

    pub fn current_log(&self) -> PortfolioLog {
        self.log
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub async fn step_once(
        &mut self,
        state: i64,
        price: f64,
    ) -> Result<Vec<RuntimeEvent>, TradeError> {
        tokio::task::yield_now().await;

        let next = step(state, price, &self.log)?;
        self.tick += 1;
        self.log = next;

        Ok(vec![
            RuntimeEvent::new(self.tick, RuntimeStage::TickStarted),
            RuntimeEvent::new(self.tick, RuntimeStage::ObservationApplied),
            RuntimeEvent::new(self.tick, RuntimeStage::SignalComputed),
            RuntimeEvent::new(self.tick, RuntimeStage::PortfolioUpdated),
        ])
    }
}

#[cfg(test)]
mod tests {
    use trade_core::{PortfolioLog, Signal, TradeError};

    use super::SessionEngine;

    #[tokio::test(flavor = "current_thread")]
    async fn step_once_advances_the_log_chain() {
        let bootstrap = PortfolioLog::bootstrap(1_000.0).unwrap();
        let mut engine = SessionEngine::new(bootstrap);

        engine.step_once(1, 100.0).await.unwrap();

        assert_eq!(engine.tick(), 1);
        assert_eq!(engine.current_log().signal, Signal::Buy);
        assert_eq!(engine.current_log().position, 10.0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn failed_step_leaves_engine_untouched() {
        let bootstrap = PortfolioLog::bootstrap(1_000.0).unwrap();
        let mut engine = SessionEngine::new(bootstrap);

        let err = engine.step_once(1, -1.0).await.unwrap_err();

        assert_eq!(err, TradeError::InvalidPrice);
        assert_eq!(engine.tick(), 0);
        assert_eq!(engine.current_log(), bootstrap);
    }
}
