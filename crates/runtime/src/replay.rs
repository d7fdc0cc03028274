use serde::{Deserialize, Serialize};
use trade_core::{step, PortfolioLog, TradeError};

use crate::logging::{RunLogEvent, RunLogEventKind, RunLogWriter};
use crate::metrics::{EquitySeriesMetrics, EquitySummary};

/// One externally supplied `(state, price)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub state: i64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplayReport {
    pub logs: Vec<PortfolioLog>,
    pub summary: Option<EquitySummary>,
}

/// Folds the trading step over the observation sequence, starting from the
/// caller's bootstrap log. Sequencing is purely the data-dependency chain:
/// log *n* becomes the previous log of observation *n + 1*. The first
/// failing observation aborts the replay.
pub fn run_replay(
    bootstrap: PortfolioLog,
    observations: &[Observation],
    run_log: &mut dyn RunLogWriter,
) -> Result<ReplayReport, TradeError> {
    let mut logs = Vec::with_capacity(observations.len());
    let mut metrics = EquitySeriesMetrics::new();
    let mut current = bootstrap;

    for (index, observation) in observations.iter().enumerate() {
        let tick = index as u64 + 1;
        run_log.write(RunLogEvent::new(tick, RunLogEventKind::TickStarted, None));

        current = step(observation.state, observation.price, &current)?;
        run_log.write(RunLogEvent::new(
            tick,
            RunLogEventKind::ObservationApplied,
            None,
        ));
        run_log.write(RunLogEvent::new(
            tick,
            RunLogEventKind::SignalComputed,
            Some(current.signal),
        ));

        metrics.record_value(current.portfolio_value);
        logs.push(current);
        run_log.write(RunLogEvent::new(
            tick,
            RunLogEventKind::PortfolioUpdated,
            None,
        ));
    }

    Ok(ReplayReport {
        logs,
        summary: metrics.summary(),
    })
}
