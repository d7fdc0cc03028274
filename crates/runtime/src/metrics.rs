#[derive(Debug, Clone, PartialEq)]
pub struct EquitySummary {
    pub count: usize,
    pub initial_value: f64,
    pub final_value: f64,
    pub total_return_pct: f64,
    pub max_drawdown_pct: f64,
}

#[derive(Debug, Default, Clone)]
pub struct EquitySeriesMetrics {
    values: Vec<f64>,
}

impl EquitySeriesMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_value(&mut self, portfolio_value: f64) {
        self.values.push(portfolio_value);
    }

    pub fn summary(&self) -> Option<EquitySummary> {
        let initial_value = *self.values.first()?;
        let final_value = *self.values.last()?;

        let total_return_pct = if initial_value > 0.0 {
            (final_value - initial_value) / initial_value * 100.0
        } else {
            0.0
        };

        let mut peak = f64::MIN;
        let mut max_drawdown_pct = 0.0_f64;
        for &value in &self.values {
            peak = peak.max(value);
            if peak > 0.0 {
                let drawdown_pct = (peak - value) / peak * 100.0;
                max_drawdown_pct = max_drawdown_pct.max(drawdown_pct);
            }
        }

        Some(EquitySummary {
            count: self.values.len(),
            initial_value,
            final_value,
            total_return_pct,
            max_drawdown_pct,
        })
    }
}
