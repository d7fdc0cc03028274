#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedConfig {
    pub state_levels: u32,
    pub start_price: f64,
    pub max_price_step: f64,
    pub initial_cash: f64,
    pub decision_interval_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            state_levels: 4,
            start_price: 100.0,
            max_price_step: 0.5,
            initial_cash: 1_000.0,
            decision_interval_ms: 50,
        }
    }
}
