mod angles;
mod config;
mod decode;
mod generators;

pub use angles::{feature_map, prob_to_angle, AngleError, FeatureMap};
pub use config::FeedConfig;
pub use decode::{bit_array, observed_state, DecodeError};
pub use generators::{PriceWalkGenerator, StateWalkGenerator};

pub fn module_ready() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::{module_ready, FeedConfig};

    #[test]
    fn feed_crate_bootstraps() {
        assert!(module_ready());
    }

    #[test]
    fn feed_config_defaults_describe_the_sim_walk() {
        let config = FeedConfig::default();

        assert_eq!(config.state_levels, 4);
        assert_eq!(config.start_price, 100.0);
        assert_eq!(config.max_price_step, 0.5);
        assert_eq!(config.initial_cash, 1_000.0);
        assert_eq!(config.decision_interval_ms, 50);
    }
}
