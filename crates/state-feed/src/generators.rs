#[derive(Debug, Clone)]
pub struct PriceWalkGenerator {
    state: u64,
    price: f64,
    max_step: f64,
}

impl PriceWalkGenerator {
    pub fn new(seed: u64, start_price: f64, max_step: f64) -> Self {
        assert!(
            start_price.is_finite() && start_price > 0.0,
            "start_price must be finite and positive"
        );
        assert!(
            max_step.is_finite() && max_step >= 0.0,
            "max_step must be finite and non-negative"
        );

        Self {
            state: seed,
            price: start_price,
            max_step,
        }
    }

    pub fn next_price(&mut self) -> f64 {
        let unit = next_unit(&mut self.state);
        let delta = (unit * 2.0 - 1.0) * self.max_step;
        // Floor keeps the walk inside the engine's positive-price contract.
        self.price = (self.price + delta).max(f64::MIN_POSITIVE);
        self.price
    }
}

#[derive(Debug, Clone)]
pub struct StateWalkGenerator {
    state: u64,
    current: i64,
    levels: i64,
}

impl StateWalkGenerator {
    pub fn new(seed: u64, levels: u32) -> Self {
        assert!(levels > 0, "levels must be positive");

        Self {
            state: seed,
            current: 0,
            levels: i64::from(levels),
        }
    }

    /// Bounded random walk over `0..levels`: each tick moves the discrete
    /// state down, nowhere, or up by one.
    pub fn next_state(&mut self) -> i64 {
        let roll = next_u64(&mut self.state) % 3;
        let delta = roll as i64 - 1;
        self.current = (self.current + delta).clamp(0, self.levels - 1);
        self.current
    }
}

fn next_u64(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state
}

fn next_unit(state: &mut u64) -> f64 {
    let value = next_u64(state);
    (value as f64) / (u64::MAX as f64)
}

#[cfg(test)]
mod tests {
    use super::{PriceWalkGenerator, StateWalkGenerator};

    #[test]
    fn seeded_generators_are_deterministic() {
        let mut price_a = PriceWalkGenerator::new(42, 100.0, 0.5);
        let mut price_b = PriceWalkGenerator::new(42, 100.0, 0.5);

        let mut state_a = StateWalkGenerator::new(42, 4);
        let mut state_b = StateWalkGenerator::new(42, 4);

        let ticks_a: Vec<(f64, i64)> = (0..10)
            .map(|_| (price_a.next_price(), state_a.next_state()))
            .collect();

        let ticks_b: Vec<(f64, i64)> = (0..10)
            .map(|_| (price_b.next_price(), state_b.next_state()))
            .collect();

        assert_eq!(ticks_a, ticks_b);
    }

    #[test]
    fn price_walk_never_reaches_zero() {
        let mut price = PriceWalkGenerator::new(7, 0.25, 10.0);

        for _ in 0..1_000 {
            assert!(price.next_price() > 0.0);
        }
    }

    #[test]
    fn state_walk_stays_within_levels() {
        let mut walk = StateWalkGenerator::new(99, 3);

        for _ in 0..1_000 {
            let state = walk.next_state();
            assert!((0..3).contains(&state));
        }
    }

    #[test]
    fn state_walk_moves_at_most_one_level_per_tick() {
        let mut walk = StateWalkGenerator::new(5, 8);
        let mut previous = 0;

        for _ in 0..1_000 {
            let state = walk.next_state();
            assert!((state - previous).abs() <= 1);
            previous = state;
        }
    }

    #[test]
    #[should_panic(expected = "start_price must be finite and positive")]
    fn price_walk_rejects_invalid_start_price() {
        let _ = PriceWalkGenerator::new(1, f64::NAN, 1.0);
    }

    #[test]
    #[should_panic(expected = "max_step must be finite and non-negative")]
    fn price_walk_rejects_invalid_max_step() {
        let _ = PriceWalkGenerator::new(1, 100.0, -1.0);
    }

    #[test]
    #[should_panic(expected = "levels must be positive")]
    fn state_walk_rejects_zero_levels() {
        let _ = StateWalkGenerator::new(1, 0);
    }
}
