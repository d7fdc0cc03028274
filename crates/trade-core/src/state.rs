use serde::{Deserialize, Serialize};

/// Last observed discrete state, with an explicit pre-first-observation
/// sentinel that orders below every real state value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateMark {
    Bootstrap,
    Observed(i64),
}

impl StateMark {
    pub fn observed(self) -> Option<i64> {
        match self {
            Self::Bootstrap => None,
            Self::Observed(state) => Some(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::StateMark;

    #[test]
    fn bootstrap_orders_below_every_observed_state() {
        assert!(StateMark::Bootstrap < StateMark::Observed(i64::MIN));
        assert!(StateMark::Bootstrap < StateMark::Observed(0));
        assert!(StateMark::Bootstrap < StateMark::Observed(i64::MAX));
    }

    #[test]
    fn observed_states_order_by_value() {
        assert!(StateMark::Observed(1) < StateMark::Observed(2));
        assert!(StateMark::Observed(-3) < StateMark::Observed(0));
        assert_eq!(StateMark::Observed(5), StateMark::Observed(5));
    }

    #[test]
    fn state_mark_serializes_with_exact_shape() {
        assert_eq!(
            serde_json::to_value(StateMark::Bootstrap).unwrap(),
            json!("bootstrap")
        );
        assert_eq!(
            serde_json::to_value(StateMark::Observed(3)).unwrap(),
            json!({ "observed": 3 })
        );
    }

    #[test]
    fn state_mark_deserializes_and_round_trips() {
        let json = json!({ "observed": -2 });

        let mark: StateMark = serde_json::from_value(json.clone()).unwrap();

        assert_eq!(mark, StateMark::Observed(-2));
        assert_eq!(serde_json::to_value(mark).unwrap(), json);
    }
}
