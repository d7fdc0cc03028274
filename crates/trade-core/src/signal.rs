use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::state::StateMark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    /// Conventional integer encoding: +1 buy, -1 sell, 0 hold.
    pub fn as_int(self) -> i8 {
        match self {
            Self::Buy => 1,
            Self::Sell => -1,
            Self::Hold => 0,
        }
    }
}

pub fn signal_for_transition(state: i64, prev_state: StateMark) -> Signal {
    match StateMark::Observed(state).cmp(&prev_state) {
        Ordering::Greater => Signal::Buy,
        Ordering::Less => Signal::Sell,
        Ordering::Equal => Signal::Hold,
    }
}
