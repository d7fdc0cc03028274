use std::fmt;

use runtime::replay::Observation;
use serde::Deserialize;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseObservationError {
    InvalidJson,
    InvalidTimestamp,
    InvalidPrice,
    OutOfOrderTimestamp,
}

impl fmt::Display for ParseObservationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson => write!(f, "observation payload is not valid JSON"),
            Self::InvalidTimestamp => {
                write!(f, "observation timestamp is not a valid RFC 3339 value")
            }
            Self::InvalidPrice => write!(f, "observation price must be finite and positive"),
            Self::OutOfOrderTimestamp => {
                write!(f, "observation timestamps must be non-decreasing")
            }
        }
    }
}

impl std::error::Error for ParseObservationError {}

#[derive(Debug, Deserialize)]
struct ObservationPayload {
    ts: String,
    state: i64,
    price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedObservation {
    pub ts: OffsetDateTime,
    pub observation: Observation,
}

pub fn parse_observation_payload(payload: &str) -> Result<TimedObservation, ParseObservationError> {
    let payload: ObservationPayload =
        serde_json::from_str(payload).map_err(|_| ParseObservationError::InvalidJson)?;

    let ts = OffsetDateTime::parse(&payload.ts, &Rfc3339)
        .map_err(|_| ParseObservationError::InvalidTimestamp)?;
    if !payload.price.is_finite() || payload.price <= 0.0 {
        return Err(ParseObservationError::InvalidPrice);
    }

    Ok(TimedObservation {
        ts,
        observation: Observation {
            state: payload.state,
            price: payload.price,
        },
    })
}

/// Parses one JSON observation per line, skipping blank lines. Timestamps
/// must be non-decreasing: the replay chain is strictly sequential.
pub fn parse_observation_log(raw: &str) -> Result<Vec<TimedObservation>, ParseObservationError> {
    let mut parsed: Vec<TimedObservation> = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let timed = parse_observation_payload(line)?;
        if let Some(previous) = parsed.last() {
            if timed.ts < previous.ts {
                return Err(ParseObservationError::OutOfOrderTimestamp);
            }
        }
        parsed.push(timed);
    }

    Ok(parsed)
}
