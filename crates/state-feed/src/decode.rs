use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    EmptyBitstring,
    InvalidBitstring,
    EmptyDistribution,
    InvalidProbability,
    StateOutOfRange,
}

/// Expands a measured bitstring into per-qubit values, reversed so that
/// index `i` holds qubit `i` (the register prints most-significant first).
pub fn bit_array(bitstring: &str) -> Result<Vec<u8>, DecodeError> {
    if bitstring.is_empty() {
        return Err(DecodeError::EmptyBitstring);
    }

    bitstring.chars().rev().map(bit_value).collect()
}

/// Picks the modal outcome of a measurement distribution and reads it as
/// the observed discrete state.
///
/// Ties on probability resolve toward the lexicographically greatest
/// bitstring, and the winning bitstring's digits are read as a decimal
/// integer ("101" becomes 101). States are only ever compared for order,
/// so the mapping just has to stay fixed.
pub fn observed_state(distribution: &HashMap<String, f64>) -> Result<i64, DecodeError> {
    let mut winner: Option<(&str, f64)> = None;

    for (bitstring, &prob) in distribution {
        if bitstring.is_empty() {
            return Err(DecodeError::EmptyBitstring);
        }
        if bitstring.chars().any(|ch| ch != '0' && ch != '1') {
            return Err(DecodeError::InvalidBitstring);
        }
        if !prob.is_finite() || prob < 0.0 {
            return Err(DecodeError::InvalidProbability);
        }

        winner = match winner {
            None => Some((bitstring.as_str(), prob)),
            Some((best_key, best_prob)) => {
                if prob > best_prob || (prob == best_prob && bitstring.as_str() > best_key) {
                    Some((bitstring.as_str(), prob))
                } else {
                    Some((best_key, best_prob))
                }
            }
        };
    }

    let (bitstring, _) = winner.ok_or(DecodeError::EmptyDistribution)?;
    bitstring
        .parse::<i64>()
        .map_err(|_| DecodeError::StateOutOfRange)
}

fn bit_value(ch: char) -> Result<u8, DecodeError> {
    match ch {
        '0' => Ok(0),
        '1' => Ok(1),
        _ => Err(DecodeError::InvalidBitstring),
    }
}
