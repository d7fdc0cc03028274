use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleError {
    InvalidProbability,
}

/// Rotation angle that prepares a qubit measuring |1> with probability
/// `prob`: `2 * asin(sqrt(prob))`.
pub fn prob_to_angle(prob: f64) -> Result<f64, AngleError> {
    if !prob.is_finite() || !(0.0..=1.0).contains(&prob) {
        return Err(AngleError::InvalidProbability);
    }

    Ok(2.0 * prob.sqrt().asin())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureMap {
    Default,
    OnAxis,
    Shift,
}

impl FeatureMap {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "default" => Some(Self::Default),
            "on-axis" => Some(Self::OnAxis),
            "shift" => Some(Self::Shift),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::OnAxis => "on-axis",
            Self::Shift => "shift",
        }
    }
}

/// Maps a raw feature angle onto the encoder input angle.
pub fn feature_map(x: f64, method: FeatureMap) -> f64 {
    match method {
        FeatureMap::Default => x,
        // Snaps to the nearest pole: anything past the equator becomes |1>.
        FeatureMap::OnAxis => {
            if x > FRAC_PI_2 {
                PI
            } else {
                0.0
            }
        }
        // Pushes angles away from the equator, widening the margin around it.
        FeatureMap::Shift => {
            if x > FRAC_PI_2 {
                x + FRAC_PI_4 + (x - FRAC_PI_2)
            } else if x < FRAC_PI_2 {
                x - FRAC_PI_4 - (FRAC_PI_2 - x)
            } else {
                x
            }
        }
    }
}
