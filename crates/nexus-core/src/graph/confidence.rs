use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;
use ts_rs::TS;

/// Confidence score clamped to [0.0, 1.0].
/// Shared by nodes and edges; every mutation goes through [`Confidence::new`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Confidence(f64);

impl Confidence {
    /// Create a new Confidence, clamping to [0.0, 1.0]. NaN becomes 0.0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Average with a verdict score.
    pub fn blend(self, score: f64) -> Self {
        Self::new((self.0 + score) / 2.0)
    }

    /// Whether a raw value already lies in range.
    pub fn in_range(value: f64) -> bool {
        (0.0..=1.0).contains(&value)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

impl Mul<f64> for Confidence {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}
