//! Bounded hunger value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hunger on a 0 (full) to 10 (starving) scale.
///
/// Every constructor and mutation clamps into `[MIN, MAX]`, so a
/// `HungerLevel` can never hold an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct HungerLevel(f64);

impl HungerLevel {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 10.0;
    pub const INITIAL: f64 = 5.0;

    /// Clamp `value` into range. NaN is treated as `MIN`.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::MIN);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn decreased_by(self, amount: f64) -> Self {
        Self::new(self.0 - amount)
    }

    pub fn increased_by(self, amount: f64) -> Self {
        Self::new(self.0 + amount)
    }

    /// Strictly greater than `threshold`.
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.0 > threshold
    }
}

impl Default for HungerLevel {
    fn default() -> Self {
        Self(Self::INITIAL)
    }
}

impl fmt::Display for HungerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for HungerLevel {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<HungerLevel> for f64 {
    fn from(level: HungerLevel) -> f64 {
        level.0
    }
}
