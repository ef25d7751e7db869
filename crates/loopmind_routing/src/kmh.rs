use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const MINUTES_PER_HOUR: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize, JsonSchema)]
pub struct Kmh(f64);

impl Kmh {
    pub const fn new(value: f64) -> Self {
        Kmh(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Minutes needed to drive `distance_km` at this speed.
    pub fn minutes_for(&self, distance_km: f64) -> f64 {
        distance_km * (MINUTES_PER_HOUR / self.0)
    }
}
