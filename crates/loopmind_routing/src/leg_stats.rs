use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// Travel summary of an ordered stop sequence.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegStats {
    pub distance_km: f64,
    pub duration_minutes: f64,

    /// Fine-grained travel path, in stop order
    pub geometry: Vec<Coordinate>,
}

impl LegStats {
    /// No travel: used for sequences with fewer than two stops.
    pub fn empty() -> Self {
        LegStats::default()
    }

    pub fn is_empty(&self) -> bool {
        self.geometry.is_empty() && self.distance_km == 0.0 && self.duration_minutes == 0.0
    }
}
