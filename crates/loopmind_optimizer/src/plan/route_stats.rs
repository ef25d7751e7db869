use serde::Serialize;

/// Plan level travel totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStats {
    total_distance_km: f64,
    total_time_minutes: f64,
    estimated_fuel_cost: f64,
}

impl RouteStats {
    /// The fuel cost is derived once from the total distance.
    pub fn from_totals(total_distance_km: f64, total_time_minutes: f64, cost_per_km: f64) -> Self {
        RouteStats {
            total_distance_km,
            total_time_minutes,
            estimated_fuel_cost: total_distance_km * cost_per_km,
        }
    }

    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    pub fn total_time_minutes(&self) -> f64 {
        self.total_time_minutes
    }

    pub fn estimated_fuel_cost(&self) -> f64 {
        self.estimated_fuel_cost
    }
}
