use serde::Serialize;

use crate::plan::route_stats::RouteStats;

/// Naive minus optimized. Negative values mean the optimized plan is worse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Savings {
    pub distance_saved_km: f64,
    pub time_saved_minutes: f64,
    pub money_saved: f64,
    pub percent_improvement: f64,
}

impl Savings {
    pub fn compare(naive: &RouteStats, optimized: &RouteStats) -> Self {
        let money_saved = naive.estimated_fuel_cost() - optimized.estimated_fuel_cost();

        let percent_improvement = if naive.estimated_fuel_cost() > 0.0 {
            money_saved / naive.estimated_fuel_cost() * 100.0
        } else {
            0.0
        };

        Savings {
            distance_saved_km: naive.total_distance_km() - optimized.total_distance_km(),
            time_saved_minutes: naive.total_time_minutes() - optimized.total_time_minutes(),
            money_saved,
            percent_improvement,
        }
    }
}
