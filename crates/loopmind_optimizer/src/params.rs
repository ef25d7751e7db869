use std::time::Duration;

use loopmind_routing::{as_the_crow_flies::AsTheCrowFlies, kmh::Kmh};

pub const DEFAULT_COST_PER_KM: f64 = 1.5;
pub const DEFAULT_NAIVE_COLOR: &str = "#ef4444";
pub const DEFAULT_COLOR_PALETTE: [&str; 5] = [
    "#3b82f6", // blue
    "#10b981", // emerald
    "#f59e0b", // amber
    "#8b5cf6", // violet
    "#ec4899", // pink
];

/// Upper bound on simultaneous routing requests for one plan.
pub const MAX_CONCURRENT_REQUESTS: usize = 10;

#[derive(Clone, Debug)]
pub struct OptimizerParams {
    /// Cycled through by the optimized plan's routes
    pub color_palette: Vec<String>,

    /// Every naive route gets this color, or the palette when `None`
    pub naive_color: Option<String>,

    pub cost_per_km: f64,

    /// Speed assumed by the straight-line fallback
    pub fallback_speed: Kmh,

    /// Defaults to the number of trucks, always capped by
    /// [`MAX_CONCURRENT_REQUESTS`]
    pub max_concurrent_requests: Option<usize>,

    /// Per routing request
    pub request_timeout: Duration,
}

impl OptimizerParams {
    pub fn fallback(&self) -> AsTheCrowFlies {
        AsTheCrowFlies::new(self.fallback_speed)
    }

    pub fn concurrency(&self, truck_count: usize) -> usize {
        self.max_concurrent_requests
            .unwrap_or(truck_count)
            .clamp(1, MAX_CONCURRENT_REQUESTS)
    }
}

impl Default for OptimizerParams {
    fn default() -> Self {
        OptimizerParams {
            color_palette: Vec::from(DEFAULT_COLOR_PALETTE.map(String::from)),
            naive_color: Some(DEFAULT_NAIVE_COLOR.to_owned()),
            cost_per_km: DEFAULT_COST_PER_KM,
            fallback_speed: AsTheCrowFlies::DEFAULT_SPEED,
            max_concurrent_requests: None,
            request_timeout: Duration::from_secs(10),
        }
    }
}
