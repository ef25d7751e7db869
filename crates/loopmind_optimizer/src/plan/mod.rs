pub mod aggregator;
pub mod route_plan;
pub mod route_stats;
pub mod savings;
