use loopmind_routing::coordinate::Coordinate;
use serde::Serialize;

use crate::{
    plan::route_stats::RouteStats,
    problem::location::Location,
    solver::route_assignment::RouteAssignment,
};

/// One truck's itinerary with its resolved travel path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    pub truck_id: usize,

    /// Stops, starting and ending at the depot
    pub path: Vec<Location>,

    pub geometry: Vec<Coordinate>,

    /// Display token, e.g. `#3b82f6`
    pub color: String,
}

impl RoutePlan {
    /// Depot, the assigned jobs in order, depot.
    pub fn stops(
        depot: &Location,
        jobs: &[Location],
        assignment: &RouteAssignment,
    ) -> Vec<Location> {
        let mut path = Vec::with_capacity(assignment.len() + 2);
        path.push(depot.clone());
        path.extend(assignment.job_indices.iter().map(|&job| jobs[job].clone()));
        path.push(depot.clone());
        path
    }

    /// Path entries that are not the depot.
    pub fn jobs(&self) -> impl Iterator<Item = &Location> {
        self.path.iter().filter(|location| !location.is_depot())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub stats: RouteStats,
    pub routes: Vec<RoutePlan>,
}
