use std::collections::HashSet;

use loopmind_routing::{
    osrm_client::{OsrmRouteClient, OsrmRouteClientParams},
    route_provider::RouteProvider,
    route_resolver::RouteResolver,
    routing_error::RoutingError,
};
use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    error::OptimizeError,
    params::OptimizerParams,
    plan::{
        aggregator::{PlanAggregator, RouteColors},
        route_plan::Plan,
        savings::Savings,
    },
    problem::location::{Location, LocationType},
    solver::{naive::build_naive, optimized::build_optimized},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    pub naive: Plan,
    pub optimized: Plan,
    pub savings: Savings,
}

/// Builds the naive and the optimized plan for a depot and its jobs, resolves
/// both through the routing provider and compares them.
pub struct Optimizer<R> {
    resolver: RouteResolver<R>,
    params: OptimizerParams,
}

impl Optimizer<OsrmRouteClient> {
    pub fn with_osrm(
        client_params: OsrmRouteClientParams,
        params: OptimizerParams,
    ) -> Result<Self, RoutingError> {
        let client = OsrmRouteClient::new(client_params)?;
        Ok(Self::new(client, params))
    }

    /// Straight-line estimates only, no network access.
    pub fn offline(params: OptimizerParams) -> Self {
        Optimizer {
            resolver: RouteResolver::offline(params.fallback()),
            params,
        }
    }
}

impl<R> Optimizer<R>
where
    R: RouteProvider,
{
    pub fn new(primary: R, params: OptimizerParams) -> Self {
        let resolver =
            RouteResolver::new(primary, params.fallback()).with_timeout(params.request_timeout);

        Optimizer { resolver, params }
    }

    pub fn params(&self) -> &OptimizerParams {
        &self.params
    }

    pub fn resolver(&self) -> &RouteResolver<R> {
        &self.resolver
    }

    /// Takes a mixed list holding exactly one depot.
    pub async fn optimize_locations(
        &self,
        locations: &[Location],
        truck_count: usize,
    ) -> Result<OptimizationResult, OptimizeError> {
        let (depot, jobs) = split_locations(locations)?;
        self.optimize(&depot, &jobs, truck_count).await
    }

    #[instrument(skip_all, fields(jobs = jobs.len(), trucks = truck_count))]
    pub async fn optimize(
        &self,
        depot: &Location,
        jobs: &[Location],
        truck_count: usize,
    ) -> Result<OptimizationResult, OptimizeError> {
        validate_input(depot, jobs, truck_count)?;

        let naive_assignments = build_naive(jobs.len(), truck_count);
        let optimized_assignments = build_optimized(depot, jobs, truck_count);

        let aggregator = PlanAggregator::new(
            &self.resolver,
            self.params.cost_per_km,
            self.params.concurrency(truck_count),
        );

        let naive_colors = match &self.params.naive_color {
            Some(color) => RouteColors::Fixed(color),
            None => RouteColors::Palette(&self.params.color_palette),
        };

        let (naive, optimized) = tokio::join!(
            aggregator.aggregate(depot, jobs, &naive_assignments, naive_colors),
            aggregator.aggregate(
                depot,
                jobs,
                &optimized_assignments,
                RouteColors::Palette(&self.params.color_palette),
            ),
        );

        let savings = Savings::compare(&naive.stats, &optimized.stats);

        info!(
            "Naive {:.2} km, optimized {:.2} km, saved {:.2} km ({:.1}%)",
            naive.stats.total_distance_km(),
            optimized.stats.total_distance_km(),
            savings.distance_saved_km,
            savings.percent_improvement
        );

        Ok(OptimizationResult {
            naive,
            optimized,
            savings,
        })
    }
}

/// Separates the single depot from the jobs, keeping the jobs in input order.
pub fn split_locations(
    locations: &[Location],
) -> Result<(Location, Vec<Location>), OptimizeError> {
    if locations.len() < 2 {
        return Err(OptimizeError::NotEnoughLocations(locations.len()));
    }

    let (mut depots, jobs): (Vec<_>, Vec<_>) = locations
        .iter()
        .cloned()
        .partition(|location| location.is_depot());

    match depots.len() {
        0 => Err(OptimizeError::MissingDepot),
        1 => Ok((depots.swap_remove(0), jobs)),
        count => Err(OptimizeError::MultipleDepots(count)),
    }
}

pub fn validate_input(
    depot: &Location,
    jobs: &[Location],
    truck_count: usize,
) -> Result<(), OptimizeError> {
    if depot.location_type != LocationType::Depot {
        return Err(OptimizeError::MissingDepot);
    }

    if jobs.is_empty() {
        return Err(OptimizeError::NoJobs);
    }

    if truck_count == 0 {
        return Err(OptimizeError::NoTrucks);
    }

    let mut ids = HashSet::with_capacity(jobs.len() + 1);
    for location in std::iter::once(depot).chain(jobs) {
        if !location.coordinate.is_valid() {
            return Err(OptimizeError::InvalidCoordinate(location.id.clone()));
        }

        if !ids.insert(location.id.as_str()) {
            return Err(OptimizeError::DuplicateLocationId(location.id.clone()));
        }
    }

    if let Some(job) = jobs.iter().find(|job| job.is_depot()) {
        return Err(OptimizeError::UnexpectedDepot(job.id.clone()));
    }

    Ok(())
}
