use futures::{StreamExt, stream};
use loopmind_routing::{
    leg_stats::LegStats, route_provider::RouteProvider, route_resolver::RouteResolver,
};
use tracing::{debug, instrument};

use crate::{
    params::DEFAULT_COLOR_PALETTE,
    plan::{
        route_plan::{Plan, RoutePlan},
        route_stats::RouteStats,
    },
    problem::location::Location,
    solver::route_assignment::RouteAssignment,
};

#[derive(Debug, Clone, Copy)]
pub enum RouteColors<'a> {
    /// Route `i` takes `palette[i % palette.len()]`
    Palette(&'a [String]),
    Fixed(&'a str),
}

impl RouteColors<'_> {
    pub fn color(&self, route_index: usize) -> String {
        match self {
            RouteColors::Fixed(color) => (*color).to_owned(),
            RouteColors::Palette(palette) if !palette.is_empty() => {
                palette[route_index % palette.len()].clone()
            }
            RouteColors::Palette(_) => DEFAULT_COLOR_PALETTE[0].to_owned(),
        }
    }
}

/// Resolves the routes of one plan and sums them into plan statistics.
pub struct PlanAggregator<'a, R> {
    resolver: &'a RouteResolver<R>,
    cost_per_km: f64,
    concurrency: usize,
}

impl<'a, R> PlanAggregator<'a, R>
where
    R: RouteProvider,
{
    pub fn new(resolver: &'a RouteResolver<R>, cost_per_km: f64, concurrency: usize) -> Self {
        Self {
            resolver,
            cost_per_km,
            concurrency: concurrency.max(1),
        }
    }

    /// Routes are resolved with at most `concurrency` requests in flight and
    /// come back in assignment order.
    #[instrument(skip_all, level = "debug", fields(routes = assignments.len()))]
    pub async fn aggregate(
        &self,
        depot: &Location,
        jobs: &[Location],
        assignments: &[RouteAssignment],
        colors: RouteColors<'_>,
    ) -> Plan {
        let pending = assignments
            .iter()
            .map(|assignment| self.resolve_route(depot, jobs, assignment))
            .collect::<Vec<_>>();

        let resolved = stream::iter(pending)
            .buffered(self.concurrency)
            .collect::<Vec<_>>()
            .await;

        let mut total_distance_km = 0.0;
        let mut total_time_minutes = 0.0;
        let mut routes = Vec::with_capacity(resolved.len());

        for (index, (truck_id, path, legs)) in resolved.into_iter().enumerate() {
            debug!(
                "Truck {}: {} stops, {:.3} km, {:.1} min",
                truck_id,
                path.len(),
                legs.distance_km,
                legs.duration_minutes
            );

            total_distance_km += legs.distance_km;
            total_time_minutes += legs.duration_minutes;

            routes.push(RoutePlan {
                truck_id,
                path,
                geometry: legs.geometry,
                color: colors.color(index),
            });
        }

        Plan {
            stats: RouteStats::from_totals(total_distance_km, total_time_minutes, self.cost_per_km),
            routes,
        }
    }

    async fn resolve_route(
        &self,
        depot: &Location,
        jobs: &[Location],
        assignment: &RouteAssignment,
    ) -> (usize, Vec<Location>, LegStats) {
        let path = RoutePlan::stops(depot, jobs, assignment);
        let legs = self.resolver.resolve(&path).await;
        (assignment.truck_id, path, legs)
    }
}
