use std::future::Future;

use crate::{leg_stats::LegStats, routing_error::RoutingError};

/// Resolves the travel of an ordered sequence of points.
///
/// Implemented by the OSRM client and by the analytic [`AsTheCrowFlies`]
/// provider; [`RouteResolver`] decides at runtime which one answers.
///
/// [`AsTheCrowFlies`]: crate::as_the_crow_flies::AsTheCrowFlies
/// [`RouteResolver`]: crate::route_resolver::RouteResolver
pub trait RouteProvider {
    fn fetch_route<P>(
        &self,
        points: &[P],
    ) -> impl Future<Output = Result<LegStats, RoutingError>> + Send
    where
        for<'a> &'a P: Into<geo_types::Point>,
        P: Sync;
}
