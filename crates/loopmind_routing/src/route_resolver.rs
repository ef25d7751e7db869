use std::time::Duration;

use tracing::{instrument, warn};

use crate::{
    as_the_crow_flies::AsTheCrowFlies, leg_stats::LegStats, route_provider::RouteProvider,
    routing_error::RoutingError,
};

pub const DEFAULT_ROUTE_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolves stop sequences through a road routing provider and falls back to
/// straight lines when the provider fails, times out or returns garbage.
///
/// Provider failures never reach the caller; they are logged and replaced by
/// the analytic estimate.
pub struct RouteResolver<R> {
    primary: Option<R>,
    fallback: AsTheCrowFlies,
    timeout: Duration,
}

impl<R> RouteResolver<R>
where
    R: RouteProvider,
{
    pub fn new(primary: R, fallback: AsTheCrowFlies) -> Self {
        Self {
            primary: Some(primary),
            fallback,
            timeout: DEFAULT_ROUTE_TIMEOUT,
        }
    }

    /// Never contacts a provider.
    pub fn offline(fallback: AsTheCrowFlies) -> Self {
        Self {
            primary: None,
            fallback,
            timeout: DEFAULT_ROUTE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_offline(&self) -> bool {
        self.primary.is_none()
    }

    pub fn fallback(&self) -> &AsTheCrowFlies {
        &self.fallback
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[instrument(skip_all, level = "debug", fields(stops = points.len()))]
    pub async fn resolve<P>(&self, points: &[P]) -> LegStats
    where
        for<'a> &'a P: Into<geo_types::Point>,
        P: Sync,
    {
        if points.len() < 2 {
            return LegStats::empty();
        }

        if let Some(primary) = &self.primary {
            match self.fetch_primary(primary, points).await {
                Ok(stats) => return stats,
                Err(error) => warn!("Routing failed, falling back to straight lines: {}", error),
            }
        }

        self.fallback.leg_stats(points)
    }

    async fn fetch_primary<P>(&self, primary: &R, points: &[P]) -> Result<LegStats, RoutingError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
        P: Sync,
    {
        let stats = tokio::time::timeout(self.timeout, primary.fetch_route(points))
            .await
            .map_err(|_| RoutingError::Timeout(self.timeout))??;

        if !stats.distance_km.is_finite()
            || stats.distance_km < 0.0
            || !stats.duration_minutes.is_finite()
            || stats.duration_minutes < 0.0
        {
            return Err(RoutingError::InvalidRoute(format!(
                "distance = {}, duration = {}",
                stats.distance_km, stats.duration_minutes
            )));
        }

        Ok(stats)
    }
}
