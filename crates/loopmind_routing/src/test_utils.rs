use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use crate::{
    as_the_crow_flies::AsTheCrowFlies, leg_stats::LegStats, route_provider::RouteProvider,
    routing_error::RoutingError,
};

pub struct FailingProvider;

impl RouteProvider for FailingProvider {
    async fn fetch_route<P>(&self, _points: &[P]) -> Result<LegStats, RoutingError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
        P: Sync,
    {
        Err(RoutingError::Api {
            status: 503,
            message: String::from("unavailable"),
        })
    }
}

pub struct FixedProvider(pub LegStats);

impl RouteProvider for FixedProvider {
    async fn fetch_route<P>(&self, _points: &[P]) -> Result<LegStats, RoutingError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
        P: Sync,
    {
        Ok(self.0.clone())
    }
}

pub struct SlowProvider(pub Duration);

impl RouteProvider for SlowProvider {
    async fn fetch_route<P>(&self, points: &[P]) -> Result<LegStats, RoutingError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
        P: Sync,
    {
        tokio::time::sleep(self.0).await;
        Ok(AsTheCrowFlies::default().leg_stats(points))
    }
}

/// Answers like the analytic provider and counts the calls.
#[derive(Default)]
pub struct CountingProvider {
    calls: Arc<AtomicUsize>,
}

impl CountingProvider {
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl RouteProvider for CountingProvider {
    async fn fetch_route<P>(&self, points: &[P]) -> Result<LegStats, RoutingError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
        P: Sync,
    {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(AsTheCrowFlies::default().leg_stats(points))
    }
}
