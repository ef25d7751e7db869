use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use loopmind_routing::{
    as_the_crow_flies::AsTheCrowFlies, leg_stats::LegStats, route_provider::RouteProvider,
    routing_error::RoutingError,
};

use crate::problem::location::Location;

pub fn depot(lat: f64, lng: f64) -> Location {
    Location::depot("depot", "Central Depot", lat, lng)
}

pub fn create_jobs(coordinates: &[(f64, f64)]) -> Vec<Location> {
    coordinates
        .iter()
        .enumerate()
        .map(|(i, &(lat, lng))| {
            Location::job(format!("job-{i}"), format!("Job Site #{}", i + 1), lat, lng)
        })
        .collect()
}

/// Depot at the origin, two jobs north and two jobs east.
pub fn cluster_scenario() -> (Location, Vec<Location>) {
    (
        depot(0.0, 0.0),
        create_jobs(&[(0.0, 1.0), (0.0, 2.0), (1.0, 0.0), (2.0, 0.0)]),
    )
}

/// Deterministic jobs spread around Brussels.
pub fn scattered_jobs(count: usize) -> Vec<Location> {
    let coordinates = (0..count)
        .map(|i| {
            let lat = 50.85 + ((i * 7919) % 1000) as f64 / 1000.0 * 0.2 - 0.1;
            let lng = 4.35 + ((i * 104_729) % 997) as f64 / 997.0 * 0.3 - 0.15;
            (lat, lng)
        })
        .collect::<Vec<_>>();

    create_jobs(&coordinates)
}

pub struct FailingProvider;

impl RouteProvider for FailingProvider {
    async fn fetch_route<P>(&self, _points: &[P]) -> Result<LegStats, RoutingError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
        P: Sync,
    {
        Err(RoutingError::NoRoute(String::from("test")))
    }
}

/// Straight-line answers after a short delay, recording how many requests
/// were in flight at once and how many were made.
#[derive(Default)]
pub struct ConcurrencyProbe {
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    calls: Arc<AtomicUsize>,
}

impl ConcurrencyProbe {
    pub fn max_in_flight(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.max_in_flight)
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl RouteProvider for ConcurrencyProbe {
    async fn fetch_route<P>(&self, points: &[P]) -> Result<LegStats, RoutingError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
        P: Sync,
    {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(in_flight, Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(10)).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(AsTheCrowFlies::default().leg_stats(points))
    }
}
