use tracing::warn;

use crate::{
    coordinate::Coordinate, kmh::Kmh, leg_stats::LegStats, route_provider::RouteProvider,
    routing_error::RoutingError,
};

const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Great-circle distance in kilometers.
pub fn haversine_distance<P>(from: P, to: P) -> f64
where
    P: Into<geo_types::Point>,
{
    let from: geo_types::Point = from.into();
    let to: geo_types::Point = to.into();

    let lat1_rad = from.y().to_radians();
    let lon1_rad = from.x().to_radians();
    let lat2_rad = to.y().to_radians();
    let lon2_rad = to.x().to_radians();

    let delta_lat = lat2_rad - lat1_rad;
    let delta_lon = lon2_rad - lon1_rad;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Sum of the great-circle distances between consecutive points.
pub fn path_distance<P>(points: &[P]) -> f64
where
    for<'a> &'a P: Into<geo_types::Point>,
{
    points
        .windows(2)
        .map(|pair| haversine_distance(&pair[0], &pair[1]))
        .sum()
}

/// Analytic provider: straight lines between stops at a uniform speed.
#[derive(Debug, Clone, Copy)]
pub struct AsTheCrowFlies {
    speed: Kmh,
}

impl AsTheCrowFlies {
    pub const DEFAULT_SPEED: Kmh = Kmh::new(30.0);

    /// A speed that is not finite and positive is replaced by
    /// [`Self::DEFAULT_SPEED`].
    pub fn new(speed: Kmh) -> Self {
        if !speed.is_valid() {
            warn!(
                "Invalid fallback speed {} km/h, using {} km/h",
                speed.value(),
                Self::DEFAULT_SPEED.value()
            );
            return Self {
                speed: Self::DEFAULT_SPEED,
            };
        }

        Self { speed }
    }

    pub fn speed(&self) -> Kmh {
        self.speed
    }

    pub fn leg_stats<P>(&self, points: &[P]) -> LegStats
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        if points.len() < 2 {
            return LegStats::empty();
        }

        let geometry = points
            .iter()
            .map(|point| {
                let point: geo_types::Point = point.into();
                Coordinate::from(point)
            })
            .collect::<Vec<_>>();
        let distance_km = path_distance(points);

        LegStats {
            distance_km,
            duration_minutes: self.speed.minutes_for(distance_km),
            geometry,
        }
    }
}

impl Default for AsTheCrowFlies {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPEED)
    }
}

impl RouteProvider for AsTheCrowFlies {
    async fn fetch_route<P>(&self, points: &[P]) -> Result<LegStats, RoutingError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
        P: Sync,
    {
        Ok(self.leg_stats(points))
    }
}
