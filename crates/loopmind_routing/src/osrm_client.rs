use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::{
    coordinate::Coordinate, leg_stats::LegStats, route_provider::RouteProvider,
    routing_error::RoutingError,
};

pub const OSRM_PUBLIC_URL: &str = "https://router.project-osrm.org";
pub const OSRM_ROUTE_API_PATH: &str = "/route/v1/";
pub const OSRM_DEFAULT_PROFILE: &str = "driving";

const OSRM_URL_ENV_VAR: &str = "LOOPMIND_OSRM_URL";

const METERS_PER_KM: f64 = 1000.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

#[derive(Debug, Deserialize)]
pub(crate) struct OsrmRouteResponse {
    code: String,
    message: Option<String>,

    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OsrmRoute {
    /// Meters
    distance: f64,

    /// Seconds
    duration: f64,

    geometry: OsrmGeometry,
}

/// GeoJSON LineString, `[lng, lat]` pairs.
#[derive(Debug, Deserialize)]
pub(crate) struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Clone)]
pub struct OsrmRouteClientParams {
    pub osrm_url: String,
    pub profile: String,

    /// Applied by reqwest to the whole request, response body included
    pub request_timeout: Option<Duration>,
}

impl OsrmRouteClientParams {
    /// Reads the base URL from `LOOPMIND_OSRM_URL`, defaulting to the public
    /// OSRM demo server.
    pub fn from_env() -> Self {
        let osrm_url =
            std::env::var(OSRM_URL_ENV_VAR).unwrap_or_else(|_| OSRM_PUBLIC_URL.to_owned());

        Self {
            osrm_url,
            ..Self::default()
        }
    }
}

impl Default for OsrmRouteClientParams {
    fn default() -> Self {
        Self {
            osrm_url: OSRM_PUBLIC_URL.to_owned(),
            profile: OSRM_DEFAULT_PROFILE.to_owned(),
            request_timeout: None,
        }
    }
}

pub struct OsrmRouteClient {
    params: OsrmRouteClientParams,
    client: reqwest::Client,
}

impl OsrmRouteClient {
    pub fn new(params: OsrmRouteClientParams) -> Result<Self, RoutingError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = params.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            params,
        })
    }

    pub fn params(&self) -> &OsrmRouteClientParams {
        &self.params
    }

    /// `{osrm_url}/route/v1/{profile}/{lng},{lat};{lng},{lat}...`
    pub fn route_url<P>(&self, points: &[P]) -> String
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        let mut url = self.params.osrm_url.trim_end_matches('/').to_owned();
        url.push_str(OSRM_ROUTE_API_PATH);
        url.push_str(&self.params.profile);
        url.push('/');

        for (i, point) in points.iter().enumerate() {
            let point: geo_types::Point = point.into();
            url.push_str(&format!("{},{}", point.x(), point.y()));

            if i < points.len() - 1 {
                url.push(';');
            }
        }

        url
    }

    pub(crate) fn leg_stats_from_response(
        response: OsrmRouteResponse,
    ) -> Result<LegStats, RoutingError> {
        if response.code != "Ok" {
            return Err(RoutingError::NoRoute(
                response.message.unwrap_or(response.code),
            ));
        }

        let route = response
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| RoutingError::NoRoute(String::from("empty routes")))?;

        let geometry = route
            .geometry
            .coordinates
            .into_iter()
            .map(|[lng, lat]| Coordinate::new(lat, lng))
            .collect();

        Ok(LegStats {
            distance_km: route.distance / METERS_PER_KM,
            duration_minutes: route.duration / SECONDS_PER_MINUTE,
            geometry,
        })
    }
}

impl RouteProvider for OsrmRouteClient {
    async fn fetch_route<P>(&self, points: &[P]) -> Result<LegStats, RoutingError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
        P: Sync,
    {
        let url = self.route_url(points);
        debug!("OSRM: requesting route through {} stops", points.len());

        let response = self
            .client
            .get(url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(RoutingError::Api { status, message });
        }

        let bytes = response.bytes().await?;
        let body: OsrmRouteResponse = serde_json::from_slice(&bytes)?;

        Self::leg_stats_from_response(body)
    }
}
