use loopmind_routing::route_provider::RouteProvider;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    error::OptimizeError,
    optimizer::{OptimizationResult, Optimizer},
    problem::location::Location,
};

pub const DEFAULT_TRUCK_COUNT: usize = 2;

fn default_truck_count() -> usize {
    DEFAULT_TRUCK_COUNT
}

/// Accepted request bodies: the depot and jobs given apart, the mixed list
/// with a truck count, or a bare list of locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged, rename = "OptimizationRequest")]
pub enum JsonOptimizationRequest {
    #[serde(rename_all = "camelCase")]
    DepotAndJobs {
        depot: Location,
        jobs: Vec<Location>,

        #[serde(default = "default_truck_count")]
        truck_count: usize,
    },

    #[serde(rename_all = "camelCase")]
    Locations {
        locations: Vec<Location>,

        #[serde(default = "default_truck_count")]
        truck_count: usize,
    },

    List(Vec<Location>),
}

impl JsonOptimizationRequest {
    pub fn truck_count(&self) -> usize {
        match self {
            JsonOptimizationRequest::DepotAndJobs { truck_count, .. }
            | JsonOptimizationRequest::Locations { truck_count, .. } => *truck_count,
            JsonOptimizationRequest::List(_) => DEFAULT_TRUCK_COUNT,
        }
    }

    /// Replaces the truck count, a bare list becomes `Locations`.
    pub fn with_truck_count(self, truck_count: usize) -> Self {
        match self {
            JsonOptimizationRequest::DepotAndJobs { depot, jobs, .. } => {
                JsonOptimizationRequest::DepotAndJobs {
                    depot,
                    jobs,
                    truck_count,
                }
            }
            JsonOptimizationRequest::Locations { locations, .. }
            | JsonOptimizationRequest::List(locations) => JsonOptimizationRequest::Locations {
                locations,
                truck_count,
            },
        }
    }

    #[instrument(skip_all, level = "debug")]
    pub async fn optimize<R>(
        &self,
        optimizer: &Optimizer<R>,
    ) -> Result<OptimizationResult, OptimizeError>
    where
        R: RouteProvider,
    {
        match self {
            JsonOptimizationRequest::DepotAndJobs {
                depot,
                jobs,
                truck_count,
            } => optimizer.optimize(depot, jobs, *truck_count).await,
            JsonOptimizationRequest::Locations {
                locations,
                truck_count,
            } => optimizer.optimize_locations(locations, *truck_count).await,
            JsonOptimizationRequest::List(locations) => {
                optimizer
                    .optimize_locations(locations, DEFAULT_TRUCK_COUNT)
                    .await
            }
        }
    }
}
