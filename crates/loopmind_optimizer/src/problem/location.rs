use loopmind_routing::coordinate::Coordinate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::define_index_newtype;

define_index_newtype!(JobIdx, Location);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Depot,
    Job,
}

/// A stop supplied by the caller: the depot or a job site.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Location {
    pub id: String,

    #[serde(rename = "type")]
    pub location_type: LocationType,

    pub name: String,

    #[serde(flatten)]
    pub coordinate: Coordinate,
}

impl Location {
    pub fn depot(id: impl Into<String>, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Location {
            id: id.into(),
            location_type: LocationType::Depot,
            name: name.into(),
            coordinate: Coordinate::new(lat, lng),
        }
    }

    pub fn job(id: impl Into<String>, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Location {
            id: id.into(),
            location_type: LocationType::Job,
            name: name.into(),
            coordinate: Coordinate::new(lat, lng),
        }
    }

    pub fn lat(&self) -> f64 {
        self.coordinate.lat
    }

    pub fn lng(&self) -> f64 {
        self.coordinate.lng
    }

    pub fn is_depot(&self) -> bool {
        self.location_type == LocationType::Depot
    }
}

impl From<&Location> for geo_types::Point {
    fn from(location: &Location) -> Self {
        (&location.coordinate).into()
    }
}
