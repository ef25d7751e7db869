use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A WGS84 position, latitude first.
///
/// Routing services usually speak `lng,lat`; conversions into
/// [`geo_types::Point`] put the longitude on `x` and the latitude on `y`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude in [-90, 90] and longitude in [-180, 180]. NaN is never valid.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<Coordinate> for geo_types::Point {
    fn from(coordinate: Coordinate) -> Self {
        geo_types::Point::new(coordinate.lng, coordinate.lat)
    }
}

impl From<&Coordinate> for geo_types::Point {
    fn from(coordinate: &Coordinate) -> Self {
        geo_types::Point::new(coordinate.lng, coordinate.lat)
    }
}

impl From<geo_types::Point> for Coordinate {
    fn from(point: geo_types::Point) -> Self {
        Coordinate {
            lat: point.y(),
            lng: point.x(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_axis_order() {
        let coordinate = Coordinate::new(50.85, 4.35);
        let point: geo_types::Point = coordinate.into();

        assert_eq!(point.x(), 4.35);
        assert_eq!(point.y(), 50.85);
        assert_eq!(Coordinate::from(point), coordinate);
    }

    #[test]
    fn test_is_valid() {
        assert!(Coordinate::new(90.0, -180.0).is_valid());
        assert!(Coordinate::new(-90.0, 180.0).is_valid());
        assert!(!Coordinate::new(90.5, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 181.0).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }
}
