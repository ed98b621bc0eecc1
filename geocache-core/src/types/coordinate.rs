//! Coordinate type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::WIRE_COORDINATE_PRECISION;

/// A point on the globe in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Key under which the reverse lookup for this point is cached.
    ///
    /// Uses Rust's shortest round-trip float formatting, so `77.0` stays
    /// `"77.0"` and `12.970` collapses to `"12.97"`. Values that format
    /// differently are different keys.
    pub fn cache_key(&self) -> String {
        format!("{:?},{:?}", self.latitude, self.longitude)
    }

    /// The `lat,lon` form sent to the provider, with fixed precision.
    pub fn to_query(&self) -> String {
        format!(
            "{:.prec$},{:.prec$}",
            self.latitude,
            self.longitude,
            prec = WIRE_COORDINATE_PRECISION
        )
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(12.97, 77.59, "12.97,77.59" ; "plain decimals")]
    #[test_case(15.0, 73.0, "15.0,73.0" ; "whole degrees keep a fraction")]
    #[test_case(-33.8688, 151.2093, "-33.8688,151.2093" ; "negative latitude")]
    #[test_case(12.970, 77.590, "12.97,77.59" ; "trailing zeros collapse")]
    fn test_cache_key(lat: f64, lon: f64, expected: &str) {
        assert_eq!(Coordinate::new(lat, lon).cache_key(), expected);
    }

    #[test]
    fn test_cache_key_precision_is_significant() {
        let a = Coordinate::new(12.97, 77.59).cache_key();
        let b = Coordinate::new(12.9700001, 77.59).cache_key();
        assert_ne!(a, b);
    }

    #[test]
    fn test_to_query_fixed_precision() {
        assert_eq!(
            Coordinate::new(12.97, 77.59).to_query(),
            "12.970000,77.590000"
        );
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(Coordinate::new(15.49, 73.82)).unwrap();
        assert_eq!(json, serde_json::json!({"latitude": 15.49, "longitude": 73.82}));
    }
}
