//! Planar geometry primitives shared by every path strategy.
//!
//! Coordinates are a latitude-like / longitude-like pair treated as an
//! ordinary Cartesian plane: distances are expressed in the same units as
//! the coordinates and no geodesic correction is applied. All documented
//! route outputs are defined against this flat-plane model.

use serde::{Deserialize, Serialize};

/// A planar waypoint: latitude-like first axis, longitude-like second axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Displace this point by `distance` along `bearing` (radians).
    ///
    /// Bearing 0 points along the +lon axis and PI/2 along the +lat axis;
    /// the sine/cosine roles are swapped relative to the usual compass
    /// convention. Every strategy and every expected route in the test
    /// suite is defined against this convention, so it must not be "fixed".
    pub fn project(&self, bearing: f64, distance: f64) -> Point {
        Point {
            lat: bearing.sin() * distance + self.lat,
            lon: bearing.cos() * distance + self.lon,
        }
    }

    /// Straight-line distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        (dlat * dlat + dlon * dlon).sqrt()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
