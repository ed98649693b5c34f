//! Geographic coordinates and great-circle distance.

use std::fmt;

/// Mean Earth radius in kilometers, used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic coordinate in degrees. Latitude grows north, longitude east.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    /// Create a new coordinate from latitude and longitude in degrees.
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle (haversine) distance to `other` in kilometers.
    ///
    /// Symmetric, and exactly zero for identical coordinates. Because the
    /// straight-line distance between two points never exceeds the length of
    /// any path between them along graph edges, this doubles as an
    /// admissible A* heuristic.
    pub fn distance_km(self, other: Coord) -> f64 {
        if self == other {
            return 0.0;
        }
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlon = (other.lon - self.lon).to_radians();

        let a = (dlat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn distance_symmetric() {
        let a = Coord::new(37.1536, -97.9222); // Anthony, KS
        let b = Coord::new(37.6889, -97.3361); // Wichita, KS
        assert_eq!(a.distance_km(b), b.distance_km(a));
        assert!(a.distance_km(b) > 0.0);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = Coord::new(37.1536, -97.9222);
        assert_eq!(a.distance_km(a), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // One degree of latitude is about 111.19 km anywhere on the sphere.
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(1.0, 0.0);
        assert!(close(a.distance_km(b), 111.195, 0.01));
    }

    #[test]
    fn antipodal_is_half_circumference() {
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(0.0, 180.0);
        assert!(close(a.distance_km(b), EARTH_RADIUS_KM * std::f64::consts::PI, 0.01));
    }

    #[test]
    fn wichita_to_anthony() {
        // Roughly 80 km as the crow flies.
        let anthony = Coord::new(37.1536, -97.9222);
        let wichita = Coord::new(37.6889, -97.3361);
        let d = anthony.distance_km(wichita);
        assert!(d > 70.0 && d < 90.0, "got {d}");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_round_trip() {
        let c = Coord::new(37.6889, -97.3361);
        let json = serde_json::to_string(&c).unwrap();
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
