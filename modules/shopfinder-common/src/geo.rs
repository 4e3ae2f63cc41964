use serde::{Deserialize, Serialize};

/// Earth radius used for every distance in the service.
pub const EARTH_RADIUS_M: f64 = 6_367_000.0;

/// Haversine great-circle distance between two lat/lng points, in meters.
///
/// NaN coordinates produce a NaN distance, which fails every radius comparison.
pub fn haversine_m(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_r = lat1.to_radians();
    let lat2_r = lat2.to_radians();
    let d_lat = lat2_r - lat1_r;
    let d_lng = lng2.to_radians() - lng1.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1_r.cos() * lat2_r.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();
    EARTH_RADIUS_M * c
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Distance in meters to `other`.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        haversine_m(self.lat, self.lng, other.lat, other.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        let d = haversine_m(59.33258, 18.0649, 59.33258, 18.0649);
        assert_eq!(d, 0.0);
    }

    #[test]
    fn one_degree_of_longitude_on_equator() {
        // 2 * pi * 6367km / 360 ≈ 111,125m; well inside 1% of the 111,195m textbook value
        let d = haversine_m(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111_195.0).abs() < 1_112.0, "Expected ~111km, got {d}m");
    }

    #[test]
    fn symmetric() {
        let a = haversine_m(59.3325, 18.0649, 59.3293, 18.0686);
        let b = haversine_m(59.3293, 18.0686, 59.3325, 18.0649);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn stockholm_to_gothenburg() {
        // ~397km as the crow flies
        let d = haversine_m(59.3293, 18.0686, 57.7089, 11.9746);
        assert!((d - 396_600.0).abs() < 2_000.0, "Expected ~397km, got {d}m");
    }

    #[test]
    fn nan_propagates() {
        assert!(haversine_m(f64::NAN, 0.0, 0.0, 0.0).is_nan());
        assert!(GeoPoint::new(0.0, f64::NAN)
            .distance_to(&GeoPoint::new(0.0, 0.0))
            .is_nan());
    }

    #[test]
    fn never_negative() {
        let d = haversine_m(-33.8688, 151.2093, 40.7128, -74.0060);
        assert!(d > 0.0);
    }
}
