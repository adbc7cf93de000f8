use serde::{Deserialize, Serialize};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    // Zero and non-finite components count as missing, so equator and
    // prime-meridian points fall back too. Callers rely on this; do not
    // tighten it without a migration plan for stored addresses.
    fn is_usable(&self) -> bool {
        self.lat != 0.0 && self.lat.is_finite() && self.lng != 0.0 && self.lng.is_finite()
    }
}

/// Estimate the distance between two points using the Haversine formula.
/// Returns distance in kilometers.
///
/// Missing or degenerate coordinates never fail the call: the estimate
/// logs a warning and falls back to `0.0`.
pub fn estimate_distance(from: Option<&Coordinate>, to: Option<&Coordinate>) -> f64 {
    let (from, to) = match (from, to) {
        (Some(f), Some(t)) if f.is_usable() && t.is_usable() => (f, t),
        _ => {
            tracing::warn!(?from, ?to, "missing coordinates, assuming zero distance");
            return 0.0;
        }
    };

    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Check if a delivery address is within the allowed radius of a restaurant
pub fn is_within_radius(address: &Coordinate, center: &Coordinate, max_radius_km: f64) -> bool {
    estimate_distance(Some(address), Some(center)) <= max_radius_km
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_london_paris() {
        let london = Coordinate::new(51.5074, -0.1278);
        let paris = Coordinate::new(48.8566, 2.3522);

        let distance = estimate_distance(Some(&london), Some(&paris));
        // Should be approximately 343.5 km
        assert!((distance - 343.5).abs() < 1.0, "got {}", distance);
    }

    #[test]
    fn test_distance_same_point_is_zero() {
        let point = Coordinate::new(-6.2088, 106.8456);

        let distance = estimate_distance(Some(&point), Some(&point));
        assert!(distance.abs() < 1e-9);
    }

    #[test]
    fn test_missing_coordinate_falls_back_to_zero() {
        let point = Coordinate::new(10.0, 10.0);

        assert_eq!(estimate_distance(None, Some(&point)), 0.0);
        assert_eq!(estimate_distance(Some(&point), None), 0.0);
        assert_eq!(estimate_distance(None, None), 0.0);
    }

    #[test]
    fn test_zero_coordinate_treated_as_missing() {
        // (0, 0) pairs take the fallback path, not the formula.
        let origin = Coordinate::new(0.0, 0.0);
        let point = Coordinate::new(10.0, 10.0);

        assert_eq!(estimate_distance(Some(&origin), Some(&origin)), 0.0);
        assert_eq!(estimate_distance(Some(&origin), Some(&point)), 0.0);
        assert_eq!(
            estimate_distance(Some(&point), Some(&Coordinate::new(10.0, 0.0))),
            0.0
        );
    }

    #[test]
    fn test_non_finite_coordinate_treated_as_missing() {
        let point = Coordinate::new(10.0, 10.0);
        let broken = Coordinate::new(f64::NAN, 10.0);

        assert_eq!(estimate_distance(Some(&broken), Some(&point)), 0.0);
    }

    #[test]
    fn test_within_radius() {
        let restaurant = Coordinate::new(-6.2088, 106.8456);
        let nearby = Coordinate::new(-6.21, 106.85);

        assert!(is_within_radius(&nearby, &restaurant, 10.0));

        let far = Coordinate::new(-6.9175, 107.6191);
        assert!(!is_within_radius(&far, &restaurant, 10.0));
    }

    #[test]
    fn test_distance_is_deterministic() {
        let a = Coordinate::new(51.5074, -0.1278);
        let b = Coordinate::new(48.8566, 2.3522);

        let first = estimate_distance(Some(&a), Some(&b));
        let second = estimate_distance(Some(&a), Some(&b));
        assert_eq!(first, second);
    }
}
