/// Earth's radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Great-circle distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1.0 for near-antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round a value to a fixed number of decimal places
///
/// Rounds the exact decimal expansion of `value`, with ties going to the
/// even digit, so `2.675` (stored as 2.67499...) becomes `2.67` and `0.125`
/// becomes `0.12`. Scaling by a power of ten first would round those up.
#[inline]
pub fn round_to_places(value: f64, places: u32) -> f64 {
    format!("{:.*}", places as usize, value)
        .parse()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // Distance from London to Paris (approximately 344 km)
        let london_lat = 51.5074;
        let london_lon = -0.1278;
        let paris_lat = 48.8566;
        let paris_lon = 2.3522;

        let distance = haversine_distance(london_lat, london_lon, paris_lat, paris_lon);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(haversine_distance(22.7196, 75.8577, 22.7196, 75.8577), 0.0);
        assert_eq!(haversine_distance(-90.0, 0.0, -90.0, 0.0), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let points = [
            (22.7196, 75.8577),
            (28.7041, 77.1025),
            (-33.8688, 151.2093),
            (64.1466, -21.9426),
        ];

        for &(lat1, lon1) in &points {
            for &(lat2, lon2) in &points {
                let forward = haversine_distance(lat1, lon1, lat2, lon2);
                let backward = haversine_distance(lat2, lon2, lat1, lon1);
                assert!((forward - backward).abs() < 1e-9);
                assert!(forward >= 0.0);
            }
        }
    }

    #[test]
    fn test_antipodal_points_stay_finite() {
        let distance = haversine_distance(0.0, 0.0, 0.0, 180.0);
        assert!(distance.is_finite());
        // Half the circumference
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_round_to_places() {
        assert_eq!(round_to_places(0.645_129, 2), 0.65);
        assert_eq!(round_to_places(677.013_3, 2), 677.01);
        assert_eq!(round_to_places(0.0, 2), 0.0);
        assert_eq!(round_to_places(1.005_1, 0), 1.0);
    }

    #[test]
    fn test_round_to_places_uses_exact_decimal_value() {
        assert_eq!(round_to_places(2.675, 2), 2.67);
        assert_eq!(round_to_places(1.005, 2), 1.0);
        assert_eq!(round_to_places(0.125, 2), 0.12);
        assert_eq!(round_to_places(0.375, 2), 0.38);
        assert_eq!(round_to_places(-0.125, 2), -0.12);
    }
}
