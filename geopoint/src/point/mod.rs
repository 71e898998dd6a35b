//! Geographic point entities.
//!
//! Provides the validated [`Point`] type plus the pure distance math used
//! by spatial queries. Validation happens at construction, so an
//! out-of-range point value is never observable.

mod row;
mod types;

pub use row::RowError;
pub use types::{Point, PointError, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Mean Earth radius in meters, used by [`haversine_m`].
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Computes the planar (Pythagorean) distance between two coordinate pairs.
///
/// Operates directly on the raw values with no unit conversion: feeding
/// lon/lat degrees in gets a degree-space distance out.
#[inline]
pub fn euclidean(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Computes the great-circle (haversine) distance between two lon/lat
/// pairs, in meters.
///
/// Inputs are decimal degrees and are converted to radians internally.
#[inline]
pub fn haversine_m(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_unit_diagonal() {
        let d = euclidean(121.0, 14.6, 122.0, 15.6);
        assert!((d - std::f64::consts::SQRT_2).abs() < 1e-8);
    }

    #[test]
    fn test_euclidean_same_point_is_zero() {
        assert_eq!(euclidean(10.0, 20.0, 10.0, 20.0), 0.0);
    }

    #[test]
    fn test_haversine_degree_scale_separation() {
        // One degree in each axis at ~15°N is roughly 150 km.
        let d = haversine_m(121.0, 14.6, 122.0, 15.6);
        assert!(d > 0.0);
        assert!(
            (140_000.0..170_000.0).contains(&d),
            "Expected ~1.5e5 m, got {}",
            d
        );
    }

    #[test]
    fn test_haversine_same_point_is_zero() {
        let d = haversine_m(121.0, 14.6, 121.0, 14.6);
        assert!(d.abs() < 1e-9);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let forward = haversine_m(1.3678, 43.6294, -73.7781, 40.6413);
        let back = haversine_m(-73.7781, 40.6413, 1.3678, 43.6294);
        assert!((forward - back).abs() < 1e-6);
    }
}
