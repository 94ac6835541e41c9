//! Great-circle distance helpers.
//!
//! Coordinates follow the `geo` convention used throughout the workspace:
//! `x = longitude` and `y = latitude`, both in degrees.

use geo::Coord;

/// Earth radius used by [`haversine_km`], in kilometres.
pub const EARTH_MEAN_RADIUS_KM: f64 = 6_371.0;

/// Return the haversine distance between two coordinates in kilometres.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use seygo_core::haversine_km;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let east = Coord { x: 1.0, y: 0.0 };
/// let km = haversine_km(origin, east);
/// assert!((km - 111.1949).abs() < 1e-4);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let from_lat = from.y.to_radians();
    let to_lat = to.y.to_radians();
    let delta_lat = (to.y - from.y).to_radians();
    let delta_lon = (to.x - from.x).to_radians();
    let half_chord = (delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lon / 2.0).sin().powi(2);
    EARTH_MEAN_RADIUS_KM * 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt())
}

/// Report whether a latitude/longitude pair is finite and within range.
///
/// # Examples
/// ```
/// use seygo_core::is_valid_coordinate;
///
/// assert!(is_valid_coordinate(6.93, 79.85));
/// assert!(!is_valid_coordinate(91.0, 0.0));
/// assert!(!is_valid_coordinate(f64::NAN, 0.0));
/// ```
#[must_use]
pub fn is_valid_coordinate(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}
