//! Great-circle distances between WGS84 coordinates.
//!
//! Coordinates follow the `geo` convention used across the workspace:
//! `x` holds longitude and `y` holds latitude, both in degrees. Every
//! distance handed out by this module is in statute miles and rounded to one
//! decimal place, so equal distances are common and callers must not rely on
//! them to break ties.

use geo::{Coord, Distance, HaversineMeasure, Point};

/// Earth radius in miles used by every distance calculation.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

const EARTH: HaversineMeasure = HaversineMeasure::new(EARTH_RADIUS_MILES);

/// Metres in one statute mile.
pub const METERS_PER_MILE: f64 = 1609.344;

/// Build a coordinate from latitude and longitude in degrees.
///
/// # Examples
/// ```
/// use nearbite_core::geodesic::lat_lng;
///
/// let pentagon = lat_lng(38.8719, -77.0563);
/// assert_eq!(pentagon.y, 38.8719);
/// assert_eq!(pentagon.x, -77.0563);
/// ```
#[must_use]
pub const fn lat_lng(latitude: f64, longitude: f64) -> Coord<f64> {
    Coord {
        x: longitude,
        y: latitude,
    }
}

/// Haversine distance between `a` and `b` in miles, rounded to one decimal.
///
/// The function is symmetric and returns `0.0` for identical inputs.
///
/// # Examples
/// ```
/// use nearbite_core::geodesic::{distance_miles, lat_lng};
///
/// let pentagon = lat_lng(38.8719, -77.0563);
/// let capitol = lat_lng(38.8899, -77.0091);
/// assert_eq!(distance_miles(pentagon, pentagon), 0.0);
/// assert_eq!(distance_miles(pentagon, capitol), distance_miles(capitol, pentagon));
/// ```
#[must_use]
pub fn distance_miles(a: Coord<f64>, b: Coord<f64>) -> f64 {
    round_to_tenth(EARTH.distance(Point::from(a), Point::from(b)))
}

/// Round `value` to one decimal place, half away from zero.
#[expect(
    clippy::float_arithmetic,
    reason = "decimal rounding scales by ten around f64::round"
)]
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Convert a metric radius into miles.
///
/// Search collaborators speak metres while the landmark index works in
/// miles; the detail view's 2 km radius becomes roughly 1.24 miles.
///
/// # Examples
/// ```
/// use nearbite_core::geodesic::miles_from_meters;
///
/// assert!((miles_from_meters(2000.0) - 1.2427).abs() < 1e-4);
/// ```
#[expect(clippy::float_arithmetic, reason = "unit conversion")]
#[must_use]
pub fn miles_from_meters(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}
