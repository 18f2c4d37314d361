//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two
//! points on a sphere given their longitudes and latitudes. StudyBites only
//! ever shows distances in miles ("X miles away"), so miles is the single
//! supported unit.

use crate::Coordinate;

/// Earth's mean radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Calculates the great-circle distance between two coordinates in miles.
///
/// Pure and deterministic. Assumes valid numeric inputs; NaN propagates if
/// either coordinate is invalid.
///
/// # Example
/// ```
/// use studybites_geo::{distance_miles, Coordinate};
///
/// let equator_origin = Coordinate::new(0.0, 0.0);
/// let one_degree_east = Coordinate::new(0.0, 1.0);
///
/// let miles = distance_miles(&equator_origin, &one_degree_east);
/// assert!((miles - 69.17).abs() < 0.5);
/// ```
#[inline]
pub fn distance_miles(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}
