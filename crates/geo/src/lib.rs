//! Geospatial utilities for StudyBites.
//!
//! This crate provides:
//! - The [`Coordinate`] type shared by the API client and the app layer
//! - Haversine distance calculations in miles
//! - The fallback location used when device geolocation is unavailable
//!
//! # Example
//!
//! ```
//! use studybites_geo::{distance_miles, Coordinate};
//!
//! let st_thomas = Coordinate::new(42.3149, -81.1496);
//! let london_on = Coordinate::new(42.9849, -81.2453);
//!
//! let miles = distance_miles(&st_thomas, &london_on);
//! assert!((miles - 46.0).abs() < 2.0); // ~46 miles
//! ```

mod haversine;

pub use haversine::{EARTH_RADIUS_MILES, distance_miles};

/// A geographic coordinate with latitude and longitude.
///
/// `accuracy` is the device-reported accuracy radius in meters, when known.
/// `is_default` marks coordinates that came from the fallback location rather
/// than the device.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
    /// Device-reported accuracy in meters, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    /// True when this is the hardcoded fallback location
    #[serde(default)]
    pub is_default: bool,
}

/// Fallback location used when geolocation is denied, unavailable, or times
/// out: St. Thomas, Ontario.
pub const DEFAULT_LOCATION: Coordinate = Coordinate {
    latitude: 42.3149,
    longitude: -81.1496,
    accuracy: None,
    is_default: true,
};

/// Human-readable name for [`DEFAULT_LOCATION`].
pub const DEFAULT_LOCATION_NAME: &str = "St. Thomas, ON";

impl Coordinate {
    /// Creates a new device coordinate.
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: None,
            is_default: false,
        }
    }

    /// Creates a coordinate with a device-reported accuracy.
    #[inline]
    pub fn with_accuracy(latitude: f64, longitude: f64, accuracy: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: Some(accuracy),
            is_default: false,
        }
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}
