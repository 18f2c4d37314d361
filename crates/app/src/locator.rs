//! Geolocation acquisition with fallback policy.
//!
//! The device is abstracted behind [`PositionProvider`] so the CLI can supply
//! coordinates from flags or environment variables and tests can supply
//! fakes. Acquisition is bounded at 10 seconds; a successful fix is cached
//! and reused for 5 minutes. Every failure mode degrades to the fixed
//! [`DEFAULT_LOCATION`](studybites_geo::DEFAULT_LOCATION) rather than
//! surfacing an error to the user.

use studybites_geo::{Coordinate, DEFAULT_LOCATION};
use thiserror::Error;
use tokio::time::{Duration, Instant, timeout};
use tracing::debug;

/// Upper bound on a single acquisition attempt.
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// A cached fix younger than this is reused without asking the device again.
pub const MAX_FIX_AGE: Duration = Duration::from_secs(300);

/// Why device geolocation was not available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The user denied the permission prompt
    #[error("Location denied")]
    Denied,
    /// The device could not produce a position
    #[error("Location unavailable")]
    Unavailable,
    /// The device did not answer within the acquisition timeout
    #[error("Location timeout")]
    Timeout,
}

/// A raw device-reported position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Accuracy radius in meters, when reported
    pub accuracy: Option<f64>,
}

/// Source of device positions.
#[allow(async_fn_in_trait)]
pub trait PositionProvider {
    /// Ask the device for its current position.
    async fn current_position(&self) -> Result<Position, LocationError>;
}

/// Outcome of an acquisition attempt. There is always a usable coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Acquired {
    /// A device-reported (or freshly cached) fix
    Device(Coordinate),
    /// The fallback location, with the reason the device was not used
    Fallback {
        /// The fallback coordinate, tagged `is_default`
        coordinate: Coordinate,
        /// Why acquisition failed
        cause: LocationError,
    },
}

impl Acquired {
    /// The coordinate to use, regardless of origin.
    pub fn coordinate(&self) -> Coordinate {
        match self {
            Self::Device(c) => *c,
            Self::Fallback { coordinate, .. } => *coordinate,
        }
    }

    /// True when the fallback location was used.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Acquires device coordinates, falling back to the default location.
///
/// `acquire` takes `&mut self`, so a locator can only ever run one
/// acquisition at a time.
pub struct GeoLocator<P> {
    provider: P,
    cached: Option<(Coordinate, Instant)>,
}

impl<P: PositionProvider> GeoLocator<P> {
    /// Create a locator over the given provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cached: None,
        }
    }

    /// Acquire a coordinate.
    ///
    /// Reuses a cached device fix younger than [`MAX_FIX_AGE`]; otherwise
    /// asks the provider, bounded by [`ACQUIRE_TIMEOUT`]. Denial,
    /// unavailability, and timeout all fall back to the default location so
    /// the caller can keep going and offer a retry prompt.
    pub async fn acquire(&mut self) -> Acquired {
        if let Some((coordinate, at)) = self.cached {
            if at.elapsed() < MAX_FIX_AGE {
                debug!(age_secs = at.elapsed().as_secs(), "Reusing cached fix");
                return Acquired::Device(coordinate);
            }
        }

        match timeout(ACQUIRE_TIMEOUT, self.provider.current_position()).await {
            Ok(Ok(position)) => {
                let coordinate = match position.accuracy {
                    Some(accuracy) => Coordinate::with_accuracy(
                        position.latitude,
                        position.longitude,
                        accuracy,
                    ),
                    None => Coordinate::new(position.latitude, position.longitude),
                };
                self.cached = Some((coordinate, Instant::now()));
                Acquired::Device(coordinate)
            }
            Ok(Err(cause)) => {
                debug!(%cause, "Geolocation failed, using default location");
                Acquired::Fallback {
                    coordinate: DEFAULT_LOCATION,
                    cause,
                }
            }
            Err(_) => {
                debug!("Geolocation timed out, using default location");
                Acquired::Fallback {
                    coordinate: DEFAULT_LOCATION,
                    cause: LocationError::Timeout,
                }
            }
        }
    }

    /// Drop any cached fix so the next acquisition asks the device again.
    /// Used by the retry prompt.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
