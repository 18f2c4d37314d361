//! Position source for the CLI.

use studybites_app::{LocationError, Position, PositionProvider};

/// Supplies the coordinate given on the command line, when there is one.
///
/// Without a `--lat`/`--lng` pair the CLI has no position source, so
/// acquisition reports unavailable and the locator falls back to the default
/// location.
pub struct FlagPositionProvider {
    position: Option<Position>,
}

impl FlagPositionProvider {
    /// Build from the global latitude/longitude flags. Both must be present
    /// for a position to exist.
    pub fn new(lat: Option<f64>, lng: Option<f64>) -> Self {
        let position = match (lat, lng) {
            (Some(latitude), Some(longitude)) => Some(Position {
                latitude,
                longitude,
                accuracy: None,
            }),
            _ => None,
        };
        Self { position }
    }
}

impl PositionProvider for FlagPositionProvider {
    async fn current_position(&self) -> Result<Position, LocationError> {
        self.position.ok_or(LocationError::Unavailable)
    }
}
