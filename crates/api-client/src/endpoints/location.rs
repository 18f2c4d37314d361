//! Server-side location update endpoint
//!
//! Maps to `POST /api/update-location`. The push is best-effort: the caller
//! is expected to ignore failures and proceed, so the response body is never
//! inspected.

use crate::client::StudyBitesClient;
use crate::error::ApiResult;
use serde::Serialize;
use studybites_geo::Coordinate;

/// Location update API interface
#[derive(Clone)]
pub struct LocationApi {
    client: StudyBitesClient,
}

/// Location push body
#[derive(Debug, Clone, Copy, Serialize)]
struct UpdateLocationRequest {
    lat: f64,
    lng: f64,
}

impl LocationApi {
    /// Create a new location API interface
    pub(crate) fn new(client: StudyBitesClient) -> Self {
        Self { client }
    }

    /// Push the user's coordinate to the backend
    ///
    /// POST /api/update-location
    pub async fn update(&self, coordinate: &Coordinate) -> ApiResult<()> {
        let body = UpdateLocationRequest {
            lat: coordinate.latitude,
            lng: coordinate.longitude,
        };
        self.client
            .post_ignore_response("api/update-location", &body)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_shape() {
        let body = UpdateLocationRequest {
            lat: 42.3149,
            lng: -81.1496,
        };
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(json["lat"], 42.3149);
        assert_eq!(json["lng"], -81.1496);
        assert!(json.get("accuracy").is_none());
    }
}
