//! Analytics endpoints
//!
//! Maps to `POST /api/analytics/restaurant-view`. Tracking is fire-and-forget:
//! failures are logged at debug level and never surfaced to the caller.

use crate::client::StudyBitesClient;
use chrono::{DateTime, Utc};
use serde::Serialize;
use studybites_geo::Coordinate;
use tracing::debug;

/// Analytics API interface
#[derive(Clone)]
pub struct AnalyticsApi {
    client: StudyBitesClient,
}

/// A restaurant-view tracking event
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantViewEvent {
    /// Identifier of the displayed restaurant
    pub restaurant_id: String,
    /// Food category the recommendation was requested for
    pub food_id: String,
    /// When the restaurant was displayed
    pub timestamp: DateTime<Utc>,
    /// The user coordinate at display time, when known
    pub location: Option<Coordinate>,
}

impl RestaurantViewEvent {
    /// Create an event stamped with the current time
    pub fn now(restaurant_id: &str, food_id: &str, location: Option<Coordinate>) -> Self {
        Self {
            restaurant_id: restaurant_id.to_string(),
            food_id: food_id.to_string(),
            timestamp: Utc::now(),
            location,
        }
    }
}

impl AnalyticsApi {
    /// Create a new analytics API interface
    pub(crate) fn new(client: StudyBitesClient) -> Self {
        Self { client }
    }

    /// Track that a restaurant was displayed. Never fails.
    ///
    /// POST /api/analytics/restaurant-view
    pub async fn restaurant_view(&self, event: &RestaurantViewEvent) {
        if let Err(e) = self
            .client
            .post_ignore_response("api/analytics/restaurant-view", event)
            .await
        {
            debug!(restaurant_id = %event.restaurant_id, error = %e, "Analytics tracking failed");
        }
    }
}
