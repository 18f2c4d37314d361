//! Restaurant recommendation endpoint
//!
//! Maps to `GET /api/restaurants`, which returns a single restaurant record
//! matching the selected food category. The payload is opaque to the client:
//! it is only ever projected into display fields, never mutated.

use crate::client::StudyBitesClient;
use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Restaurant recommendation API interface
#[derive(Clone)]
pub struct RestaurantsApi {
    client: StudyBitesClient,
}

impl RestaurantsApi {
    /// Create a new restaurants API interface
    pub(crate) fn new(client: StudyBitesClient) -> Self {
        Self { client }
    }

    /// Fetch a recommendation for the selected food category
    ///
    /// GET /api/restaurants?food_id&session_id
    pub async fn recommend(&self, food_id: &str, session_id: &str) -> ApiResult<RestaurantRecord> {
        let query = [
            ("food_id", food_id.to_string()),
            ("session_id", session_id.to_string()),
        ];
        let response: RestaurantResponse =
            self.client.get_query("api/restaurants", &query).await?;

        match response {
            RestaurantResponse {
                success: true,
                restaurant: Some(restaurant),
                ..
            } => Ok(restaurant),
            RestaurantResponse { error, .. } => Err(ApiError::backend(error.unwrap_or_else(
                || "No restaurants found matching your criteria.".to_string(),
            ))),
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Raw recommendation response
#[derive(Debug, Clone, Deserialize)]
struct RestaurantResponse {
    success: bool,
    #[serde(default)]
    restaurant: Option<RestaurantRecord>,
    #[serde(default)]
    error: Option<String>,
}

/// A restaurant record as delivered by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantRecord {
    /// Backend entity identifier
    #[serde(alias = "entity_id")]
    pub id: String,
    /// Display name
    #[serde(default = "default_name")]
    pub name: String,
    /// Descriptive properties
    #[serde(default)]
    pub properties: RestaurantProperties,
    /// Venue coordinates, when known
    #[serde(default)]
    pub location: Option<GeoPoint>,
    /// Categorical labels used for filtering and icon/emoji selection
    #[serde(default)]
    pub tags: Vec<Tag>,
}

fn default_name() -> String {
    "Restaurant".to_string()
}

/// Venue coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

/// Descriptive properties of a restaurant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantProperties {
    /// Street address
    #[serde(default)]
    pub address: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Website URL
    #[serde(default)]
    pub website: Option<String>,
    /// Weekly hours, keyed by full weekday name ("Monday")
    #[serde(default)]
    pub hours: Option<HoursTable>,
    /// Price tier 1-4
    #[serde(default)]
    pub price_level: Option<u8>,
    /// Aggregate rating; the backend sends this as a number or a string
    #[serde(default, deserialize_with = "rating_from_any")]
    pub business_rating: Option<f64>,
    /// Review count backing the rating
    #[serde(default)]
    pub review_count: Option<u64>,
    /// Hero image
    #[serde(default)]
    pub image: Option<ImageRef>,
    /// What the venue is known for, most relevant first
    #[serde(default)]
    pub good_for: Vec<GoodFor>,
}

/// Weekly hours: weekday name to open/close slots for that day
pub type HoursTable = HashMap<String, Vec<DaySlot>>;

/// One opening slot within a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlot {
    /// Opening time, "HH:MM" with an optional leading "T"
    #[serde(default)]
    pub opens: Option<String>,
    /// Closing time, same format as `opens`
    #[serde(default)]
    pub closes: Option<String>,
    /// Marked closed for the whole day
    #[serde(default)]
    pub closed: bool,
}

/// Image reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Image URL
    pub url: String,
}

/// A "good for" entry describing what the venue is known for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodFor {
    /// Tag identifier, usable in the emoji lookup table
    pub id: String,
    /// Display name ("Casual dining")
    pub name: String,
}

/// A categorical label attached to a restaurant record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Fully qualified tag id ("urn:tag:genre:restaurant:pizza")
    pub tag_id: String,
    /// Tag namespace ("urn:tag:accessibility")
    #[serde(rename = "type")]
    pub tag_type: String,
    /// Display name
    pub name: String,
}

/// Accepts a rating encoded as a JSON number or a numeric string.
fn rating_from_any<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserialize() {
        let json = r#"{
            "entity_id": "rest-42",
            "name": "Tony's Pizzeria",
            "properties": {
                "address": "123 Talbot St",
                "phone": "+1 519-555-0123",
                "website": "https://tonys.example.com",
                "price_level": 2,
                "business_rating": 4.5,
                "review_count": 321,
                "good_for": [{"id": "urn:tag:genre:restaurant:pizza", "name": "Pizza place"}],
                "hours": {
                    "Monday": [{"opens": "T09:00", "closes": "T17:00"}]
                }
            },
            "location": {"lat": 42.3149, "lon": -81.1496},
            "tags": [
                {"tag_id": "urn:tag:genre:restaurant:pizza", "type": "urn:tag:genre", "name": "Pizza"}
            ]
        }"#;

        let record: RestaurantRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "rest-42");
        assert_eq!(record.name, "Tony's Pizzeria");
        assert_eq!(record.properties.business_rating, Some(4.5));
        assert_eq!(record.properties.price_level, Some(2));
        assert_eq!(record.location.unwrap().lat, 42.3149);
        assert_eq!(record.tags[0].tag_type, "urn:tag:genre");
        let monday = &record.properties.hours.unwrap()["Monday"];
        assert_eq!(monday[0].opens.as_deref(), Some("T09:00"));
    }

    #[test]
    fn test_rating_as_string() {
        let json = r#"{"business_rating": "4.2"}"#;
        let props: RestaurantProperties = serde_json::from_str(json).unwrap();
        assert_eq!(props.business_rating, Some(4.2));
    }

    #[test]
    fn test_rating_unparseable_is_none() {
        let json = r#"{"business_rating": "great"}"#;
        let props: RestaurantProperties = serde_json::from_str(json).unwrap();
        assert_eq!(props.business_rating, None);
    }

    #[test]
    fn test_minimal_record() {
        let json = r#"{"id": "rest-1", "name": "Diner"}"#;
        let record: RestaurantRecord = serde_json::from_str(json).unwrap();
        assert!(record.location.is_none());
        assert!(record.tags.is_empty());
        assert!(record.properties.hours.is_none());
    }

    #[test]
    fn test_failure_response() {
        let json = r#"{"success": false, "error": "no match"}"#;
        let response: RestaurantResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert!(response.restaurant.is_none());
        assert_eq!(response.error.as_deref(), Some("no match"));
    }
}
