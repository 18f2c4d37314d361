//! Food catalog endpoints
//!
//! Maps to `GET /api/food-options`, which returns one page (at most four
//! entries) of the food category catalog, filtered by the user's preference
//! toggles and scoped to their location.

use crate::client::StudyBitesClient;
use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};

/// Food catalog API interface
#[derive(Clone)]
pub struct FoodsApi {
    client: StudyBitesClient,
}

impl FoodsApi {
    /// Create a new foods API interface
    pub(crate) fn new(client: StudyBitesClient) -> Self {
        Self { client }
    }

    /// Fetch one page of food options
    ///
    /// GET /api/food-options?lat&lng&page&vegan&wheelchair&budget&kid_friendly
    pub async fn page(&self, params: &FoodPageParams) -> ApiResult<FoodOptionsPage> {
        let mut query: Vec<(&str, String)> = Vec::new();

        if let Some(lat) = params.lat {
            query.push(("lat", lat.to_string()));
        }
        if let Some(lng) = params.lng {
            query.push(("lng", lng.to_string()));
        }
        query.push(("page", params.page.to_string()));
        query.push(("vegan", params.preferences.vegan.to_string()));
        query.push(("wheelchair", params.preferences.wheelchair.to_string()));
        query.push(("budget", params.preferences.budget.to_string()));
        query.push(("kid_friendly", params.preferences.kid_friendly.to_string()));

        let response: FoodOptionsResponse =
            self.client.get_query("api/food-options", &query).await?;

        if response.success {
            Ok(FoodOptionsPage {
                foods: response.foods,
                current_page: response.current_page,
                total_pages: response.total_pages.max(1),
            })
        } else {
            Err(ApiError::backend(
                response
                    .error
                    .unwrap_or_else(|| "Failed to load food options".to_string()),
            ))
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// User-controlled filter toggles, read at request time.
///
/// Defaults match the page's initial state: everything enabled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PreferenceSet {
    /// Prefer venues with vegan options
    pub vegan: bool,
    /// Require wheelchair accessibility
    pub wheelchair: bool,
    /// Prefer budget-friendly venues
    pub budget: bool,
    /// Prefer kid-friendly venues
    pub kid_friendly: bool,
}

impl Default for PreferenceSet {
    fn default() -> Self {
        Self {
            vegan: true,
            wheelchair: true,
            budget: true,
            kid_friendly: true,
        }
    }
}

/// Parameters for fetching a catalog page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodPageParams {
    /// Latitude scoping the catalog, when location is known
    pub lat: Option<f64>,
    /// Longitude scoping the catalog, when location is known
    pub lng: Option<f64>,
    /// Zero-based page index
    pub page: usize,
    /// Filter toggles
    #[serde(default)]
    pub preferences: PreferenceSet,
}

impl FoodPageParams {
    /// Create new params with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope the catalog to a location
    #[must_use]
    pub fn with_location(mut self, lat: f64, lng: f64) -> Self {
        self.lat = Some(lat);
        self.lng = Some(lng);
        self
    }

    /// Set the page index
    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Set the preference toggles
    #[must_use]
    pub fn with_preferences(mut self, preferences: PreferenceSet) -> Self {
        self.preferences = preferences;
        self
    }
}

/// Raw food options response
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FoodOptionsResponse {
    success: bool,
    #[serde(default)]
    foods: Vec<FoodCategory>,
    #[serde(default)]
    current_page: usize,
    #[serde(default)]
    total_pages: usize,
    #[serde(default)]
    error: Option<String>,
}

/// One successfully fetched catalog page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodOptionsPage {
    /// Catalog entries for this page (the backend sends at most four)
    pub foods: Vec<FoodCategory>,
    /// Zero-based index of this page
    pub current_page: usize,
    /// Total page count, at least 1
    pub total_pages: usize,
}

/// A read-only food category catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodCategory {
    /// Backend identifier, passed to the recommendation endpoint
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description shown on the card
    #[serde(default)]
    pub desc: Option<String>,
    /// Card image URL, when the backend provides one
    #[serde(default)]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_builder() {
        let params = FoodPageParams::new()
            .with_location(42.3149, -81.1496)
            .with_page(2);

        assert_eq!(params.lat, Some(42.3149));
        assert_eq!(params.lng, Some(-81.1496));
        assert_eq!(params.page, 2);
        assert!(params.preferences.vegan);
    }

    #[test]
    fn test_preferences_default_all_on() {
        let prefs = PreferenceSet::default();
        assert!(prefs.vegan && prefs.wheelchair && prefs.budget && prefs.kid_friendly);
    }

    #[test]
    fn test_response_deserialize() {
        let json = r#"{
            "success": true,
            "foods": [
                {"id": "pizza", "name": "Pizza", "desc": "Cheesy slices"},
                {"id": "sushi", "name": "Sushi", "image": "https://cdn.example.com/sushi.jpg"}
            ],
            "current_page": 1,
            "total_pages": 3
        }"#;

        let response: FoodOptionsResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.foods.len(), 2);
        assert_eq!(response.foods[0].id, "pizza");
        assert_eq!(response.foods[1].image.as_deref(), Some("https://cdn.example.com/sushi.jpg"));
        assert_eq!(response.total_pages, 3);
    }

    #[test]
    fn test_error_response_deserialize() {
        let json = r#"{"success": false, "error": "catalog unavailable"}"#;
        let response: FoodOptionsResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("catalog unavailable"));
        assert!(response.foods.is_empty());
    }
}
