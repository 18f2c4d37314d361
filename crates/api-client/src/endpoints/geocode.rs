//! Third-party reverse-geocoding service
//!
//! Best-effort lookup that replaces raw coordinates with a human-readable
//! place name. Failures here are silent and non-fatal; coordinates remain the
//! source of truth for distance math.

use crate::client::StudyBitesClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};

/// Reverse-geocoding API interface
#[derive(Clone)]
pub struct GeocodeApi {
    client: StudyBitesClient,
}

impl GeocodeApi {
    /// Create a new geocode API interface
    pub(crate) fn new(client: StudyBitesClient) -> Self {
        Self { client }
    }

    /// Reverse-geocode a coordinate into locality information
    pub async fn reverse(&self, lat: f64, lng: f64) -> ApiResult<ReverseGeocodeResponse> {
        let url = format!(
            "{}?latitude={lat}&longitude={lng}&localityLanguage=en",
            self.client.config().geocode_url
        );
        self.client.get_url(&url).await
    }
}

/// Locality information returned by the reverse geocoder
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReverseGeocodeResponse {
    /// City name
    #[serde(default)]
    pub city: Option<String>,
    /// Province/state name
    #[serde(rename = "principalSubdivision", default)]
    pub principal_subdivision: Option<String>,
    /// Locality, when city information is unavailable
    #[serde(default)]
    pub locality: Option<String>,
    /// Country name, as a last resort
    #[serde(rename = "countryName", default)]
    pub country_name: Option<String>,
}

impl ReverseGeocodeResponse {
    /// Pick the most specific non-empty place name available.
    ///
    /// Preference order: "City, Region", then locality, then country.
    pub fn place_name(&self) -> Option<String> {
        fn non_empty(s: &Option<String>) -> Option<&str> {
            s.as_deref().filter(|s| !s.is_empty())
        }

        if let (Some(city), Some(region)) =
            (non_empty(&self.city), non_empty(&self.principal_subdivision))
        {
            return Some(format!("{city}, {region}"));
        }
        if let Some(locality) = non_empty(&self.locality) {
            return Some(locality.to_string());
        }
        non_empty(&self.country_name).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(
        city: Option<&str>,
        region: Option<&str>,
        locality: Option<&str>,
        country: Option<&str>,
    ) -> ReverseGeocodeResponse {
        ReverseGeocodeResponse {
            city: city.map(String::from),
            principal_subdivision: region.map(String::from),
            locality: locality.map(String::from),
            country_name: country.map(String::from),
        }
    }

    #[test]
    fn test_city_and_region_preferred() {
        let r = response(Some("St. Thomas"), Some("Ontario"), Some("x"), Some("Canada"));
        assert_eq!(r.place_name().unwrap(), "St. Thomas, Ontario");
    }

    #[test]
    fn test_locality_fallback() {
        let r = response(Some("St. Thomas"), None, Some("Elgin County"), Some("Canada"));
        assert_eq!(r.place_name().unwrap(), "Elgin County");
    }

    #[test]
    fn test_country_fallback() {
        let r = response(None, None, None, Some("Canada"));
        assert_eq!(r.place_name().unwrap(), "Canada");
    }

    #[test]
    fn test_empty_strings_treated_as_missing() {
        let r = response(Some(""), Some(""), Some(""), Some(""));
        assert!(r.place_name().is_none());
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "city": "St. Thomas",
            "principalSubdivision": "Ontario",
            "countryName": "Canada"
        }"#;
        let r: ReverseGeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.principal_subdivision.as_deref(), Some("Ontario"));
        assert_eq!(r.country_name.as_deref(), Some("Canada"));
    }
}
