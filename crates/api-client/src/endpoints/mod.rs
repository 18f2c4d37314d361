//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for a specific set of endpoints.
//!
//! | Module | Endpoint | Description |
//! |--------|----------|-------------|
//! | `foods` | `GET /api/food-options` | Paged food category catalog |
//! | `restaurants` | `GET /api/restaurants` | Restaurant recommendation for a food |
//! | `location` | `POST /api/update-location` | Best-effort server-side location push |
//! | `analytics` | `POST /api/analytics/restaurant-view` | Fire-and-forget view tracking |
//! | `geocode` | third-party reverse geocoder | Human-readable place names |

pub mod analytics;
pub mod foods;
pub mod geocode;
pub mod location;
pub mod restaurants;

pub use analytics::AnalyticsApi;
pub use foods::FoodsApi;
pub use geocode::GeocodeApi;
pub use location::LocationApi;
pub use restaurants::RestaurantsApi;
