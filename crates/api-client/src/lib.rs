//! Typed API client for the StudyBites recommendation backend
//!
//! This crate provides a unified HTTP client for the StudyBites backend API
//! (food catalog, restaurant recommendations, location updates, analytics) and
//! the third-party reverse-geocoding service.
//!
//! # Features
//!
//! - **Environment-based configuration**: Load URLs and timeouts from
//!   environment variables
//! - **Session correlation**: Every request carries the browsing session's
//!   `X-Session-ID` header
//! - **Request correlation**: Per-request `X-Request-ID` for tracing
//! - **Explicit timeouts**: The backend fetch timeout is part of the client
//!   configuration rather than left to transport defaults
//!
//! # Example
//!
//! ```rust,no_run
//! use studybites_api_client::{ClientConfig, StudyBitesClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StudyBitesClient::new()?;
//!
//!     let page = client.foods().page(&Default::default()).await?;
//!     println!("{} food options", page.foods.len());
//!
//!     let restaurant = client.restaurants().recommend("pizza", client.session_id()).await?;
//!     println!("Recommended: {}", restaurant.name);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod session;

pub use client::StudyBitesClient;
pub use config::{ClientConfig, Environment};
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::StudyBitesClient;
    pub use crate::config::{ClientConfig, Environment};
    pub use crate::endpoints::{AnalyticsApi, FoodsApi, GeocodeApi, LocationApi, RestaurantsApi};
    pub use crate::error::{ApiError, ApiResult};
}
