//! StudyBites domain logic
//!
//! Everything between the raw backend payloads and the rendered screen lives
//! here, independent of any particular UI:
//!
//! - [`locator`]: device geolocation with timeout, caching, and the fixed
//!   fallback location
//! - [`pager`]: the paged food category catalog with navigation guards
//! - [`pipeline`]: the sequential location-push → recommendation fetch, with
//!   request-generation tokens so a stale response never overwrites a newer
//!   selection
//! - [`presenter`]: pure projection of a restaurant record into display
//!   strings (emoji, stars, price tier, today's hours, distance, badges)
//! - [`notify`]: toast/banner/prompt notices with their auto-expiry windows
//! - [`app`]: the orchestrator tying the pieces together and holding the
//!   per-session state

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod locator;
pub mod notify;
pub mod pager;
pub mod pipeline;
pub mod presenter;

pub use app::{App, LastAction};
pub use locator::{Acquired, GeoLocator, LocationError, Position, PositionProvider};
pub use notify::{Notice, NoticeKind};
pub use pager::FoodCatalogPager;
pub use pipeline::{Backend, FetchError, Generation, RecommendationRequest, RequestPipeline};
pub use presenter::{DisplayModel, FeatureBadge, StarRating, project};
