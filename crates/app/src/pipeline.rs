//! Recommendation request pipeline.
//!
//! One user action runs one sequential pipeline: push the known coordinate to
//! the backend (best-effort), then fetch a recommendation for the selected
//! food. Two guards keep the UI honest:
//!
//! - a single-flight flag rejects a second fetch while one is outstanding
//! - a generation counter stamps every fetch, so a response that arrives
//!   after a newer user action can be detected and dropped instead of
//!   overwriting the newer selection's display

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use studybites_api_client::StudyBitesClient;
use studybites_api_client::endpoints::analytics::RestaurantViewEvent;
use studybites_api_client::endpoints::foods::{FoodPageParams, FoodOptionsPage, PreferenceSet};
use studybites_api_client::endpoints::restaurants::RestaurantRecord;
use studybites_api_client::error::{ApiError, ApiResult};
use studybites_geo::Coordinate;
use thiserror::Error;
use tracing::debug;

/// The backend surface the pipeline and orchestrator depend on.
///
/// Implemented by [`StudyBitesClient`] for production and by in-memory fakes
/// in tests, which keeps the domain logic testable without a live server.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Fetch one page of the food catalog.
    async fn food_page(&self, params: &FoodPageParams) -> ApiResult<FoodOptionsPage>;

    /// Push the user's coordinate server-side. Best-effort.
    async fn push_location(&self, coordinate: &Coordinate) -> ApiResult<()>;

    /// Fetch a recommendation for the selected food.
    async fn recommend(&self, food_id: &str, session_id: &str) -> ApiResult<RestaurantRecord>;

    /// Track a restaurant view. Fire-and-forget; never fails.
    async fn track_view(&self, event: &RestaurantViewEvent);

    /// Best-effort reverse geocode; `None` when the service has no answer.
    async fn place_name(&self, lat: f64, lng: f64) -> Option<String>;
}

impl Backend for StudyBitesClient {
    async fn food_page(&self, params: &FoodPageParams) -> ApiResult<FoodOptionsPage> {
        self.foods().page(params).await
    }

    async fn push_location(&self, coordinate: &Coordinate) -> ApiResult<()> {
        self.location().update(coordinate).await
    }

    async fn recommend(&self, food_id: &str, session_id: &str) -> ApiResult<RestaurantRecord> {
        self.restaurants().recommend(food_id, session_id).await
    }

    async fn track_view(&self, event: &RestaurantViewEvent) {
        self.analytics().restaurant_view(event).await;
    }

    async fn place_name(&self, lat: f64, lng: f64) -> Option<String> {
        match self.geocode().reverse(lat, lng).await {
            Ok(response) => response.place_name(),
            Err(e) => {
                debug!(error = %e, "Reverse geocoding failed, keeping coordinates");
                None
            }
        }
    }
}

/// Everything a recommendation fetch needs, captured at request time.
#[derive(Debug, Clone)]
pub struct RecommendationRequest {
    /// Selected food category id
    pub food_id: String,
    /// The user coordinate, when one is known
    pub coordinate: Option<Coordinate>,
    /// Session identifier correlating the request server-side
    pub session_id: String,
    /// Filter toggles at the time of the request
    pub preferences: PreferenceSet,
}

/// Token identifying one fetch within the pipeline's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// A completed fetch together with its generation stamp.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Stamp to check against [`RequestPipeline::is_current`] before rendering
    pub generation: Generation,
    /// The recommended restaurant
    pub restaurant: RestaurantRecord,
}

/// Pipeline failures.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A fetch is already outstanding; this one was rejected, not queued
    #[error("a recommendation fetch is already in flight")]
    Busy,
    /// The backend call failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Orchestrates the sequential location-push → recommendation fetch.
pub struct RequestPipeline<B> {
    backend: B,
    generation: AtomicU64,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when a fetch completes by any path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<B: Backend> RequestPipeline<B> {
    /// Create a pipeline over the given backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            generation: AtomicU64::new(0),
            in_flight: AtomicBool::new(false),
        }
    }

    /// The backend this pipeline fetches through.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// True when `generation` belongs to the most recent fetch. A stale
    /// response must not overwrite a newer selection's display.
    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.generation.load(Ordering::Acquire)
    }

    /// Run the pipeline once.
    ///
    /// Steps are sequential and short-circuit on failure, except the location
    /// push which is best-effort: its failure is logged and ignored. No
    /// retry happens here; the caller replays the intent manually.
    pub async fn fetch_recommendation(
        &self,
        request: &RecommendationRequest,
    ) -> Result<FetchOutcome, FetchError> {
        if self.in_flight.swap(true, Ordering::Acquire) {
            return Err(FetchError::Busy);
        }
        let _guard = InFlightGuard(&self.in_flight);

        let generation = Generation(self.generation.fetch_add(1, Ordering::AcqRel) + 1);

        if let Some(coordinate) = &request.coordinate {
            if let Err(e) = self.backend.push_location(coordinate).await {
                debug!(error = %e, "Location push failed, proceeding without it");
            }
        }

        let restaurant = self
            .backend
            .recommend(&request.food_id, &request.session_id)
            .await?;

        Ok(FetchOutcome {
            generation,
            restaurant,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use tokio::time::{Duration, sleep};

    #[derive(Default)]
    struct FakeBackend {
        push_calls: AtomicUsize,
        recommend_calls: AtomicUsize,
        fail_push: bool,
        fail_recommend: bool,
        delay: Option<Duration>,
    }

    fn record(id: &str) -> RestaurantRecord {
        serde_json::from_str(&format!(r#"{{"id": "{id}", "name": "Place"}}"#)).unwrap()
    }

    impl Backend for &FakeBackend {
        async fn food_page(&self, _params: &FoodPageParams) -> ApiResult<FoodOptionsPage> {
            unimplemented!("not exercised here")
        }

        async fn push_location(&self, _coordinate: &Coordinate) -> ApiResult<()> {
            self.push_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_push {
                Err(ApiError::api_response(500, "down"))
            } else {
                Ok(())
            }
        }

        async fn recommend(
            &self,
            food_id: &str,
            _session_id: &str,
        ) -> ApiResult<RestaurantRecord> {
            self.recommend_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                sleep(delay).await;
            }
            if self.fail_recommend {
                Err(ApiError::backend("no match"))
            } else {
                Ok(record(food_id))
            }
        }

        async fn track_view(&self, _event: &RestaurantViewEvent) {}

        async fn place_name(&self, _lat: f64, _lng: f64) -> Option<String> {
            None
        }
    }

    fn request(food_id: &str, coordinate: Option<Coordinate>) -> RecommendationRequest {
        RecommendationRequest {
            food_id: food_id.to_string(),
            coordinate,
            session_id: "session_0_abcdefg".to_string(),
            preferences: PreferenceSet::default(),
        }
    }

    #[tokio::test]
    async fn test_pushes_location_before_fetch() {
        let backend = FakeBackend::default();
        let pipeline = RequestPipeline::new(&backend);

        let outcome = pipeline
            .fetch_recommendation(&request("pizza", Some(Coordinate::new(42.3, -81.1))))
            .await
            .unwrap();

        assert_eq!(outcome.restaurant.id, "pizza");
        assert_eq!(backend.push_calls.load(Ordering::SeqCst), 1);
        assert_eq!(backend.recommend_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_no_location_skips_push() {
        let backend = FakeBackend::default();
        let pipeline = RequestPipeline::new(&backend);

        pipeline
            .fetch_recommendation(&request("pizza", None))
            .await
            .unwrap();
        assert_eq!(backend.push_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_push_failure_is_ignored() {
        let backend = FakeBackend {
            fail_push: true,
            ..Default::default()
        };
        let pipeline = RequestPipeline::new(&backend);

        let outcome = pipeline
            .fetch_recommendation(&request("pizza", Some(Coordinate::new(42.3, -81.1))))
            .await;
        assert!(outcome.is_ok());
    }

    #[tokio::test]
    async fn test_recommend_failure_propagates() {
        let backend = FakeBackend {
            fail_recommend: true,
            ..Default::default()
        };
        let pipeline = RequestPipeline::new(&backend);

        let result = pipeline.fetch_recommendation(&request("pizza", None)).await;
        assert!(matches!(result, Err(FetchError::Api(_))));
        // The guard is released so a manual retry can proceed.
        assert!(
            pipeline
                .fetch_recommendation(&request("pizza", None))
                .await
                .is_err()
        );
        assert_eq!(backend.recommend_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_newer_fetch_invalidates_older_generation() {
        let backend = FakeBackend::default();
        let pipeline = RequestPipeline::new(&backend);

        let first = pipeline
            .fetch_recommendation(&request("pizza", None))
            .await
            .unwrap();
        assert!(pipeline.is_current(first.generation));

        let second = pipeline
            .fetch_recommendation(&request("sushi", None))
            .await
            .unwrap();
        assert!(!pipeline.is_current(first.generation));
        assert!(pipeline.is_current(second.generation));
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_fetch_rejected() {
        let backend = FakeBackend {
            delay: Some(Duration::from_secs(2)),
            ..Default::default()
        };
        let pipeline = RequestPipeline::new(&backend);

        let pizza = request("pizza", None);
        let sushi = request("sushi", None);
        let slow = pipeline.fetch_recommendation(&pizza);
        let second = pipeline.fetch_recommendation(&sushi);
        let (slow, second) = tokio::join!(slow, second);

        assert!(slow.is_ok());
        assert!(matches!(second, Err(FetchError::Busy)));
        assert_eq!(backend.recommend_calls.load(Ordering::SeqCst), 1);
    }
}
