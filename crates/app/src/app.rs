//! Session orchestrator.
//!
//! [`App`] ties the locator, pager, pipeline, and presenter together and owns
//! the per-session state: the acquired coordinate, the current display model,
//! the notice queue, and the last user intent for manual replay. It is UI
//! agnostic; the CLI (or any other surface) drives it and renders what it
//! exposes.

use crate::locator::{GeoLocator, PositionProvider};
use crate::notify::Notice;
use crate::pager::FoodCatalogPager;
use crate::pipeline::{Backend, FetchError, RecommendationRequest, RequestPipeline};
use crate::presenter::{DisplayModel, project};
use chrono::{Datelike, Local};
use studybites_api_client::endpoints::analytics::RestaurantViewEvent;
use studybites_api_client::endpoints::foods::{FoodPageParams, PreferenceSet};
use studybites_geo::{Coordinate, DEFAULT_LOCATION_NAME};
use tracing::{debug, warn};

/// The last user intent, replayed manually on retry or reconnect. Nothing
/// retries automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LastAction {
    /// A catalog page load
    LoadPage(usize),
    /// A food selection and its recommendation fetch
    SelectFood(String),
}

/// Per-session application state and the operations that mutate it.
pub struct App<B, P> {
    session_id: String,
    preferences: PreferenceSet,
    pager: FoodCatalogPager,
    locator: GeoLocator<P>,
    pipeline: RequestPipeline<B>,
    coordinate: Option<Coordinate>,
    place_name: Option<String>,
    display: Option<DisplayModel>,
    last_action: Option<LastAction>,
    notices: Vec<Notice>,
}

impl<B: Backend, P: PositionProvider> App<B, P> {
    /// Create an app over the given backend and position provider.
    pub fn new(backend: B, provider: P, session_id: String) -> Self {
        Self {
            session_id,
            preferences: PreferenceSet::default(),
            pager: FoodCatalogPager::new(),
            locator: GeoLocator::new(provider),
            pipeline: RequestPipeline::new(backend),
            coordinate: None,
            place_name: None,
            display: None,
            last_action: None,
            notices: Vec::new(),
        }
    }

    /// Initial load: acquire a location, then the first catalog page.
    pub async fn start(&mut self) {
        self.acquire_location().await;
        self.load_page(0).await;
    }

    /// Acquire a coordinate and resolve a place name for it.
    ///
    /// A fallback gets the fixed place name and queues the retry prompt; a
    /// device fix gets a best-effort reverse geocode.
    pub async fn acquire_location(&mut self) {
        let acquired = self.locator.acquire().await;
        let coordinate = acquired.coordinate();
        self.coordinate = Some(coordinate);

        if acquired.is_fallback() {
            self.place_name = Some(DEFAULT_LOCATION_NAME.to_string());
            self.notices.push(Notice::location_prompt());
        } else {
            self.place_name = self
                .pipeline
                .backend()
                .place_name(coordinate.latitude, coordinate.longitude)
                .await;
        }
    }

    /// Re-ask the device for a position, bypassing the cached fix. Driven by
    /// the location prompt.
    pub async fn retry_location(&mut self) {
        self.locator.invalidate();
        self.acquire_location().await;
    }

    /// Load one catalog page. A load already in flight makes this a no-op.
    pub async fn load_page(&mut self, page: usize) {
        if !self.pager.begin_load() {
            debug!(page, "Page load already in flight, ignoring");
            return;
        }
        self.last_action = Some(LastAction::LoadPage(page));

        let mut params = FoodPageParams::new()
            .with_page(page)
            .with_preferences(self.preferences);
        if let Some(coordinate) = self.coordinate {
            params = params.with_location(coordinate.latitude, coordinate.longitude);
        }

        match self.pipeline.backend().food_page(&params).await {
            Ok(fetched) => self.pager.apply(fetched),
            Err(e) => {
                warn!(page, error = %e, "Catalog page load failed");
                self.pager.load_failed();
                self.notices
                    .push(Notice::error_banner("Failed to load food options"));
            }
        }
    }

    /// Advance to the next page. No-op at the last page or mid-load.
    pub async fn next_page(&mut self) {
        if let Some(target) = self.pager.next_target() {
            self.display = None;
            self.load_page(target).await;
        }
    }

    /// Go back one page. No-op at the first page or mid-load.
    pub async fn previous_page(&mut self) {
        if let Some(target) = self.pager.previous_target() {
            self.display = None;
            self.load_page(target).await;
        }
    }

    /// Select a food category and fetch a recommendation for it.
    ///
    /// An id not on the current page is ignored. A stale response (one whose
    /// generation was superseded by a newer selection) is dropped instead of
    /// rendered. A busy pipeline swallows the selection; the toast already
    /// told the user what they picked, and the outstanding fetch wins.
    pub async fn select_food(&mut self, food_id: &str) {
        let Some(category) = self.pager.select(food_id) else {
            debug!(food_id, "Selection not on current page, ignoring");
            return;
        };
        let name = category.name.clone();
        self.notices.push(Notice::toast(format!("Selected {name}")));
        self.last_action = Some(LastAction::SelectFood(food_id.to_string()));

        let request = RecommendationRequest {
            food_id: food_id.to_string(),
            coordinate: self.coordinate,
            session_id: self.session_id.clone(),
            preferences: self.preferences,
        };

        match self.pipeline.fetch_recommendation(&request).await {
            Ok(outcome) => {
                if !self.pipeline.is_current(outcome.generation) {
                    debug!(food_id, "Dropping stale recommendation response");
                    return;
                }
                let model = project(
                    &outcome.restaurant,
                    self.coordinate.as_ref(),
                    Local::now().weekday(),
                );
                let event =
                    RestaurantViewEvent::now(&outcome.restaurant.id, food_id, self.coordinate);
                self.pipeline.backend().track_view(&event).await;
                self.display = Some(model);
            }
            Err(FetchError::Busy) => {
                debug!(food_id, "Recommendation fetch already in flight, ignoring");
            }
            Err(FetchError::Api(e)) => {
                warn!(food_id, error = %e, "Recommendation fetch failed");
                self.notices.push(Notice::error_banner(
                    "Failed to load restaurant recommendations. Please try again.",
                ));
            }
        }
    }

    /// Replay the last user intent, if any.
    pub async fn retry_last_action(&mut self) {
        match self.last_action.clone() {
            Some(LastAction::LoadPage(page)) => self.load_page(page).await,
            Some(LastAction::SelectFood(food_id)) => self.select_food(&food_id).await,
            None => {}
        }
    }

    /// Note that connectivity was lost.
    pub fn network_offline(&mut self) {
        self.notices.push(Notice::error_banner(
            "You are offline. Some features may not work.",
        ));
    }

    /// Note that connectivity came back and replay the last intent.
    pub async fn network_online(&mut self) {
        self.notices.push(Notice::toast("Back online!"));
        self.retry_last_action().await;
    }

    /// Replace the preference toggles and reload the catalog from page zero.
    pub async fn set_preferences(&mut self, preferences: PreferenceSet) {
        self.preferences = preferences;
        self.display = None;
        self.load_page(0).await;
    }

    /// Take all queued notices, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// The catalog pager.
    pub fn pager(&self) -> &FoodCatalogPager {
        &self.pager
    }

    /// The current display model, when a recommendation is showing.
    pub fn display(&self) -> Option<&DisplayModel> {
        self.display.as_ref()
    }

    /// The acquired coordinate, once location resolution has run.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    /// Human-readable place name for the acquired coordinate.
    pub fn place_name(&self) -> Option<&str> {
        self.place_name.as_deref()
    }

    /// The session identifier this app was created with.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Current preference toggles.
    pub fn preferences(&self) -> PreferenceSet {
        self.preferences
    }

    /// The last user intent, if any.
    pub fn last_action(&self) -> Option<&LastAction> {
        self.last_action.as_ref()
    }
}
