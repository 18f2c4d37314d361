//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{AnalyticsApi, FoodsApi, GeocodeApi, LocationApi, RestaurantsApi};
use crate::error::{ApiError, ApiResult};
use crate::session;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Session correlation header expected by the backend
const X_SESSION_ID: &str = "X-Session-ID";

/// StudyBites API client
///
/// This client wraps `reqwest` and adds:
/// - Session correlation (`X-Session-ID` on every request)
/// - Request correlation IDs for tracing
/// - An explicit timeout on every backend call
#[derive(Clone)]
pub struct StudyBitesClient {
    inner: Client,
    config: Arc<ClientConfig>,
    session_id: Arc<str>,
}

impl StudyBitesClient {
    /// Create a new client with default configuration from environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        Self::with_session(config, session::get_or_create())
    }

    /// Create a client with an explicit session identifier
    pub fn with_session(config: ClientConfig, session_id: &str) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static("studybites-api-client/0.1"),
        );
        default_headers.insert(
            X_SESSION_ID,
            HeaderValue::from_str(session_id)
                .map_err(|_| ApiError::config("session id is not a valid header value"))?,
        );

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            session_id: Arc::from(session_id),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the session identifier this client correlates requests with
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access the food catalog endpoints
    #[must_use]
    pub fn foods(&self) -> FoodsApi {
        FoodsApi::new(self.clone())
    }

    /// Access the restaurant recommendation endpoints
    #[must_use]
    pub fn restaurants(&self) -> RestaurantsApi {
        RestaurantsApi::new(self.clone())
    }

    /// Access the location update endpoint
    #[must_use]
    pub fn location(&self) -> LocationApi {
        LocationApi::new(self.clone())
    }

    /// Access the analytics endpoints
    #[must_use]
    pub fn analytics(&self) -> AnalyticsApi {
        AnalyticsApi::new(self.clone())
    }

    /// Access the third-party reverse-geocoding service
    #[must_use]
    pub fn geocode(&self) -> GeocodeApi {
        GeocodeApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Perform a GET request against the backend
    #[instrument(skip(self), fields(request_id))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.backend_url(path);
        self.request_url::<T, ()>(Method::GET, &url, &[], None)
            .await
    }

    /// Perform a GET request against the backend with URL-encoded query pairs.
    ///
    /// Values go through reqwest's query serializer, so reserved characters in
    /// opaque backend ids survive the round trip.
    #[instrument(skip(self, query), fields(request_id))]
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let url = self.backend_url(path);
        self.request_url::<T, ()>(Method::GET, &url, query, None)
            .await
    }

    /// Perform a GET request to an absolute URL (third-party services)
    #[instrument(skip(self), fields(request_id))]
    pub async fn get_url<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        self.request_url::<T, ()>(Method::GET, url, &[], None)
            .await
    }

    /// Perform a POST request against the backend
    #[instrument(skip(self, body), fields(request_id))]
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.backend_url(path);
        self.request_url(Method::POST, &url, &[], Some(body)).await
    }

    /// Perform a POST request whose response body is ignored.
    ///
    /// Used for best-effort endpoints (location updates, analytics) where
    /// only the transport outcome matters.
    #[instrument(skip(self, body), fields(request_id))]
    pub async fn post_ignore_response<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        let url = self.backend_url(path);
        let request_id = Uuid::new_v4().to_string();

        let response = self
            .inner
            .post(&url)
            .header(X_REQUEST_ID, &request_id)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            warn!(request_id = %request_id, status = status.as_u16(), "Best-effort POST rejected");
            Err(ApiError::api_response(status.as_u16(), status.to_string()))
        }
    }

    fn backend_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn build_request(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, String)],
        request_id: &str,
    ) -> reqwest::RequestBuilder {
        let mut request = self
            .inner
            .request(method, url)
            .header(X_REQUEST_ID, request_id);
        if !query.is_empty() {
            request = request.query(query);
        }
        request
    }

    async fn request_url<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> ApiResult<T> {
        let request_id = Uuid::new_v4().to_string();

        let mut request = self.build_request(method, url, query, &request_id);

        if let Some(b) = body {
            request = request.json(b);
        }

        let start = Instant::now();
        let result = async {
            let response = request.send().await?;
            self.handle_response(response).await
        }
        .await;

        match &result {
            Ok(_) => debug!(
                request_id = %request_id,
                elapsed_ms = start.elapsed().as_millis(),
                "Request succeeded"
            ),
            Err(e) => debug!(
                request_id = %request_id,
                elapsed_ms = start.elapsed().as_millis(),
                error = %e,
                "Request failed"
            ),
        }

        result
    }

    /// Handle HTTP response and deserialize
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(ApiError::Request)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::api_response(status.as_u16(), message))
        }
    }
}
