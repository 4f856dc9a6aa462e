//! MBTA v3 HTTP client.
//!
//! Provides async methods for the `/routes` and `/stops` endpoints and
//! converts the JSON:API responses into domain types.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::{Route, RouteId, RouteTypeFilter, Stop};
use crate::graph::TransitApi;

use super::convert::{convert_routes, convert_stops};
use super::error::MbtaError;
use super::types::{RoutesDocument, StopsDocument};

/// Default base URL for the MBTA v3 API.
const DEFAULT_BASE_URL: &str = "https://api-v3.mbta.com";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Media type the API responds with.
const JSON_API: &str = "application/vnd.api+json";

/// Configuration for the MBTA client.
#[derive(Debug, Clone)]
pub struct MbtaConfig {
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MbtaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for MbtaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// MBTA v3 API client.
///
/// Uses a semaphore to limit concurrent requests; the API rate-limits
/// unauthenticated clients fairly aggressively.
#[derive(Debug, Clone)]
pub struct MbtaClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl MbtaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MbtaConfig) -> Result<Self, MbtaError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_API));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// List routes, optionally restricted to some route types.
    ///
    /// An empty filter omits `filter[type]` entirely, which the API treats
    /// as "all types".
    pub async fn get_routes(&self, filter: &RouteTypeFilter) -> Result<Vec<Route>, MbtaError> {
        let query: Vec<(&str, String)> = filter
            .query_value()
            .map(|types| ("filter[type]", types))
            .into_iter()
            .collect();

        let doc: RoutesDocument = self.get_document("routes", &query).await?;
        Ok(convert_routes(&doc)?)
    }

    /// List stops served by any of the given routes.
    ///
    /// With no route ids the API returns every stop in the system.
    pub async fn get_stops(&self, route_ids: &[RouteId]) -> Result<Vec<Stop>, MbtaError> {
        let mut query = Vec::new();
        if !route_ids.is_empty() {
            let ids: Vec<&str> = route_ids.iter().map(RouteId::as_str).collect();
            query.push(("filter[route]", ids.join(",")));
        }

        let doc: StopsDocument = self.get_document("stops", &query).await?;
        Ok(convert_stops(&doc)?)
    }

    async fn get_document<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, MbtaError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| MbtaError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, ?query, "GET");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MbtaError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MbtaError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| MbtaError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl TransitApi for MbtaClient {
    async fn fetch_routes(&self, filter: &RouteTypeFilter) -> Result<Vec<Route>, MbtaError> {
        self.get_routes(filter).await
    }

    async fn fetch_stops(&self, route_ids: &[RouteId]) -> Result<Vec<Stop>, MbtaError> {
        self.get_stops(route_ids).await
    }
}
