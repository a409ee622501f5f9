//! MBTA v3 API HTTP client.
//!
//! Fetches subway routes, then the ordered stop list of each route. Requests
//! are issued one after another; the API lists a route's stops in travel
//! order when filtered by route.

use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::network::FeedRoute;

use super::FeedSource;
use super::convert::{parse_document, to_feed_route};
use super::error::FeedError;
use super::types::{RouteResource, StopResource};

/// Default base URL for the MBTA v3 API.
const DEFAULT_BASE_URL: &str = "https://api-v3.mbta.com";

/// Route types treated as subway: light rail (0) and heavy rail (1).
const SUBWAY_ROUTE_TYPES: &[u8] = &[0, 1];

/// Configuration for the MBTA client.
#[derive(Debug, Clone)]
pub struct MbtaConfig {
    /// Optional API key. Anonymous access works but is heavily rate limited.
    pub api_key: Option<String>,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Route types to include
    pub route_types: Vec<u8>,
}

impl MbtaConfig {
    /// Create a config for anonymous access.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            route_types: SUBWAY_ROUTE_TYPES.to_vec(),
        }
    }

    /// Authenticate with an API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Restrict to other route types (e.g. `[2]` for commuter rail).
    pub fn with_route_types(mut self, types: impl Into<Vec<u8>>) -> Self {
        self.route_types = types.into();
        self
    }

    /// The `filter[type]` query value, e.g. `"0,1"`.
    fn route_type_filter(&self) -> String {
        self.route_types
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for MbtaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// MBTA v3 API client.
#[derive(Debug, Clone)]
pub struct MbtaClient {
    http: reqwest::Client,
    base_url: String,
    route_types: String,
}

impl MbtaClient {
    /// Create a new MBTA client with the given configuration.
    pub fn new(config: MbtaConfig) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let key = HeaderValue::from_str(key).map_err(|_| FeedError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
            headers.insert("x-api-key", key);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            route_types: config.route_type_filter(),
            base_url: config.base_url,
        })
    }

    /// List routes of the configured types, long names only.
    pub async fn get_routes(&self) -> Result<Vec<RouteResource>, FeedError> {
        self.get_document(
            "routes",
            &[
                ("filter[type]", self.route_types.clone()),
                ("fields[route]", "long_name".to_string()),
            ],
        )
        .await
    }

    /// List the stops of one route, in travel order.
    pub async fn get_stops(&self, route_id: &str) -> Result<Vec<StopResource>, FeedError> {
        self.get_document(
            "stops",
            &[
                ("include", "route".to_string()),
                ("filter[route]", route_id.to_string()),
            ],
        )
        .await
    }

    async fn get_document<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, FeedError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(FeedError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FeedError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_document(&body)
    }
}

impl FeedSource for MbtaClient {
    async fn fetch_routes(&self) -> Result<Vec<FeedRoute>, FeedError> {
        let routes = self.get_routes().await?;
        debug!(routes = routes.len(), "fetched route list");

        let mut feed = Vec::with_capacity(routes.len());
        for route in routes {
            // A route without an id cannot be queried; the builder reports it
            let stops = match route.id.as_deref() {
                Some(id) => self.get_stops(id).await?,
                None => Vec::new(),
            };
            debug!(route = ?route.id, stops = stops.len(), "fetched stops");
            feed.push(to_feed_route(route, stops));
        }

        Ok(feed)
    }
}
