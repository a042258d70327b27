//! HTTP client for the shopping-search provider.

use super::cache::{CacheStats, QueryCache};
use super::error::SearchError;
use super::models::{Listing, SearchTask};
use super::parser::parse_response;
use super::retry;
use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;

/// Path of the live SERP endpoint, appended to a custom base URL.
pub const SERP_PATH: &str = "/v3/serp/google/organic/live/advanced";

/// One request plus one retry.
const MAX_ATTEMPTS: u32 = 2;

/// Trait for shopping searches - enables mocking for tests.
#[async_trait]
pub trait ShoppingSearch: Send + Sync {
    /// Returns false when no provider credentials are configured.
    fn is_available(&self) -> bool;

    /// Searches for priced listings. Every failure degrades to an empty list.
    async fn search(&self, query: &str) -> Vec<Listing>;

    /// Empties the result cache.
    fn clear_cache(&self);
}

/// DataForSEO SERP client with retry and a query cache.
pub struct DataForSeoClient {
    client: Client,
    endpoint: String,
    authorization: Option<String>,
    location_code: u32,
    language_code: String,
    retry_delay: Duration,
    cache: QueryCache,
}

impl DataForSeoClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, None)
    }

    /// Creates a new client with an optional custom base URL (for testing).
    pub fn with_base_url(config: &Config, base_url: Option<String>) -> Result<Self> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let mut builder =
            Client::builder().timeout(timeout).connect_timeout(timeout.min(Duration::from_secs(10)));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().context("Failed to build HTTP client")?;

        let endpoint = match base_url {
            Some(base) => format!("{}{}", base.trim_end_matches('/'), SERP_PATH),
            None => config.endpoint.clone(),
        };

        let authorization = config
            .credentials()
            .map(|(login, password)| format!("Basic {}", STANDARD.encode(format!("{}:{}", login, password))));

        Ok(Self {
            client,
            endpoint,
            authorization,
            location_code: config.location_code,
            language_code: config.language_code.clone(),
            retry_delay: Duration::from_millis(config.retry_delay_ms),
            cache: QueryCache::new(),
        })
    }

    /// Returns cache hit/miss counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Performs one POST round-trip and returns the raw body.
    async fn fetch(&self, authorization: &str, query: &str) -> Result<String, SearchError> {
        let tasks = [SearchTask {
            keyword: query,
            location_code: self.location_code,
            language_code: &self.language_code,
            device: "desktop",
            os: "windows",
        }];
        let body = serde_json::to_vec(&tasks).map_err(|e| SearchError::Decode(e.to_string()))?;

        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", authorization)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl ShoppingSearch for DataForSeoClient {
    fn is_available(&self) -> bool {
        self.authorization.is_some()
    }

    async fn search(&self, query: &str) -> Vec<Listing> {
        let Some(authorization) = self.authorization.as_deref() else {
            debug!("Shopping search not configured, skipping");
            return Vec::new();
        };

        if query.trim().is_empty() {
            return Vec::new();
        }

        if let Some(cached) = self.cache.get(query) {
            return cached;
        }

        info!("Searching: {}", query);

        let body = match retry::attempt(MAX_ATTEMPTS, self.retry_delay, "Shopping search", || {
            self.fetch(authorization, query)
        })
        .await
        {
            Ok(body) => body,
            Err(e) => {
                warn!("Shopping search for '{}' failed: {}", query, e);
                return Vec::new();
            }
        };

        match parse_response(&body) {
            Ok(listings) => {
                info!("Found {} listings for '{}'", listings.len(), query);
                self.cache.insert(query, listings.clone());
                listings
            }
            Err(e) => {
                warn!("Discarding provider response for '{}': {}", query, e);
                Vec::new()
            }
        }
    }

    fn clear_cache(&self) {
        self.cache.clear();
    }
}
