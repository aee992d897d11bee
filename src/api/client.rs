//! Client for retrieving page payloads from the backend API.
//!
//! This module provides the `PageClient` struct implementing the
//! cache-then-fetch retrieval routine, and the `PageFetcher` seam it
//! fetches through.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::store::{PagePayload, PageStore};

use super::ApiError;

/// Identifier of the page whose payload carries the site-wide metadata.
const HOME_PAGE_ID: &str = "home";

/// Fetches a JSON resource by URL.
///
/// The seam between the retrieval logic and the transport; production code
/// uses `HttpFetcher`, tests substitute a canned implementation.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_json(&self, url: &str) -> Result<PagePayload>;
}

/// HTTP-backed fetcher.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    /// Issue a single GET and decode the body as JSON.
    ///
    /// No retries, no timeout, no status check: a non-OK response is not
    /// distinguished from success here, and decoding its body will fail
    /// with a decode error that propagates to the caller.
    async fn fetch_json(&self, url: &str) -> Result<PagePayload> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ApiError::Network)
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let text = response
            .text()
            .await
            .map_err(ApiError::Network)
            .context("Failed to read response body")?;

        let payload = serde_json::from_str(&text)
            .map_err(ApiError::Decode)
            .with_context(|| format!("Failed to decode JSON response from {}", url))?;

        Ok(payload)
    }
}

/// Client for page retrieval with caching.
///
/// Holds a handle to the shared `PageStore` and prefers it over the network:
/// repeated retrieval of an already-visited page costs zero round trips.
pub struct PageClient {
    fetcher: Arc<dyn PageFetcher>,
    store: Arc<PageStore>,
    api_location: String,
    is_development: bool,
}

impl PageClient {
    /// Create an HTTP-backed client.
    pub fn new(config: &Config, store: Arc<PageStore>) -> Self {
        Self::with_fetcher(config, store, Arc::new(HttpFetcher::new()))
    }

    /// Create a client with an injected fetcher.
    pub fn with_fetcher(
        config: &Config,
        store: Arc<PageStore>,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Self {
        Self {
            fetcher,
            store,
            api_location: config.api_location.clone(),
            is_development: config.is_development,
        }
    }

    /// The configured API base location.
    pub fn api_location(&self) -> &str {
        &self.api_location
    }

    fn page_url(&self, id: &str) -> String {
        format!("{}/{}.json", self.api_location, id)
    }

    /// Retrieve a page by id from either the store or a fresh fetch.
    ///
    /// With `force` set, the store is bypassed and the cached entry is
    /// replaced by the fetch result. Fetching the `home` page additionally
    /// stores its `site` field in the store's site slot.
    ///
    /// Network and decode failures propagate unhandled; there is no retry
    /// and no fallback to a stale entry.
    pub async fn get_page(&self, id: &str, force: bool) -> Result<PagePayload> {
        self.store.init().await;

        // Try the cached page first, except when `force` is set
        if !force {
            if let Some(stored) = self.store.get_page(id).await {
                if self.is_development {
                    debug!(id, "Pulling page data from store");
                }
                return Ok(stored);
            }
        }

        let url = self.page_url(id);
        if self.is_development {
            debug!(%url, "Fetching page data");
        }

        let page = self.fetcher.fetch_json(&url).await?;

        if self.is_development {
            debug!(id, "Fetched page data");
        }

        // Make sure the page gets stored freshly when forced
        if force {
            self.store.remove_page(id).await;
        }

        self.store.add_page(id, page.clone()).await;

        // The home page payload is the sole source of site-wide metadata
        if id == HOME_PAGE_ID {
            if let Some(site) = page.get("site") {
                self.store.add_site(site.clone()).await;
            }
        }

        Ok(page)
    }

    /// Retrieve a page and deserialize its payload into a typed value.
    pub async fn get_page_as<T: DeserializeOwned>(&self, id: &str, force: bool) -> Result<T> {
        let page = self.get_page(id, force).await?;
        serde_json::from_value(page)
            .with_context(|| format!("Failed to deserialize page payload for {}", id))
    }
}
