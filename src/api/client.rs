//! PokeAPI Client
//!
//! Every GET goes through the response cache first, keyed by full URL, so
//! paging back and forth or re-exploring an area does not hit the network
//! while the entry is alive.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::config::{normalize_base_url, Config};
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// HTTP client for the PokeAPI backed by a [`Cache`].
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: Cache,
}

impl PokeApiClient {
    /// Creates a client rooted at `base_url` that stores bodies in `cache`.
    pub fn new(base_url: &str, cache: Cache, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url),
            cache,
        })
    }

    /// Creates a client from configuration.
    pub fn from_config(config: &Config, cache: Cache) -> Result<Self> {
        Self::new(&config.base_url, cache, config.http_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// URL of the first page of location areas.
    pub fn location_areas_url(&self) -> String {
        format!("{}location-area/", self.base_url)
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}location-area/{}", self.base_url, name)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}pokemon/{}", self.base_url, name)
    }

    // == Fetch ==
    /// Returns the body at `url`, from the cache when present.
    ///
    /// Only successful responses are cached. A non-2xx status is returned as
    /// [`PokedexError::Status`] and the next call will try the network again.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url) {
            debug!(url, bytes = body.len(), "Serving response from cache");
            return Ok(body);
        }

        debug!(url, "Fetching from network");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?.to_vec();
        self.cache.add(url, body.clone());
        Ok(body)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches one page of location areas from a page URL.
    pub async fn location_areas(&self, url: &str) -> Result<LocationAreaPage> {
        self.fetch_json(url).await
    }

    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        self.fetch_json(&self.location_area_url(name)).await
    }

    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.fetch_json(&self.pokemon_url(name)).await
    }
}
