//! Configuration Module
//!
//! Handles loading the Pokedex settings from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Root of the public PokeAPI.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Pokedex configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache reaper interval in seconds, also the maximum entry age
    pub cache_interval: u64,
    /// API root, always ending in `/`
    pub base_url: String,
    /// Per-request HTTP timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_INTERVAL_SECS` - Cache expiry interval in seconds (default: 5)
    /// - `POKEAPI_BASE_URL` - API root (default: `https://pokeapi.co/api/v2/`)
    /// - `HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_interval: parse_var("CACHE_INTERVAL_SECS").unwrap_or(defaults.cache_interval),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| normalize_base_url(&v))
                .unwrap_or(defaults.base_url),
            http_timeout: parse_var("HTTP_TIMEOUT_SECS").unwrap_or(defaults.http_timeout),
        }
    }

    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval: 5,
            base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout: 10,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// Appends the trailing slash relative paths are joined against.
pub fn normalize_base_url(url: &str) -> String {
    let url = url.trim();
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
