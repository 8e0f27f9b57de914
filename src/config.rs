//! Configuration Module
//!
//! Handles loading runtime configuration from environment variables.

use std::env;
use std::time::Duration;

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache expiry interval in seconds; also the reaper sweep period
    pub cache_interval_secs: u64,
    /// HTTP client timeout in seconds
    pub http_timeout_secs: u64,
    /// Base URL of the PokeAPI
    pub api_base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_INTERVAL` - Cache expiry interval in seconds (default: 300)
    /// - `POKEDEX_HTTP_TIMEOUT` - HTTP timeout in seconds (default: 10)
    /// - `POKEAPI_BASE_URL` - API base URL (default: https://pokeapi.co/api/v2)
    pub fn from_env() -> Self {
        Self {
            cache_interval_secs: env::var("POKEDEX_CACHE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            http_timeout_secs: env::var("POKEDEX_HTTP_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            api_base_url: env::var("POKEAPI_BASE_URL")
                .unwrap_or_else(|_| "https://pokeapi.co/api/v2".to_string()),
        }
    }

    /// Cache interval as a [`Duration`].
    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval_secs)
    }

    /// HTTP timeout as a [`Duration`].
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval_secs: 300,
            http_timeout_secs: 10,
            api_base_url: "https://pokeapi.co/api/v2".to_string(),
        }
    }
}
