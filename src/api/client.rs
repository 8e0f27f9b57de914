//! PokeAPI Client
//!
//! HTTP client that reads through the timed cache: a hit returns the
//! cached body without touching the network, a miss fetches and stores.

use reqwest::Client;
use tracing::debug;

use crate::cache::TimedCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, PokemonDetail};

// == API Client ==
/// Fetches PokeAPI resources with response-body caching.
///
/// This is the only component that writes to the cache; the cache itself
/// never performs I/O.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    cache: TimedCache,
    base_url: String,
}

impl ApiClient {
    // == Constructor ==
    /// Builds a client from configuration, reusing the given cache.
    pub fn new(config: &Config, cache: TimedCache) -> Result<Self> {
        let http = Client::builder().timeout(config.http_timeout()).build()?;

        Ok(Self {
            http,
            cache,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    // == Fetch Bytes ==
    /// Returns the response body for `url`, from cache when possible.
    ///
    /// On a miss the body is fetched, stored under the URL, and returned.
    /// Statuses above 399 are rejected without caching, so a transient
    /// server error never masks a later good response.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(data) = self.cache.get(url) {
            debug!(url, "cache hit");
            return Ok(data);
        }

        debug!(url, "cache miss, fetching");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status.as_u16() > 399 {
            return Err(PokedexError::BadStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let data = response.bytes().await?.to_vec();
        self.cache.add(url, data.clone());
        Ok(data)
    }

    // == Typed Endpoints ==
    /// Fetches one page of location areas. `page_url` continues a prior
    /// page; `None` starts from the beginning of the list.
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => format!("{}/location-area/", self.base_url),
        };
        let data = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Fetches the encounter detail for a named location area.
    pub async fn location_area(&self, area_name: &str) -> Result<LocationAreaDetail> {
        let url = format!("{}/location-area/{}", self.base_url, area_name);
        let data = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Fetches the detail for a named Pokemon.
    pub async fn pokemon(&self, pokemon_name: &str) -> Result<PokemonDetail> {
        let url = format!("{}/pokemon/{}", self.base_url, pokemon_name);
        let data = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&data)?)
    }
}
