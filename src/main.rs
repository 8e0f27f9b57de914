//! Pokedex CLI - a PokeAPI REPL backed by a time-expiring cache
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging
//! 2. Load configuration from environment variables
//! 3. Create the timed cache and start its background reaper
//! 4. Build the cache-backed PokeAPI client
//! 5. Run the REPL until `exit` or end of input
//! 6. Shut the reaper down deterministically

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_cli::api::ApiClient;
use pokedex_cli::cache::TimedCache;
use pokedex_cli::config::Config;
use pokedex_cli::repl::{self, ReplState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "warn" so log lines don't interleave with REPL output;
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}s, http_timeout={}s, base_url={}",
        config.cache_interval_secs, config.http_timeout_secs, config.api_base_url
    );

    // Create the cache and start its background reaper
    let (cache, reaper) = TimedCache::start(config.cache_interval());
    info!("Cache initialized, reaper running");

    // Build the PokeAPI client on top of the cache
    let client = ApiClient::new(&config, cache).context("failed to build HTTP client")?;

    // Run the REPL to completion
    let result = repl::run(ReplState::new(client))
        .await
        .context("REPL session failed");

    // Stop the reaper before exiting
    reaper.shutdown().await;
    info!("Shutdown complete");

    result
}
