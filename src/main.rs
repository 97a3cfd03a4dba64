//! Pokecache - A Pokedex REPL backed by an in-memory TTL cache
//!
//! Browses PokeAPI location areas and catches pokemon, caching every
//! response body for the configured interval.

use std::io;
use std::time::Duration;

use anyhow::Context;
use tokio::io::BufReader;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokecache::{repl, Cache, Config, PokeApiClient, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its reaper
/// 4. Build the API client and session
/// 5. Run the prompt until exit, end of input or Ctrl+C
/// 6. Cancel the reaper
///
/// The runtime is shut down with a timeout because a pending stdin read
/// never completes on its own after Ctrl+C.
fn main() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start Tokio runtime")?;
    let result = runtime.block_on(run_pokedex());
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    result
}

/// How long shutdown waits for blocking work such as the stdin reader.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(250);

async fn run_pokedex() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokecache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}s, base_url={}, http_timeout={}s",
        config.cache_interval, config.base_url, config.http_timeout
    );

    let shutdown = CancellationToken::new();
    let cache = Cache::with_cancellation(config.cache_interval(), shutdown.child_token());
    let client =
        PokeApiClient::from_config(&config, cache.clone()).context("Failed to build HTTP client")?;
    let mut session = Session::new(client);

    tokio::spawn(ctrl_c_listener(shutdown.clone()));

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    repl::run(&mut session, stdin, &mut stdout, &shutdown)
        .await
        .context("REPL I/O failed")?;

    shutdown.cancel();
    let stats = cache.stats();
    info!(
        hits = stats.hits,
        misses = stats.misses,
        expired = stats.expired,
        "Pokedex closed"
    );
    Ok(())
}

/// Cancels `shutdown` on Ctrl+C.
async fn ctrl_c_listener(shutdown: CancellationToken) {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Received Ctrl+C, shutting down...");
            shutdown.cancel();
        }
        Err(err) => warn!(error = %err, "Failed to install Ctrl+C handler"),
    }
}
