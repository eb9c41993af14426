//! HTTP server initialization and runtime setup.
//!
//! Handles fetcher and cache setup, service wiring, and Axum server lifecycle.

use crate::application::services::ResolverService;
use crate::config::Config;
use crate::domain::fetcher::PageFetcher;
use crate::domain::heuristic::HeuristicRules;
use crate::infrastructure::cache::{MemoryCache, NullCache, WebsiteCache};
use crate::infrastructure::http::HttpPageFetcher;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the resolver service described by the configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn build_resolver(config: &Config) -> Result<ResolverService> {
    let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpPageFetcher::new(
        &config.directory_host,
        &config.user_agent,
        config.fetch_timeout(),
    )?);

    let cache: Arc<dyn WebsiteCache> = if config.cache_enabled {
        tracing::info!("Cache enabled (in-memory)");
        Arc::new(MemoryCache::new())
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    Ok(ResolverService::new(
        fetcher,
        cache,
        HeuristicRules::for_directory(&config.directory_host),
        config.politeness_delay(),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Stops gracefully on Ctrl+C.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let resolver = build_resolver(&config)?;
    let state = AppState::new(Arc::new(resolver));

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
