//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /resolve` - Resolve a business website from its directory detail page
//! - `GET /health`  - Health check: cache status and version
//!
//! # Middleware
//!
//! - **CORS** - Any origin; GET/POST/OPTIONS; `Content-Type` and `Authorization` headers
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::resolver_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
