//! Handler for the health endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse, ServiceStatus};
use crate::infrastructure::cache::WebsiteCache;
use crate::state::AppState;

/// Reports service version and resolution cache status.
///
/// `GET /health` answers 200 with `"healthy"`, or 503 with `"degraded"` when
/// the cache fails its health check.
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "cache": { "status": "ok", "message": "cached entries: 12" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let checks = HealthChecks {
        cache: check_cache(state.resolver.cache().as_ref()).await,
    };

    let (code, status) = if checks.is_healthy() {
        (StatusCode::OK, ServiceStatus::Healthy)
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, ServiceStatus::Degraded)
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks,
    };

    (code, Json(response))
}

async fn check_cache(cache: &dyn WebsiteCache) -> CheckStatus {
    if cache.health_check().await {
        CheckStatus::ok(format!("cached entries: {}", cache.len().await))
    } else {
        CheckStatus::error("Cache unavailable")
    }
}
