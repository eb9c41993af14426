//! Handler for website resolution.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use tracing::{error, warn};

use crate::api::dto::resolve::{ResolveQuery, ResolveResponse};
use crate::domain::entities::ResolutionRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a business's external website from its directory detail page.
///
/// # Endpoint
///
/// `GET /resolve?url=<detail page>&name=<business name>`
///
/// # Request Flow
///
/// 1. Reject a missing or blank `url` (no fetch, no cache write)
/// 2. Return the cached resolution if present
/// 3. Otherwise wait a random politeness delay, fetch, extract and cache
///
/// # Response Codes
///
/// - **200 OK**: `{"website": "<url>"}` or `{"website": "n/a"}`
/// - **400 Bad Request**: `{"error": "No URL provided"}`
/// - **500 Internal Server Error**: `{"error": "Failed to fetch page: <status>"}`
///   or `{"error": "<transport message>"}`
pub async fn resolve_handler(
    State(state): State<AppState>,
    query: Result<Query<ResolveQuery>, QueryRejection>,
) -> Result<Json<ResolveResponse>, AppError> {
    let Query(query) = query.map_err(|e| {
        warn!("Rejected resolve query: {}", e);
        AppError::bad_request(e.body_text())
    })?;

    let request = ResolutionRequest::new(query.url, query.name)
        .ok_or_else(|| AppError::bad_request("No URL provided"))?;

    let website = state.resolver.resolve(&request).await.map_err(|e| {
        error!(
            "Failed to resolve {} ({}): {}",
            request.display_name, request.source_url, e
        );
        e
    })?;

    Ok(Json(website.into()))
}
