//! API route configuration.

use crate::api::handlers::resolve_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Website resolution routes.
///
/// # Endpoints
///
/// - `GET /resolve` - Resolve a business website from its directory detail page
pub fn resolver_routes() -> Router<AppState> {
    Router::new().route("/resolve", get(resolve_handler))
}
