//! Cross-origin resource sharing policy.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS for browser clients.
///
/// # Policy
///
/// - **Origins**: any
/// - **Methods**: `GET`, `POST`, `OPTIONS`
/// - **Headers**: `Content-Type`, `Authorization`
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
