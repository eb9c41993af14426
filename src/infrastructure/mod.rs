//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for page fetching and caching.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (in-memory and no-op implementations)
//! - [`http`] - `reqwest`-backed [`crate::domain::fetcher::PageFetcher`]

pub mod cache;
pub mod http;
