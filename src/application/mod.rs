//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating the page fetcher,
//! the cache and the extraction heuristic. Services provide a clean API for
//! HTTP handlers and the batch CLI.
//!
//! # Available Services
//!
//! - [`services::resolver_service::ResolverService`] - Cached website resolution
//! - [`services::directory_service::DirectoryService`] - Search-page listing extraction
//!   and batch output

pub mod services;
