//! # Directory Resolver
//!
//! Resolves a business's own website from its chamber-of-commerce directory
//! detail page, exposed as a small HTTP service and a batch scraper CLI.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, the page-fetching trait and the extraction heuristic
//! - **Application Layer** ([`application`]) - Resolution and directory scraping services
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client and caching
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Two-strategy website heuristic (labeled link, then first external link)
//! - Process-lifetime resolution cache; fetch failures are never cached
//! - Randomized politeness delay and browser-like request headers
//! - Batch export of directory listings (`scrape` binary)
//!
//! ## Quick Start
//!
//! ```bash
//! export DIRECTORY_HOST="www.wilmingtonchamber.org"
//!
//! # Start the service
//! cargo run
//!
//! # Resolve a detail page
//! curl "http://localhost:3000/resolve?url=https://www.wilmingtonchamber.org/list/member/acme-123&name=Acme"
//!
//! # Export search results to a text file
//! cargo run --bin scrape -- --query design
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DirectoryService, ResolverService};
    pub use crate::domain::entities::{BusinessRecord, ResolutionRequest, ResolvedWebsite};
    pub use crate::domain::fetcher::{FetchError, PageFetcher};
    pub use crate::domain::heuristic::HeuristicRules;
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::{MemoryCache, NullCache, WebsiteCache};
    pub use crate::state::AppState;
    pub use crate::utils::delay::PolitenessDelay;
}
