//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures with small formatting helpers.
//!
//! # Entity Types
//!
//! - [`ResolutionRequest`] - A request to resolve one detail page
//! - [`ResolvedWebsite`] - Tagged resolution result (`Found` / `NotFound`)
//! - [`DirectoryListing`] - A listing scraped from a search page
//! - [`BusinessRecord`] - A listing completed with its website, ready for output

pub mod business_record;
pub mod resolution_request;
pub mod resolved_website;

pub use business_record::{BusinessRecord, DirectoryListing};
pub use resolution_request::{DEFAULT_DISPLAY_NAME, ResolutionRequest};
pub use resolved_website::{NOT_FOUND_SENTINEL, ResolvedWebsite};
