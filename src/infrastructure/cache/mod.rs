//! Caching layer for resolved websites.
//!
//! Provides a [`WebsiteCache`] trait with two implementations:
//! - [`MemoryCache`] - Process-lifetime in-memory cache
//! - [`NullCache`] - No-op implementation for testing/disabled caching

mod memory_cache;
mod null_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use service::WebsiteCache;
