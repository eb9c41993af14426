//! Cache service trait for resolved websites.

use async_trait::async_trait;

use crate::domain::entities::ResolvedWebsite;

/// Process-lifetime cache of resolutions keyed by source page URL.
///
/// Only successful resolutions are stored, including
/// [`ResolvedWebsite::NotFound`]. Fetch failures never reach the cache.
/// Entries are never evicted and have no TTL.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - In-memory concurrent map
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait WebsiteCache: Send + Sync {
    /// Returns the cached resolution for a source URL, if any.
    async fn get(&self, source_url: &str) -> Option<ResolvedWebsite>;

    /// Stores a resolution. An existing entry is overwritten (last writer wins).
    async fn put(&self, source_url: &str, website: ResolvedWebsite);

    /// Number of cached entries.
    async fn len(&self) -> usize;

    /// Returns true if the cache holds no entries.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Checks if the cache backend is usable.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
