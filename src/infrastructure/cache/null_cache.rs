//! Cache that stores nothing.

use async_trait::async_trait;
use tracing::debug;

use super::service::WebsiteCache;
use crate::domain::entities::ResolvedWebsite;

/// A cache implementation that does nothing.
///
/// Every lookup misses, so every resolution fetches the page.
/// Selected with `CACHE_ENABLED=false`.
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        debug!("Resolution cache disabled, every lookup will fetch");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WebsiteCache for NullCache {
    async fn get(&self, _source_url: &str) -> Option<ResolvedWebsite> {
        None
    }

    async fn put(&self, _source_url: &str, _website: ResolvedWebsite) {}

    async fn len(&self) -> usize {
        0
    }

    async fn health_check(&self) -> bool {
        true
    }
}
