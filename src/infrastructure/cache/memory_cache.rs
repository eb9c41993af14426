//! In-memory cache backed by a lock-guarded hash map.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use super::service::WebsiteCache;
use crate::domain::entities::ResolvedWebsite;

/// Unbounded in-memory cache.
///
/// Readers proceed concurrently; writes take the lock briefly. No lock is
/// held across a fetch, so two concurrent misses on the same URL may both
/// fetch and the later `put` wins.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, ResolvedWebsite>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        debug!("Using MemoryCache");
        Self::default()
    }
}

#[async_trait]
impl WebsiteCache for MemoryCache {
    async fn get(&self, source_url: &str) -> Option<ResolvedWebsite> {
        let entries = self.entries.read().await;
        match entries.get(source_url) {
            Some(website) => {
                debug!("Cache HIT: {} -> {}", source_url, website);
                Some(website.clone())
            }
            None => {
                debug!("Cache MISS: {}", source_url);
                None
            }
        }
    }

    async fn put(&self, source_url: &str, website: ResolvedWebsite) {
        debug!("Cache SET: {} -> {}", source_url, website);
        self.entries
            .write()
            .await
            .insert(source_url.to_string(), website);
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    async fn health_check(&self) -> bool {
        true
    }
}
