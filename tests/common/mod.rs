#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use directory_resolver::application::services::ResolverService;
use directory_resolver::domain::fetcher::{FetchError, PageFetcher};
use directory_resolver::domain::heuristic::HeuristicRules;
use directory_resolver::infrastructure::cache::MemoryCache;
use directory_resolver::state::AppState;
use directory_resolver::utils::delay::PolitenessDelay;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const DIRECTORY_HOST: &str = "www.wilmingtonchamber.org";

pub const LABELED_PAGE: &str = r#"
<html><body>
  <a href="https://b.example">Partner</a>
  <a href="https://a.example">Visit our website</a>
</body></html>
"#;

pub const SOCIAL_ONLY_PAGE: &str = r#"
<html><body>
  <a href="https://www.facebook.com/biz">Like us</a>
  <a href="https://www.google.com/maps/biz">Directions</a>
</body></html>
"#;

pub const FALLBACK_PAGE: &str = r#"
<html><body>
  <a href="/list">Back to results</a>
  <a href="https://www.instagram.com/biz">Photos</a>
  <a href="https://realsite.example/home">Home</a>
</body></html>
"#;

/// Page fetcher serving canned responses and counting calls.
///
/// Unknown URLs answer with a 404 status error.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, Result<String, FetchError>>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), Ok(html.to_string()));
        self
    }

    pub fn with_error(mut self, url: &str, error: FetchError) -> Self {
        self.pages.insert(url.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pages
            .get(url)
            .cloned()
            .unwrap_or(Err(FetchError::Status(404)))
    }
}

pub fn create_resolver(
    fetcher: Arc<dyn PageFetcher>,
    cache: Arc<MemoryCache>,
) -> ResolverService {
    ResolverService::new(
        fetcher,
        cache,
        HeuristicRules::for_directory(DIRECTORY_HOST),
        PolitenessDelay::none(),
    )
}

pub fn create_test_state(fetcher: Arc<dyn PageFetcher>) -> (AppState, Arc<MemoryCache>) {
    let cache = Arc::new(MemoryCache::new());
    let resolver = create_resolver(fetcher, cache.clone());

    (AppState::new(Arc::new(resolver)), cache)
}

/// Serves a router on an ephemeral local port.
pub async fn spawn_upstream(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}
