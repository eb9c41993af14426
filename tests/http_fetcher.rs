mod common;

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::Html,
    routing::get,
};
use directory_resolver::domain::entities::{ResolutionRequest, ResolvedWebsite};
use directory_resolver::domain::fetcher::{FetchError, PageFetcher};
use directory_resolver::infrastructure::cache::{MemoryCache, WebsiteCache};
use directory_resolver::infrastructure::http::{DEFAULT_USER_AGENT, HttpPageFetcher};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn fetcher(timeout: Duration) -> HttpPageFetcher {
    HttpPageFetcher::new(common::DIRECTORY_HOST, DEFAULT_USER_AGENT, timeout).unwrap()
}

fn upstream(hits: Arc<AtomicUsize>) -> Router {
    Router::new()
        .route(
            "/member/acme",
            get(|State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Html(common::LABELED_PAGE)
            }),
        )
        .route(
            "/member/gone",
            get(|State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                (StatusCode::NOT_FOUND, "not here")
            }),
        )
        .route(
            "/member/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Html("<html></html>")
            }),
        )
        .route(
            "/member/picky",
            get(|headers: HeaderMap| async move {
                let expected_referer = headers
                    .get(header::HOST)
                    .and_then(|v| v.to_str().ok())
                    .map(|host| format!("http://{}/", host));
                let referer_ok = headers
                    .get(header::REFERER)
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|v| Some(v.to_string()) == expected_referer);
                let dnt_ok = headers.get(header::DNT).is_some_and(|v| v == "1");
                let browser_ok = headers
                    .get(header::USER_AGENT)
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|v| v.starts_with("Mozilla/5.0"));

                if referer_ok && dnt_ok && browser_ok {
                    (StatusCode::OK, Html(common::FALLBACK_PAGE))
                } else {
                    (StatusCode::FORBIDDEN, Html("blocked"))
                }
            }),
        )
        .route(
            "/list/search",
            get(|headers: HeaderMap| async move {
                headers
                    .get(header::REFERER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string()
            }),
        )
        .with_state(hits)
}

#[tokio::test]
async fn test_fetch_success() {
    let addr = common::spawn_upstream(upstream(Arc::new(AtomicUsize::new(0)))).await;

    let html = fetcher(Duration::from_secs(10))
        .fetch(&format!("http://{}/member/acme", addr))
        .await
        .unwrap();

    assert!(html.contains("Visit our website"));
}

#[tokio::test]
async fn test_fetch_sends_browser_headers() {
    let addr = common::spawn_upstream(upstream(Arc::new(AtomicUsize::new(0)))).await;

    let result = fetcher(Duration::from_secs(10))
        .fetch(&format!("http://{}/member/picky", addr))
        .await;

    assert!(result.is_ok(), "upstream rejected headers: {:?}", result);
}

#[tokio::test]
async fn test_fetch_status_error() {
    let addr = common::spawn_upstream(upstream(Arc::new(AtomicUsize::new(0)))).await;

    let err = fetcher(Duration::from_secs(10))
        .fetch(&format!("http://{}/member/gone", addr))
        .await
        .unwrap_err();

    assert_eq!(err, FetchError::Status(404));
}

#[tokio::test]
async fn test_fetch_timeout_is_transport_error() {
    let addr = common::spawn_upstream(upstream(Arc::new(AtomicUsize::new(0)))).await;

    let err = fetcher(Duration::from_millis(200))
        .fetch(&format!("http://{}/member/slow", addr))
        .await
        .unwrap_err();

    let FetchError::Transport(message) = err else {
        panic!("expected transport error, got {:?}", err);
    };
    assert!(message.contains("timed out"), "{}", message);
}

#[tokio::test]
async fn test_referer_follows_requested_directory() {
    let addr = common::spawn_upstream(upstream(Arc::new(AtomicUsize::new(0)))).await;

    // Configured for the default directory, fetching a page on another host.
    let referer = fetcher(Duration::from_secs(10))
        .fetch(&format!("http://{}/list/search?q=design", addr))
        .await
        .unwrap();

    assert_eq!(referer, format!("http://{}/", addr));
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = fetcher(Duration::from_secs(2))
        .fetch(&format!("http://{}/member/acme", addr))
        .await
        .unwrap_err();

    let FetchError::Transport(message) = err else {
        panic!("expected transport error, got {:?}", err);
    };
    assert!(message.starts_with("error sending request"), "{}", message);
    assert!(message.to_lowercase().contains("connect"), "{}", message);
}

#[tokio::test]
async fn test_resolver_retries_failed_fetch_against_real_upstream() {
    let hits = Arc::new(AtomicUsize::new(0));
    let addr = common::spawn_upstream(upstream(hits.clone())).await;

    let cache = Arc::new(MemoryCache::new());
    let resolver = common::create_resolver(Arc::new(fetcher(Duration::from_secs(10))), cache.clone());

    let gone = ResolutionRequest::new(Some(format!("http://{}/member/gone", addr)), None).unwrap();

    let err = resolver.resolve(&gone).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch page: 404");
    let err = resolver.resolve(&gone).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch page: 404");
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert!(cache.is_empty().await);

    let acme = ResolutionRequest::new(Some(format!("http://{}/member/acme", addr)), None).unwrap();

    let first = resolver.resolve(&acme).await.unwrap();
    let second = resolver.resolve(&acme).await.unwrap();
    assert_eq!(first, ResolvedWebsite::Found("https://a.example".to_string()));
    assert_eq!(first, second);
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}
