mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use common::{FALLBACK_PAGE, LABELED_PAGE, SOCIAL_ONLY_PAGE, StubFetcher};
use directory_resolver::api::handlers::resolve_handler;
use directory_resolver::domain::entities::ResolvedWebsite;
use directory_resolver::domain::fetcher::FetchError;
use directory_resolver::infrastructure::cache::{MemoryCache, WebsiteCache};
use std::sync::Arc;

const SOURCE: &str = "https://www.wilmingtonchamber.org/list/member/acme-design-123";

fn server(fetcher: Arc<StubFetcher>) -> (TestServer, Arc<MemoryCache>) {
    let (state, cache) = common::create_test_state(fetcher);
    let app = Router::new()
        .route("/resolve", get(resolve_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), cache)
}

#[tokio::test]
async fn test_resolve_labeled_link() {
    let fetcher = Arc::new(StubFetcher::new().with_page(SOURCE, LABELED_PAGE));
    let (server, _cache) = server(fetcher);

    let response = server
        .get("/resolve")
        .add_query_param("url", SOURCE)
        .add_query_param("name", "Acme Design")
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json, serde_json::json!({ "website": "https://a.example" }));
}

#[tokio::test]
async fn test_resolve_is_cached() {
    let fetcher = Arc::new(StubFetcher::new().with_page(SOURCE, LABELED_PAGE));
    let (server, cache) = server(fetcher.clone());

    let first = server.get("/resolve").add_query_param("url", SOURCE).await;
    let second = server.get("/resolve").add_query_param("url", SOURCE).await;

    first.assert_status_ok();
    second.assert_status_ok();
    assert_eq!(
        first.json::<serde_json::Value>(),
        second.json::<serde_json::Value>()
    );
    assert_eq!(fetcher.calls(), 1);
    assert_eq!(
        cache.get(SOURCE).await,
        Some(ResolvedWebsite::Found("https://a.example".to_string()))
    );
}

#[tokio::test]
async fn test_resolve_excluded_links_return_sentinel() {
    let fetcher = Arc::new(StubFetcher::new().with_page(SOURCE, SOCIAL_ONLY_PAGE));
    let (server, cache) = server(fetcher.clone());

    let response = server.get("/resolve").add_query_param("url", SOURCE).await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["website"], "n/a");

    // The sentinel is cached like any other resolution.
    let again = server.get("/resolve").add_query_param("url", SOURCE).await;
    assert_eq!(again.json::<serde_json::Value>()["website"], "n/a");
    assert_eq!(fetcher.calls(), 1);
    assert_eq!(cache.get(SOURCE).await, Some(ResolvedWebsite::NotFound));
}

#[tokio::test]
async fn test_resolve_fallback_external_link() {
    let fetcher = Arc::new(StubFetcher::new().with_page(SOURCE, FALLBACK_PAGE));
    let (server, _cache) = server(fetcher);

    let response = server
        .get("/resolve")
        .add_query_param("url", SOURCE)
        .add_query_param("name", "Real Site LLC")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["website"],
        "https://realsite.example/home"
    );
}

#[tokio::test]
async fn test_resolve_missing_url() {
    let fetcher = Arc::new(StubFetcher::new());
    let (server, cache) = server(fetcher.clone());

    let response = server
        .get("/resolve")
        .add_query_param("name", "Acme Design")
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<serde_json::Value>(),
        serde_json::json!({ "error": "No URL provided" })
    );
    assert_eq!(fetcher.calls(), 0);
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn test_resolve_blank_url() {
    let fetcher = Arc::new(StubFetcher::new());
    let (server, _cache) = server(fetcher.clone());

    let response = server.get("/resolve").add_query_param("url", "  ").await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<serde_json::Value>()["error"], "No URL provided");
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn test_resolve_upstream_404_not_cached() {
    let fetcher = Arc::new(StubFetcher::new().with_error(SOURCE, FetchError::Status(404)));
    let (server, cache) = server(fetcher.clone());

    let response = server.get("/resolve").add_query_param("url", SOURCE).await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(
        response.json::<serde_json::Value>(),
        serde_json::json!({ "error": "Failed to fetch page: 404" })
    );
    assert!(cache.get(SOURCE).await.is_none());

    let retry = server.get("/resolve").add_query_param("url", SOURCE).await;
    assert_eq!(retry.status_code(), 500);
    assert_eq!(fetcher.calls(), 2);
}

#[tokio::test]
async fn test_resolve_transport_error() {
    let fetcher = Arc::new(StubFetcher::new().with_error(
        SOURCE,
        FetchError::Transport("error sending request".to_string()),
    ));
    let (server, cache) = server(fetcher);

    let response = server.get("/resolve").add_query_param("url", SOURCE).await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "error sending request"
    );
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn test_resolve_keys_cache_by_url_not_name() {
    let fetcher = Arc::new(StubFetcher::new().with_page(SOURCE, LABELED_PAGE));
    let (server, _cache) = server(fetcher.clone());

    server
        .get("/resolve")
        .add_query_param("url", SOURCE)
        .add_query_param("name", "Acme Design")
        .await
        .assert_status_ok();
    server
        .get("/resolve")
        .add_query_param("url", SOURCE)
        .add_query_param("name", "Someone Else")
        .await
        .assert_status_ok();

    assert_eq!(fetcher.calls(), 1);
}
