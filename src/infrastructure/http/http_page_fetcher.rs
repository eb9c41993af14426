//! `reqwest`-backed page fetcher impersonating a desktop browser.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, CONNECTION, DNT, HeaderMap, HeaderValue, REFERER,
    UPGRADE_INSECURE_REQUESTS,
};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::domain::fetcher::{FetchError, PageFetcher};

/// User-Agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTTP page fetcher with a fixed browser-like header set and a bounded timeout.
///
/// Redirects are followed (up to 5). Only 2xx responses count as success.
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    /// Builds the client.
    ///
    /// # Arguments
    ///
    /// - `directory_host` - Default `Referer` host, used when a URL has no origin
    /// - `user_agent` - User-Agent string
    /// - `timeout` - Whole-request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the host or user agent are not valid header values,
    /// or if the TLS backend fails to initialize.
    pub fn new(directory_host: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(browser_headers(directory_host)?)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

/// Browser-impersonating headers, with `Referer` pointing at the directory host.
///
/// The `Referer` is only a default: each fetch sends the origin of the page
/// it requests, so pages on other directories carry their own host.
pub fn browser_headers(directory_host: &str) -> Result<HeaderMap> {
    let referer = format!("https://{}/", directory_host.trim().trim_end_matches('/'));

    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(
        REFERER,
        HeaderValue::from_str(&referer)
            .with_context(|| format!("Invalid directory host for Referer: {}", directory_host))?,
    );
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers.insert(DNT, HeaderValue::from_static("1"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=0"));

    Ok(headers)
}

/// `Referer` for a request: the origin of the page being fetched.
///
/// Returns `None` for URLs without a scheme and host, in which case the
/// client's default (the configured directory host) is sent.
pub fn referer_for(url: &str) -> Option<HeaderValue> {
    let origin = Url::parse(url).ok()?.origin();
    if !origin.is_tuple() {
        return None;
    }

    HeaderValue::from_str(&format!("{}/", origin.ascii_serialization())).ok()
}

/// Formats a `reqwest` error with its whole cause chain, e.g.
/// `error sending request for url (..): client error (Connect): tcp connect error: Connection refused (os error 111)`.
fn describe(e: reqwest::Error) -> String {
    format!("{:#}", anyhow::Error::from(e))
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let mut request = self.client.get(url);
        if let Some(referer) = referer_for(url) {
            request = request.header(REFERER, referer);
        }

        let response = request.send().await.map_err(|e| {
            let message = describe(e);
            warn!("Request to {} failed: {}", url, message);
            FetchError::Transport(message)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP {} for {}", status, url);
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Body(describe(e)))
    }
}
