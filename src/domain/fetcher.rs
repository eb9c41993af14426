//! Page fetching contract used by the resolver and the directory scraper.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while fetching a page.
///
/// None of these are cached: a later call for the same URL fetches again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status code.
    #[error("Failed to fetch page: {0}")]
    Status(u16),

    /// DNS, connection, TLS or timeout failure.
    #[error("{0}")]
    Transport(String),

    /// The response arrived but its body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Fetches the raw HTML of a page.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpPageFetcher`] - `reqwest` client with browser-like headers
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Issues a GET request and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] for non-2xx responses and
    /// [`FetchError::Transport`] when the request could not complete.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
