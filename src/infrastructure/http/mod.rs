//! Outbound HTTP for fetching directory pages.

mod http_page_fetcher;

pub use http_page_fetcher::{DEFAULT_USER_AGENT, HttpPageFetcher, browser_headers, referer_for};
