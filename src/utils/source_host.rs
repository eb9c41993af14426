//! Host extraction from source page URLs.

use url::Url;

/// Extracts the lower-cased host from an absolute URL.
///
/// Ports and credentials are dropped. Returns `None` for relative or
/// malformed URLs and for URLs without a host (e.g. `mailto:`).
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     extract_host("https://WWW.Chamber.example:8443/list/member/1"),
///     Some("www.chamber.example".to_string())
/// );
/// ```
pub fn extract_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .map(|h| h.to_ascii_lowercase())
}
