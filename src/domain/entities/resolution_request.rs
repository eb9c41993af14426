//! Inbound request to resolve a business website.

/// Display name used when the caller does not supply one.
pub const DEFAULT_DISPLAY_NAME: &str = "Unknown business";

/// A single resolution request.
///
/// `display_name` is only used for logging; the cache is keyed by
/// `source_url` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub source_url: String,
    pub display_name: String,
}

impl ResolutionRequest {
    /// Builds a request from raw caller input.
    ///
    /// Returns `None` when `source_url` is absent or blank. A blank or
    /// missing `display_name` falls back to [`DEFAULT_DISPLAY_NAME`].
    pub fn new(source_url: Option<String>, display_name: Option<String>) -> Option<Self> {
        let source_url = source_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())?;

        let display_name = display_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());

        Some(Self {
            source_url,
            display_name,
        })
    }
}
