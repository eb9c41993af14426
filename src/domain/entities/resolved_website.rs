//! Outcome of resolving a business website from a directory detail page.

use std::fmt;

/// Placeholder written in place of a website when the page had no candidate.
pub const NOT_FOUND_SENTINEL: &str = "n/a";

/// Result of a successful resolution.
///
/// A page that was fetched but contained no usable link resolves to
/// [`ResolvedWebsite::NotFound`]. Fetch failures are not represented here;
/// they surface as errors and are never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedWebsite {
    /// An external website URL discovered on the page.
    Found(String),
    /// The page was fetched but no candidate link matched.
    NotFound,
}

impl ResolvedWebsite {
    /// Returns the wire representation: the URL or [`NOT_FOUND_SENTINEL`].
    pub fn as_str(&self) -> &str {
        match self {
            Self::Found(url) => url,
            Self::NotFound => NOT_FOUND_SENTINEL,
        }
    }

    /// Returns the URL if one was found.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Found(url) => Some(url),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl From<Option<String>> for ResolvedWebsite {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

impl fmt::Display for ResolvedWebsite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
