//! Website extraction heuristic for directory detail pages.
//!
//! Two strategies run in order and the first match wins:
//!
//! 1. **Label match** - a link whose visible text or `aria-label` mentions a
//!    website indicator ("website", "visit site", ...).
//! 2. **External-link fallback** - the first absolute `http(s)` link that does
//!    not point at a map, a social network, or the directory itself.
//!
//! If neither matches, the page resolves to [`ResolvedWebsite::NotFound`].
//! Extraction never fails: malformed markup simply yields fewer links.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::domain::entities::ResolvedWebsite;

/// Indicator phrases that mark a link as the business's own website.
pub const DEFAULT_LABEL_INDICATORS: &[&str] = &[
    "website",
    "visit site",
    "view site",
    "web",
    "site",
    "view our site",
];

/// Substrings of destinations that are never the business's website.
pub const DEFAULT_EXCLUDED_DOMAINS: &[&str] = &[
    "google.com/maps",
    "facebook.com",
    "twitter.com",
    "instagram.com",
    "linkedin.com",
    "youtube.com",
];

static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

static ABSOLUTE_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://[^\s/?#]+\S*$").unwrap());

/// Tunable data driving the heuristic.
///
/// Indicators and excluded domains are matched as case-insensitive
/// substrings. Excluded hosts are matched against the destination's host,
/// so `x.com` excludes `x.com` and `api.x.com` but not `fedex.com`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicRules {
    pub label_indicators: Vec<String>,
    pub excluded_domains: Vec<String>,
    pub excluded_hosts: Vec<String>,
}

impl Default for HeuristicRules {
    fn default() -> Self {
        Self {
            label_indicators: DEFAULT_LABEL_INDICATORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            excluded_domains: DEFAULT_EXCLUDED_DOMAINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            excluded_hosts: Vec::new(),
        }
    }
}

impl HeuristicRules {
    /// Default rules with the directory's own host excluded.
    ///
    /// A leading `www.` is dropped so links to any subdomain of the directory
    /// are excluded as well.
    pub fn for_directory(directory_host: &str) -> Self {
        Self::default().exclude_host(directory_host)
    }

    /// Adds a host to the excluded hosts, ignoring blanks and duplicates.
    pub fn exclude_host(mut self, host: &str) -> Self {
        let host = host.trim().to_ascii_lowercase();
        let host = host.strip_prefix("www.").unwrap_or(&host);

        if !host.is_empty() && !self.excluded_hosts.iter().any(|h| h == host) {
            self.excluded_hosts.push(host.to_string());
        }

        self
    }

    /// Returns true if either the link text or its accessibility label
    /// contains an indicator.
    pub fn matches_label(&self, text: &str, aria_label: &str) -> bool {
        let text = text.trim().to_lowercase();
        let aria_label = aria_label.trim().to_lowercase();

        self.label_indicators.iter().any(|ind| {
            let ind = ind.to_lowercase();
            text.contains(&ind) || aria_label.contains(&ind)
        })
    }

    /// Returns true if the destination contains an excluded domain or points
    /// at an excluded host or one of its subdomains.
    pub fn is_excluded(&self, href: &str) -> bool {
        let lowered = href.to_lowercase();
        if self
            .excluded_domains
            .iter()
            .any(|domain| lowered.contains(&domain.to_lowercase()))
        {
            return true;
        }

        let Some(host) = destination_host(href) else {
            return false;
        };

        self.excluded_hosts.iter().any(|excluded| {
            let excluded = excluded.to_ascii_lowercase();
            host == excluded
                || host
                    .strip_suffix(excluded.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }
}

/// Runs both strategies over a fetched page.
pub fn extract_website(html: &str, rules: &HeuristicRules) -> ResolvedWebsite {
    let document = Html::parse_document(html);

    find_labeled_link(&document, rules)
        .or_else(|| find_external_link(&document, rules))
        .into()
}

/// Label match: first link with a destination whose text or `aria-label`
/// mentions a website indicator.
pub fn find_labeled_link(document: &Html, rules: &HeuristicRules) -> Option<String> {
    document.select(&LINK_SELECTOR).find_map(|link| {
        let href = link_destination(&link)?;
        let text = link.text().collect::<String>();
        let aria_label = link.value().attr("aria-label").unwrap_or_default();

        rules
            .matches_label(&text, aria_label)
            .then(|| href.to_string())
    })
}

/// External-link fallback: first absolute `http(s)` destination not on the
/// exclusion list.
pub fn find_external_link(document: &Html, rules: &HeuristicRules) -> Option<String> {
    document.select(&LINK_SELECTOR).find_map(|link| {
        let href = link_destination(&link)?;

        (is_absolute_http_url(href) && !rules.is_excluded(href)).then(|| href.to_string())
    })
}

/// Returns true for absolute `http://` or `https://` URLs with a host.
pub fn is_absolute_http_url(href: &str) -> bool {
    ABSOLUTE_URL_REGEX.is_match(href)
}

fn destination_host(href: &str) -> Option<String> {
    Url::parse(href)
        .ok()?
        .host_str()
        .map(|h| h.trim_end_matches('.').to_ascii_lowercase())
}

fn link_destination<'a>(link: &ElementRef<'a>) -> Option<&'a str> {
    link.value()
        .attr("href")
        .map(str::trim)
        .filter(|href| !href.is_empty())
}
