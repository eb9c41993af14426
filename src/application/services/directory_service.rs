//! Directory search-page scraping and batch output.

use scraper::{ElementRef, Html, Selector};
use std::path::Path;
use std::sync::{Arc, LazyLock};
use tracing::{info, warn};
use url::Url;

use crate::application::services::ResolverService;
use crate::domain::entities::{BusinessRecord, DirectoryListing, ResolutionRequest};
use crate::domain::fetcher::PageFetcher;
use crate::error::AppError;

pub const ADDRESS_NOT_AVAILABLE: &str = "Address not available";
pub const PHONE_NOT_AVAILABLE: &str = "Phone number not available";
pub const WEBSITE_NOT_AVAILABLE: &str = "Company website not available";

const CARD_WRAPPER_CLASS: &str = "gz-list-card-wrapper";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h5.card-title").unwrap());
static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static ADDRESS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li.gz-card-address").unwrap());
static STREET_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.gz-street-address").unwrap());
static CITY_STATE_ZIP_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"div[itemprop="citystatezip"]"#).unwrap());
static CITY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.gz-address-city").unwrap());
static SPAN_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span").unwrap());
static PHONE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li.gz-card-phone").unwrap());

/// Scrapes business listings from a directory search-results page.
pub struct DirectoryService {
    fetcher: Arc<dyn PageFetcher>,
}

impl DirectoryService {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Builds the search URL for a keyword on a directory host.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the host does not form a valid URL.
    pub fn search_url(directory_host: &str, query: &str) -> Result<Url, AppError> {
        let base = format!("https://{}/list/search", directory_host.trim());
        Url::parse_with_params(&base, &[("q", query), ("c", ""), ("sa", "False")])
            .map_err(|e| AppError::bad_request(format!("Invalid search URL {}: {}", base, e)))
    }

    /// Fetches a search page and extracts its listings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UpstreamStatus`] or [`AppError::Transport`] if the
    /// search page cannot be fetched.
    pub async fn fetch_listings(&self, search_url: &Url) -> Result<Vec<DirectoryListing>, AppError> {
        let html = self.fetcher.fetch(search_url.as_str()).await?;
        let listings = parse_listings(&html, search_url);

        info!("Found {} listings on {}", listings.len(), search_url);

        Ok(listings)
    }

    /// Resolves a listing's website and completes it into a record.
    ///
    /// Resolution failures do not abort the batch: an upstream status error
    /// becomes [`WEBSITE_NOT_AVAILABLE`], any other error is written as
    /// `Error fetching website: <message>`.
    pub async fn complete_listing(
        &self,
        resolver: &ResolverService,
        listing: DirectoryListing,
    ) -> BusinessRecord {
        let request = ResolutionRequest::new(
            Some(listing.detail_url.clone()),
            Some(listing.name.clone()),
        );

        let website = match request {
            Some(request) => match resolver.resolve(&request).await {
                Ok(website) => website.to_string(),
                Err(AppError::UpstreamStatus { status }) => {
                    warn!("Detail page for {} returned {}", listing.name, status);
                    WEBSITE_NOT_AVAILABLE.to_string()
                }
                Err(e) => {
                    warn!("Failed to resolve website for {}: {}", listing.name, e);
                    format!("Error fetching website: {}", e)
                }
            },
            None => WEBSITE_NOT_AVAILABLE.to_string(),
        };

        listing.into_record(website)
    }
}

/// Extracts listings from search-results markup.
///
/// Each `h5.card-title` provides the name and detail link; the enclosing
/// `div.gz-list-card-wrapper` provides address and phone. Titles without a
/// link or without a card wrapper are skipped. Relative detail links are
/// resolved against `base`.
pub fn parse_listings(html: &str, base: &Url) -> Vec<DirectoryListing> {
    let document = Html::parse_document(html);
    let mut listings = Vec::new();

    for title in document.select(&TITLE_SELECTOR) {
        let Some(link) = title.select(&LINK_SELECTOR).next() else {
            warn!("Business name <a> tag not found. Skipping...");
            continue;
        };

        let name = link.text().collect::<String>().trim().to_string();

        let Some(href) = link.value().attr("href").map(str::trim) else {
            warn!("No detail link for {}. Skipping...", name);
            continue;
        };

        let detail_url = base
            .join(href)
            .map(String::from)
            .unwrap_or_else(|_| href.to_string());

        let Some(card) = card_wrapper(title) else {
            warn!("Parent div not found for {}. Skipping...", name);
            continue;
        };

        listings.push(DirectoryListing {
            name,
            detail_url,
            address: extract_address(card),
            phone: extract_phone(card),
        });
    }

    listings
}

/// Renders records in the batch output format.
pub fn render_records(records: &[BusinessRecord]) -> String {
    records.iter().map(BusinessRecord::to_block).collect()
}

/// Writes records to a text file, replacing any existing content.
pub fn write_records(path: &Path, records: &[BusinessRecord]) -> std::io::Result<()> {
    std::fs::write(path, render_records(records))
}

fn card_wrapper(title: ElementRef<'_>) -> Option<ElementRef<'_>> {
    title.ancestors().filter_map(ElementRef::wrap).find(|el| {
        el.value().name() == "div" && el.value().classes().any(|c| c == CARD_WRAPPER_CLASS)
    })
}

fn extract_address(card: ElementRef<'_>) -> String {
    let Some(address) = card.select(&ADDRESS_SELECTOR).next() else {
        return ADDRESS_NOT_AVAILABLE.to_string();
    };

    let street = address
        .select(&STREET_SELECTOR)
        .map(stripped_text)
        .collect::<Vec<_>>()
        .join(", ");

    let Some(city_state_zip) = address.select(&CITY_STATE_ZIP_SELECTOR).next() else {
        return street;
    };

    let spans: Vec<_> = city_state_zip.select(&SPAN_SELECTOR).collect();

    let city = city_state_zip
        .select(&CITY_SELECTOR)
        .next()
        .map(stripped_text)
        .unwrap_or_else(|| "City not available".to_string());
    let state = spans
        .get(1)
        .map(|s| stripped_text(*s))
        .unwrap_or_else(|| "State not available".to_string());
    let zip = spans
        .get(2)
        .map(|s| stripped_text(*s))
        .unwrap_or_else(|| "Zip not available".to_string());

    format!("{}\n{}, {} {}", street, city, state, zip)
}

fn extract_phone(card: ElementRef<'_>) -> String {
    card.select(&PHONE_SELECTOR)
        .next()
        .and_then(|li| li.select(&LINK_SELECTOR).next())
        .map(|a| a.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| PHONE_NOT_AVAILABLE.to_string())
}

/// Concatenates the element's text nodes, each trimmed.
fn stripped_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).collect()
}
