//! Batch scraper for directory search results.
//!
//! Fetches a directory search page, extracts each listing's name, address
//! and phone, resolves its website from the detail page, and writes the
//! results to a plain-text file.
//!
//! # Usage
//!
//! ```bash
//! # Search the configured directory for "design"
//! cargo run --bin scrape -- --query design
//!
//! # Search another known directory
//! cargo run --bin scrape -- --directory dayton --query design
//!
//! # Scrape an explicit search URL into a custom file
//! cargo run --bin scrape -- \
//!     --search-url "https://www.wilmingtonchamber.org/list/search?q=design&c=&sa=False" \
//!     --output design.txt
//! ```
//!
//! # Output Format
//!
//! One block per business, separated by a blank line:
//!
//! ```text
//! Acme Design
//! 100 Market St
//! Wilmington, NC 28401
//! (910) 555-0100
//! https://acme.example
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `directory_resolver::config`); `DIRECTORY`,
//! `DIRECTORY_HOST`, `FETCH_TIMEOUT_SECONDS`, `DELAY_MIN_MS` and `DELAY_MAX_MS`
//! apply here too. `--directory` overrides `DIRECTORY` and `DIRECTORY_HOST`.

use directory_resolver::application::services::directory_service::write_records;
use directory_resolver::application::services::{DirectoryService, ResolverService};
use directory_resolver::config;
use directory_resolver::domain::directory::{find_directory, known_directory_ids};
use directory_resolver::domain::fetcher::PageFetcher;
use directory_resolver::domain::heuristic::HeuristicRules;
use directory_resolver::infrastructure::cache::MemoryCache;
use directory_resolver::infrastructure::http::HttpPageFetcher;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Export business listings from a directory search.
#[derive(Parser)]
#[command(name = "scrape")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Known directory to search: wilmington or dayton
    #[arg(short, long)]
    directory: Option<String>,

    /// Search keyword on the configured directory host
    #[arg(short, long, default_value = "design", conflicts_with = "search_url")]
    query: String,

    /// Full search-results URL (overrides --query)
    #[arg(long)]
    search_url: Option<String>,

    /// Output file
    #[arg(short, long, default_value = "businesses_output.txt")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let directory_host = match cli.directory.as_deref() {
        Some(id) => find_directory(id)
            .map(|site| site.host.to_string())
            .ok_or_else(|| {
                anyhow!(
                    "Unknown directory '{}', expected one of: {}",
                    id,
                    known_directory_ids()
                )
            })?,
        None => config.directory_host.clone(),
    };

    let search_url = match cli.search_url {
        Some(raw) => Url::parse(&raw).with_context(|| format!("Invalid search URL: {}", raw))?,
        None => DirectoryService::search_url(&directory_host, &cli.query)?,
    };

    let mut rules = HeuristicRules::for_directory(&directory_host);
    if let Some(host) = search_url.host_str() {
        rules = rules.exclude_host(host);
    }

    let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpPageFetcher::new(
        &directory_host,
        &config.user_agent,
        config.fetch_timeout(),
    )?);

    let resolver = ResolverService::new(
        fetcher.clone(),
        Arc::new(MemoryCache::new()),
        rules,
        config.politeness_delay(),
    );
    let directory = DirectoryService::new(fetcher);

    println!("{}", "Directory scrape".bright_blue().bold());
    println!("  Search: {}", search_url.as_str().cyan());
    println!();

    let listings = directory
        .fetch_listings(&search_url)
        .await
        .context("Failed to retrieve the webpage")?;

    if listings.is_empty() {
        println!("{}", "  No listings found".yellow());
    }

    let total = listings.len();
    let mut records = Vec::with_capacity(total);

    for (i, listing) in listings.into_iter().enumerate() {
        let name = listing.name.clone();
        let record = directory.complete_listing(&resolver, listing).await;

        println!(
            "  [{}/{}] {} {}",
            i + 1,
            total,
            name.bright_white(),
            record.website.bright_black()
        );

        records.push(record);
    }

    write_records(&cli.output, &records)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    println!();
    println!(
        "{} {}",
        "Business information has been written to".green().bold(),
        cli.output.display().to_string().bright_white()
    );

    Ok(())
}
