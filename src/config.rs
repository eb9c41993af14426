//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Example
//!
//! ```bash
//! export DIRECTORY="dayton"
//! export FETCH_TIMEOUT_SECONDS="10"
//! export DELAY_MIN_MS="1000"
//! export DELAY_MAX_MS="3000"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DIRECTORY` - Known directory id: `wilmington` or `dayton` (default: `wilmington`)
//! - `DIRECTORY_HOST` - Directory site host, overrides the host of `DIRECTORY`.
//!   Used for the default `Referer`, search URLs and link exclusion
//! - `USER_AGENT` - User-Agent for outbound fetches (default: desktop Chrome)
//! - `FETCH_TIMEOUT_SECONDS` - Per-fetch timeout (default: 10)
//! - `DELAY_MIN_MS` / `DELAY_MAX_MS` - Politeness delay bounds (default: 1000 / 3000)
//! - `CACHE_ENABLED` - Set to `false` to disable the resolution cache (default: `true`)

use anyhow::{Result, anyhow};
use std::env;
use std::time::Duration;

use crate::domain::directory::{DEFAULT_DIRECTORY, find_directory, known_directory_ids};
use crate::infrastructure::http::DEFAULT_USER_AGENT;
use crate::utils::delay::PolitenessDelay;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Id of the selected directory, or `custom` when only `DIRECTORY_HOST` is set.
    pub directory: String,
    /// Host of the directory being scraped. Default `Referer`, search URL
    /// host, and excluded from the external-link fallback.
    pub directory_host: String,
    pub user_agent: String,
    pub fetch_timeout_seconds: u64,
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
    pub cache_enabled: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `DIRECTORY` names an unknown directory and no
    /// `DIRECTORY_HOST` is given.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let (directory, directory_host) = resolve_directory(
            env::var("DIRECTORY").ok().as_deref(),
            env::var("DIRECTORY_HOST").ok(),
        )?;
        let user_agent = env::var("USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let fetch_timeout_seconds = env::var("FETCH_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let delay_min_ms = env::var("DELAY_MIN_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1_000);

        let delay_max_ms = env::var("DELAY_MAX_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3_000);

        let cache_enabled = env::var("CACHE_ENABLED")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(true);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            directory,
            directory_host,
            user_agent,
            fetch_timeout_seconds,
            delay_min_ms,
            delay_max_ms,
            cache_enabled,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `directory_host` is empty or contains a scheme or path
    /// - `fetch_timeout_seconds` is 0
    /// - `delay_min_ms` is greater than `delay_max_ms`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.directory_host.trim().is_empty() {
            anyhow::bail!("DIRECTORY_HOST must not be empty");
        }

        if self.directory_host.contains("://") || self.directory_host.contains('/') {
            anyhow::bail!(
                "DIRECTORY_HOST must be a bare host name, got '{}'",
                self.directory_host
            );
        }

        if self.user_agent.trim().is_empty() {
            anyhow::bail!("USER_AGENT must not be empty");
        }

        if self.fetch_timeout_seconds == 0 {
            anyhow::bail!("FETCH_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.delay_min_ms > self.delay_max_ms {
            anyhow::bail!(
                "DELAY_MIN_MS ({}) must not exceed DELAY_MAX_MS ({})",
                self.delay_min_ms,
                self.delay_max_ms
            );
        }

        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }

    pub fn politeness_delay(&self) -> PolitenessDelay {
        PolitenessDelay::from_millis(self.delay_min_ms, self.delay_max_ms)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!(
            "  Directory: {} ({})",
            self.directory,
            self.directory_host
        );
        tracing::info!("  Fetch timeout: {}s", self.fetch_timeout_seconds);
        tracing::info!(
            "  Politeness delay: {}-{}ms",
            self.delay_min_ms,
            self.delay_max_ms
        );

        if self.cache_enabled {
            tracing::info!("  Cache: in-memory (enabled)");
        } else {
            tracing::info!("  Cache: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Picks the directory id and host from `DIRECTORY` and `DIRECTORY_HOST`.
///
/// An explicit host wins. Without one, the id is looked up among the known
/// directories, defaulting to Wilmington.
pub fn resolve_directory(
    directory: Option<&str>,
    directory_host: Option<String>,
) -> Result<(String, String)> {
    match (directory, directory_host) {
        (id, Some(host)) => Ok((
            id.map(|id| id.trim().to_ascii_lowercase())
                .unwrap_or_else(|| "custom".to_string()),
            host,
        )),
        (id, None) => {
            let id = id.unwrap_or(DEFAULT_DIRECTORY);
            let site = find_directory(id).ok_or_else(|| {
                anyhow!(
                    "Unknown DIRECTORY '{}', expected one of: {}",
                    id,
                    known_directory_ids()
                )
            })?;
            Ok((site.id.to_string(), site.host.to_string()))
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
