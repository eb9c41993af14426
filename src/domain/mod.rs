//! Domain layer containing business entities and logic.
//!
//! This module defines the resolution model, the page-fetching contract and
//! the extraction heuristic, independent of HTTP serving or caching concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`directory`] - Registry of known directory sites
//! - [`fetcher`] - Page fetching trait implemented by the infrastructure layer
//! - [`heuristic`] - Website extraction strategies and their tunable rules
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - [`fetcher::PageFetcher`] is the seam the infrastructure layer implements
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod directory;
pub mod entities;
pub mod fetcher;
pub mod heuristic;
