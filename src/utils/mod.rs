//! Utility functions shared across the application.
//!
//! - [`delay`] - Randomized politeness delay before outbound fetches
//! - [`source_host`] - Host extraction from source page URLs

pub mod delay;
pub mod source_host;
