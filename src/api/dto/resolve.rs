//! DTOs for the website resolution endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ResolvedWebsite;

/// Query parameters for `GET /resolve`.
///
/// Both fields are optional at the extractor level so a missing `url`
/// produces the endpoint's own 400 body instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ResolveQuery {
    /// Directory detail page to resolve.
    pub url: Option<String>,

    /// Business display name, used for logging only.
    pub name: Option<String>,
}

/// Successful resolution body.
///
/// `website` is the discovered URL or the `"n/a"` sentinel.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub website: String,
}

impl From<ResolvedWebsite> for ResolveResponse {
    fn from(website: ResolvedWebsite) -> Self {
        Self {
            website: website.to_string(),
        }
    }
}
