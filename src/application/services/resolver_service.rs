//! Website resolution service.

use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::entities::{ResolutionRequest, ResolvedWebsite};
use crate::domain::fetcher::PageFetcher;
use crate::domain::heuristic::{HeuristicRules, extract_website};
use crate::error::AppError;
use crate::infrastructure::cache::WebsiteCache;
use crate::utils::delay::PolitenessDelay;
use crate::utils::source_host::extract_host;

/// Resolves a business's external website from its directory detail page.
///
/// Lookups are memoized by source URL. Fetch failures are returned to the
/// caller and never cached, so the next call for the same URL fetches again.
pub struct ResolverService {
    fetcher: Arc<dyn PageFetcher>,
    cache: Arc<dyn WebsiteCache>,
    rules: HeuristicRules,
    delay: PolitenessDelay,
}

impl ResolverService {
    /// Creates a new resolver service.
    ///
    /// # Arguments
    ///
    /// - `fetcher` - Outbound page fetcher
    /// - `cache` - Resolution cache, owned for the process lifetime
    /// - `rules` - Indicator phrases and excluded domains
    /// - `delay` - Pause drawn before every fetch on a cache miss
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        cache: Arc<dyn WebsiteCache>,
        rules: HeuristicRules,
        delay: PolitenessDelay,
    ) -> Self {
        Self {
            fetcher,
            cache,
            rules,
            delay,
        }
    }

    /// Resolves the website for a detail page.
    ///
    /// # Request Flow
    ///
    /// 1. Return the cached value if present (no delay, no fetch)
    /// 2. Sleep for a random politeness delay
    /// 3. Fetch the page
    /// 4. Run the label-match strategy, then the external-link fallback,
    ///    excluding the source page's own host
    /// 5. Cache the result (`Found` or `NotFound`) and return it
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UpstreamStatus`] for non-2xx responses and
    /// [`AppError::Transport`] for network failures. Neither is cached.
    pub async fn resolve(&self, request: &ResolutionRequest) -> Result<ResolvedWebsite, AppError> {
        if let Some(cached) = self.cache.get(&request.source_url).await {
            debug!(
                "Returning cached website for {}: {}",
                request.display_name, cached
            );
            return Ok(cached);
        }

        let pause = self.delay.sample();
        debug!(
            "Waiting {}ms before fetching {}",
            pause.as_millis(),
            request.source_url
        );
        tokio::time::sleep(pause).await;

        let html = self.fetcher.fetch(&request.source_url).await?;

        let website = extract_website(&html, &self.rules_for(&request.source_url));

        info!(
            name = %request.display_name,
            source = %request.source_url,
            website = %website,
            "Resolved website"
        );

        self.cache
            .put(&request.source_url, website.clone())
            .await;

        Ok(website)
    }

    /// Configured rules plus the source page's own host as an exclusion.
    fn rules_for(&self, source_url: &str) -> Cow<'_, HeuristicRules> {
        match extract_host(source_url) {
            Some(host) => Cow::Owned(self.rules.clone().exclude_host(&host)),
            None => Cow::Borrowed(&self.rules),
        }
    }

    pub fn cache(&self) -> &Arc<dyn WebsiteCache> {
        &self.cache
    }

    pub fn rules(&self) -> &HeuristicRules {
        &self.rules
    }
}
