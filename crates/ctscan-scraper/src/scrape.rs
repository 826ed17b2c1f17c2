//! The per-list scrape loop.

use std::time::Duration;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ctscan_core::ListSource;

use crate::batch::{dedupe_posts, filter_recent, ScrapeBatch};
use crate::error::ScraperError;
use crate::fetch::FetchClient;
use crate::strategy::{fetch_direct, fetch_via_mirrors};

/// Community-run mirror hostnames used for the fallback strategy.
const DEFAULT_MIRROR_ENDPOINTS: &[&str] = &[
    "nitter.privacydev.net",
    "nitter.poast.org",
    "nitter.woodland.cafe",
    "nitter.1d4.us",
    "nitter.kavin.rocks",
    "nitter.unixfox.eu",
];

/// Tuning knobs for [`ListScraper`].
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Additional fetch attempts after the first failure.
    pub max_retries: u32,
    /// Base delay for the attempt-scaled retry schedule.
    pub base_delay_ms: u64,
    /// Mirror endpoints for the fallback strategy. Bare hostnames get an
    /// `https://` prefix; entries with a scheme are used as-is.
    pub mirror_endpoints: Vec<String>,
    /// Minimum politeness delay between successive lists.
    pub politeness_min_ms: u64,
    /// Random extra delay added on top of the minimum.
    pub politeness_jitter_ms: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            max_retries: 1,
            base_delay_ms: 2_000,
            mirror_endpoints: DEFAULT_MIRROR_ENDPOINTS
                .iter()
                .map(|&s| s.to_owned())
                .collect(),
            politeness_min_ms: 1_500,
            politeness_jitter_ms: 1_500,
        }
    }
}

/// Scrapes configured discussion lists into a [`ScrapeBatch`].
///
/// Lists are processed strictly in sequence with a randomized politeness
/// delay between them; mirror infrastructure is shared and community-run,
/// so the scraper never bursts it. The random source is injectable for
/// deterministic tests.
pub struct ListScraper<R: Rng = StdRng> {
    client: FetchClient,
    config: ScraperConfig,
    rng: R,
}

impl ListScraper<StdRng> {
    /// Creates a scraper seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the HTTP client cannot be built.
    pub fn new(config: ScraperConfig) -> Result<Self, ScraperError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> ListScraper<R> {
    /// Creates a scraper with an explicit random source.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the HTTP client cannot be built.
    pub fn with_rng(config: ScraperConfig, rng: R) -> Result<Self, ScraperError> {
        let client = FetchClient::new(
            config.timeout_secs,
            config.max_retries,
            config.base_delay_ms,
        )?;
        Ok(Self {
            client,
            config,
            rng,
        })
    }

    /// Scrapes every configured list and returns the post-processed batch.
    ///
    /// Per list, the direct strategy runs first; only a zero-post result
    /// triggers the mirror fallback. A list counts as failed when both
    /// strategies come back empty, which adds a warning but never aborts
    /// the pass. After all lists: 24-hour time window, then dedup.
    ///
    /// This method never fails: total source failure yields an empty batch
    /// with a terminal warning.
    pub async fn scrape_lists(&mut self, lists: &[ListSource]) -> ScrapeBatch {
        let mut batch = ScrapeBatch::empty(lists.len());

        if lists.is_empty() {
            batch.warnings.push("no lists configured".to_owned());
            return batch;
        }

        for (index, list) in lists.iter().enumerate() {
            if index > 0 {
                self.politeness_pause().await;
            }

            let mut posts = fetch_direct(&self.client, &list.url).await;
            if posts.is_empty() {
                posts = fetch_via_mirrors(
                    &self.client,
                    &self.config.mirror_endpoints,
                    &list.url,
                    &mut self.rng,
                )
                .await;
            }

            if posts.is_empty() {
                batch.lists_failed += 1;
                batch
                    .warnings
                    .push(format!("no posts scraped from \"{}\" ({})", list.name, list.url));
            } else {
                for post in &mut posts {
                    post.list_tag.clone_from(&list.name);
                }
                tracing::info!(list = %list.name, posts = posts.len(), "list scraped");
                batch.posts.extend(posts);
            }
        }

        batch.posts = dedupe_posts(filter_recent(batch.posts, Utc::now()));

        if batch.posts.is_empty() && batch.lists_failed > 0 {
            batch.warnings.push(
                "all scraping strategies failed; the source and its mirrors may be blocking requests"
                    .to_owned(),
            );
        }

        batch
    }

    async fn politeness_pause(&mut self) {
        let jitter = if self.config.politeness_jitter_ms == 0 {
            0
        } else {
            self.rng.random_range(0..=self.config.politeness_jitter_ms)
        };
        let delay = self.config.politeness_min_ms + jitter;
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
    }
}
