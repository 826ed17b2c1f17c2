//! Scrape batch type and batch-level post-processing.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use ctscan_core::Post;

/// Posts older than this are dropped from the batch.
const RETENTION_HOURS: i64 = 24;

/// Characters of post text that participate in the dedup key.
const DEDUP_PREFIX_CHARS: usize = 80;

/// The result of one scrape pass over all configured lists.
///
/// Posts are deduplicated and time-windowed before the batch is handed
/// out. Invariant: `lists_failed + lists_succeeded() == lists_attempted`.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeBatch {
    pub posts: Vec<Post>,
    pub warnings: Vec<String>,
    pub lists_attempted: usize,
    pub lists_failed: usize,
    pub produced_at: DateTime<Utc>,
}

impl ScrapeBatch {
    pub(crate) fn empty(lists_attempted: usize) -> Self {
        Self {
            posts: Vec::new(),
            warnings: Vec::new(),
            lists_attempted,
            lists_failed: 0,
            produced_at: Utc::now(),
        }
    }

    /// Wraps posts the caller already holds, bypassing acquisition. The
    /// batch still goes through the same time window and dedup pass.
    #[must_use]
    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: dedupe_posts(filter_recent(posts, Utc::now())),
            warnings: Vec::new(),
            lists_attempted: 0,
            lists_failed: 0,
            produced_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn lists_succeeded(&self) -> usize {
        self.lists_attempted - self.lists_failed
    }
}

/// Keep posts from the last 24 hours.
///
/// Posts with no parseable timestamp are retained: dropping them would be
/// silent loss of unverifiable data, not a window decision.
pub(crate) fn filter_recent(posts: Vec<Post>, now: DateTime<Utc>) -> Vec<Post> {
    let cutoff = now - Duration::hours(RETENTION_HOURS);
    posts
        .into_iter()
        .filter(|p| p.timestamp.is_none_or(|ts| ts >= cutoff))
        .collect()
}

/// Deduplicate by `(author, first 80 chars of text)`, keeping the first
/// occurrence. Mirrors frequently serve the same post on several lists.
pub(crate) fn dedupe_posts(posts: Vec<Post>) -> Vec<Post> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    posts
        .into_iter()
        .filter(|p| {
            let prefix: String = p.text.chars().take(DEDUP_PREFIX_CHARS).collect();
            seen.insert((p.author.clone(), prefix))
        })
        .collect()
}
