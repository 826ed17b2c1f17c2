use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which acquisition strategy produced a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginStrategy {
    /// Fetched straight from the primary source URL.
    Direct,
    /// Fetched from a community-run mirror endpoint.
    Mirror,
}

/// One discussion list to scrape: a human-readable name plus the source URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSource {
    pub name: String,
    pub url: String,
}

/// A single scraped post. Immutable once produced by the scraper.
///
/// Engagement counters default to 0 when the source page does not expose
/// them (the direct source rarely does).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Handle of the posting account, without a leading `@`.
    pub author: String,
    pub display_name: String,
    pub text: String,
    /// `None` when the source markup carried no parseable timestamp.
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub retweets: u64,
    #[serde(default)]
    pub replies: u64,
    #[serde(default)]
    pub bookmarks: u64,
    #[serde(default)]
    pub views: u64,
    pub source_url: String,
    pub origin: OriginStrategy,
    /// Name of the list this post was scraped from.
    pub list_tag: String,
}

impl Post {
    /// The four engagement counters carried into analysis output.
    #[must_use]
    pub fn engagement(&self) -> Engagement {
        Engagement {
            likes: self.likes,
            retweets: self.retweets,
            views: self.views,
            bookmarks: self.bookmarks,
        }
    }
}

/// Engagement counters attached to a post analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub likes: u64,
    pub retweets: u64,
    pub views: u64,
    pub bookmarks: u64,
}
