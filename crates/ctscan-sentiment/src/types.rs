//! Aggregate output types for batch analysis.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use ctscan_core::{Engagement, SentimentLabel};

/// Per-post classification result, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct PostAnalysis {
    pub author: String,
    /// Post text truncated to 300 characters.
    pub text: String,
    pub sentiment: f64,
    pub label: SentimentLabel,
    pub tokens: BTreeSet<String>,
    pub narratives: Vec<String>,
    pub engagement: Engagement,
}

/// A short excerpt retained as supporting evidence for a token or
/// narrative entry.
#[derive(Debug, Clone, Serialize)]
pub struct SampleQuote {
    pub author: String,
    /// Quote text truncated to 200 characters.
    pub text: String,
    pub sentiment: f64,
    /// Likes + retweets at capture time, used for later ranking.
    pub engagement: u64,
}

/// Mention and sentiment split for one token.
#[derive(Debug, Clone, Serialize)]
pub struct TokenStat {
    pub token: String,
    pub mentions: u64,
    pub bullish: u64,
    pub bearish: u64,
    pub neutral: u64,
    /// Up to 5 quotes in first-seen order.
    pub sample_quotes: Vec<SampleQuote>,
}

impl TokenStat {
    /// Derived sentiment: `(bullish − bearish) / mentions`, 0 when empty.
    #[must_use]
    pub fn sentiment(&self) -> f64 {
        if self.mentions == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let score = (self.bullish as f64 - self.bearish as f64) / self.mentions as f64;
        score
    }
}

/// Mention count and running sentiment for one narrative bucket.
#[derive(Debug, Clone, Serialize)]
pub struct NarrativeStat {
    pub name: String,
    pub mentions: u64,
    pub average_sentiment: f64,
    /// Up to 5 quotes in first-seen order.
    pub sample_quotes: Vec<SampleQuote>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: u64,
}

/// Full batch analysis: per-post results plus token, narrative, and
/// keyword aggregates. An empty batch produces a fully-populated
/// zero-valued aggregate so downstream stages run unconditionally.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentAggregate {
    pub total_posts: usize,
    pub average_sentiment: f64,
    pub overall_label: SentimentLabel,
    pub token_stats: BTreeMap<String, TokenStat>,
    pub narrative_stats: BTreeMap<String, NarrativeStat>,
    /// Top 50 words by count, descending.
    pub keyword_frequency: Vec<KeywordCount>,
    pub posts: Vec<PostAnalysis>,
}
