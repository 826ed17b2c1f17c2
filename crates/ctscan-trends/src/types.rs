//! Trend report types handed to the external renderer.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use ctscan_core::{Engagement, SentimentLabel};
use ctscan_sentiment::{KeywordCount, SampleQuote};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct OverallSentiment {
    pub score: f64,
    pub label: SentimentLabel,
}

/// One ranked narrative entry.
#[derive(Debug, Clone, Serialize)]
pub struct NarrativeTrend {
    pub narrative: String,
    pub mentions: u64,
    pub average_sentiment: f64,
    pub label: SentimentLabel,
    /// First 3 retained sample quotes.
    pub sample_quotes: Vec<SampleQuote>,
}

/// One ranked token entry with its sentiment split.
#[derive(Debug, Clone, Serialize)]
pub struct TokenTrend {
    pub token: String,
    pub mentions: u64,
    pub bullish: u64,
    pub bearish: u64,
    pub neutral: u64,
    /// `(bullish − bearish) / mentions`, rounded to 3 decimals.
    pub sentiment: f64,
    /// Labelled by count comparison, not score: equal counts are neutral.
    pub label: SentimentLabel,
    /// Top 3 quotes by likes + retweets.
    pub top_quotes: Vec<SampleQuote>,
}

/// A high-signal post: allow-listed author or high absolute engagement.
#[derive(Debug, Clone, Serialize)]
pub struct NotablePost {
    pub author: String,
    pub text: String,
    pub sentiment: f64,
    pub label: SentimentLabel,
    pub tokens: BTreeSet<String>,
    pub narratives: Vec<String>,
    pub engagement: Engagement,
    /// `true` when the author matched the KOL allow-list (as opposed to
    /// qualifying on engagement alone).
    pub via_allow_list: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpinionQuote {
    pub author: String,
    pub text: String,
    pub sentiment: f64,
}

/// Consensus-vs-contrarian split relative to the corpus average.
#[derive(Debug, Clone, Serialize)]
pub struct ConsensusAnalysis {
    pub overall_bias: SentimentLabel,
    pub average_sentiment: f64,
    pub consensus_count: usize,
    pub contrarian_count: usize,
    /// Top 5 consensus posts by likes + retweets.
    pub top_consensus: Vec<OpinionQuote>,
    /// Top 5 contrarian posts by likes + retweets.
    pub top_contrarian: Vec<OpinionQuote>,
}

/// The ranked trend report.
#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub generated_at: DateTime<Utc>,
    pub total_posts: usize,
    pub overall_sentiment: OverallSentiment,
    /// Top 10 narratives by mention count.
    pub trending_narratives: Vec<NarrativeTrend>,
    /// Top 25 tokens by mention count.
    pub token_trends: Vec<TokenTrend>,
    /// Top 20 notable posts by likes + 3×retweets.
    pub notable_posts: Vec<NotablePost>,
    pub consensus: ConsensusAnalysis,
    /// Top 20 keywords.
    pub top_keywords: Vec<KeywordCount>,
    pub warnings: Vec<String>,
}
