use serde::{Deserialize, Serialize};

/// Three-way sentiment classification.
///
/// The same 0.1 threshold is applied everywhere a score is labelled:
/// individual posts, per-token splits, narrative averages, and the corpus
/// average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Bullish,
    Bearish,
    Neutral,
}

impl SentimentLabel {
    /// Label a score: `> 0.1` bullish, `< -0.1` bearish, otherwise neutral.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > 0.1 {
            Self::Bullish
        } else if score < -0.1 {
            Self::Bearish
        } else {
            Self::Neutral
        }
    }
}
