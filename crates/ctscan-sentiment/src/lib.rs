//! Lexicon-based sentiment and narrative classification.
//!
//! Everything in this crate is a pure function over post text: no network,
//! no shared mutable state, safe to run concurrently on independent
//! batches. The lexicon tables are process-wide constants.

mod analyze;
mod lexicon;
mod narratives;
mod score;
mod tokens;
mod types;

pub use analyze::analyze;
pub use narratives::identify_narratives;
pub use score::score_sentiment;
pub use tokens::extract_tokens;
pub use types::{
    KeywordCount, NarrativeStat, PostAnalysis, SampleQuote, SentimentAggregate, TokenStat,
};
