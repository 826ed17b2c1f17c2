//! Trend aggregation over a batch sentiment analysis.
//!
//! Pure and synchronous: ranks narratives and tokens, surfaces notable
//! posts, and splits consensus from contrarian opinion. Degenerate input
//! (zero posts) produces a fully-shaped report with a warning, never an
//! error.

mod kol;
mod report;
mod types;

pub use kol::is_kol;
pub use report::aggregate;
pub use types::{
    ConsensusAnalysis, NarrativeTrend, NotablePost, OpinionQuote, OverallSentiment, TokenTrend,
    TrendReport,
};
