//! Shared domain types for the CT signal pipeline.
//!
//! Everything downstream of the scraper works on [`Post`] values; the
//! three-way [`SentimentLabel`] is the single classification scale used at
//! post, token, narrative, and corpus level.

mod label;
mod post;

pub use label::SentimentLabel;
pub use post::{Engagement, ListSource, OriginStrategy, Post};
