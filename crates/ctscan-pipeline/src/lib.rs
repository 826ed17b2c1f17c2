//! Pipeline driver: scrape → analyze → aggregate.
//!
//! A thin composition layer that defines the contract between stages.
//! Data flows strictly forward — the scrape batch is the sole input to
//! sentiment analysis, whose aggregate is the sole input to trend
//! aggregation — and nothing here can fail: every stage converts its
//! problems into warnings on the final report.

use std::time::Instant;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use ctscan_core::{ListSource, Post};
use ctscan_scraper::{ListScraper, ScrapeBatch};
use ctscan_sentiment::SentimentAggregate;
use ctscan_trends::TrendReport;

/// Counts and timing describing how the input batch was acquired.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeSummary {
    pub total_posts: usize,
    pub lists_attempted: usize,
    pub lists_succeeded: usize,
    pub lists_failed: usize,
    pub produced_at: DateTime<Utc>,
}

impl ScrapeSummary {
    fn from_batch(batch: &ScrapeBatch) -> Self {
        Self {
            total_posts: batch.posts.len(),
            lists_attempted: batch.lists_attempted,
            lists_succeeded: batch.lists_succeeded(),
            lists_failed: batch.lists_failed,
            produced_at: batch.produced_at,
        }
    }
}

/// Everything one pipeline run produces, as plain structured data for the
/// external renderer.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub generated_at: DateTime<Utc>,
    pub scrape: ScrapeSummary,
    pub sentiment: SentimentAggregate,
    pub trends: TrendReport,
    /// Warnings merged from the acquisition and trend stages.
    pub warnings: Vec<String>,
    pub execution_time_ms: u64,
}

/// Run the full pipeline: scrape the configured lists, then analyze and
/// aggregate. Never fails; worst case is an empty, warning-annotated
/// report.
pub async fn run_scan<R: Rng>(
    scraper: &mut ListScraper<R>,
    lists: &[ListSource],
) -> ScanReport {
    let started = Instant::now();
    let batch = scraper.scrape_lists(lists).await;
    tracing::info!(
        posts = batch.posts.len(),
        lists_failed = batch.lists_failed,
        "scrape stage complete"
    );
    finish(batch, started)
}

/// Run analysis and aggregation over posts the caller already holds,
/// skipping the network entirely.
#[must_use]
pub fn analyze_posts(posts: Vec<Post>) -> ScanReport {
    let started = Instant::now();
    let mut batch = ScrapeBatch::from_posts(posts);
    batch
        .warnings
        .push("scraping skipped; caller provided posts".to_owned());
    finish(batch, started)
}

fn finish(batch: ScrapeBatch, started: Instant) -> ScanReport {
    let sentiment = ctscan_sentiment::analyze(&batch.posts);
    let trends = ctscan_trends::aggregate(&sentiment);
    tracing::info!(
        total_posts = sentiment.total_posts,
        narratives = trends.trending_narratives.len(),
        tokens = trends.token_trends.len(),
        "analysis stages complete"
    );
    let scrape = ScrapeSummary::from_batch(&batch);
    let mut warnings = batch.warnings;
    warnings.extend(trends.warnings.iter().cloned());
    ScanReport {
        generated_at: Utc::now(),
        scrape,
        sentiment,
        trends,
        warnings,
        execution_time_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctscan_core::OriginStrategy;

    fn post(author: &str, text: &str) -> Post {
        Post {
            author: author.to_owned(),
            display_name: author.to_owned(),
            text: text.to_owned(),
            timestamp: None,
            likes: 0,
            retweets: 0,
            replies: 0,
            bookmarks: 0,
            views: 0,
            source_url: String::new(),
            origin: OriginStrategy::Mirror,
            list_tag: "test".to_owned(),
        }
    }

    #[test]
    fn analyze_posts_runs_all_stages() {
        let report = analyze_posts(vec![
            post("alice", "bullish BTC: breakout incoming"),
            post("bob", "bearish BTC: dump warning"),
            post("carol", "neutral ETH chart update"),
        ]);

        assert_eq!(report.scrape.total_posts, 3);
        assert_eq!(report.sentiment.total_posts, 3);
        assert_eq!(report.trends.total_posts, 3);
        assert!(report
            .trends
            .token_trends
            .iter()
            .any(|t| t.token == "BTC"));
        assert!(report.warnings.iter().any(|w| w.contains("skipped")));
    }

    #[test]
    fn empty_input_still_produces_full_report() {
        let report = analyze_posts(Vec::new());
        assert_eq!(report.sentiment.total_posts, 0);
        assert!(report.trends.token_trends.is_empty());
        assert!(!report.trends.warnings.is_empty());
    }

    #[test]
    fn report_serializes_to_json() {
        let report = analyze_posts(vec![post("alice", "sol szn, bullish")]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sentiment"]["total_posts"], serde_json::Value::from(1));
        assert!(json["trends"]["token_trends"].is_array());
    }

    #[tokio::test]
    async fn run_scan_with_no_lists_reports_the_gap() {
        let mut scraper = ListScraper::new(ctscan_scraper::ScraperConfig::default())
            .expect("client should build");
        let report = run_scan(&mut scraper, &[]).await;
        assert_eq!(report.scrape.lists_attempted, 0);
        assert_eq!(report.sentiment.total_posts, 0);
        assert!(report.warnings.iter().any(|w| w.contains("no lists")));
    }
}
