use std::collections::{BTreeMap, BTreeSet};

use ctscan_core::{Engagement, OriginStrategy, Post, SentimentLabel};
use ctscan_sentiment::{analyze, PostAnalysis, SampleQuote, SentimentAggregate, TokenStat};

use super::*;

fn analysis(author: &str, sentiment: f64, likes: u64, retweets: u64) -> PostAnalysis {
    PostAnalysis {
        author: author.to_owned(),
        text: format!("take from {author}"),
        sentiment,
        label: SentimentLabel::from_score(sentiment),
        tokens: BTreeSet::new(),
        narratives: Vec::new(),
        engagement: Engagement {
            likes,
            retweets,
            views: 0,
            bookmarks: 0,
        },
    }
}

/// Aggregate with a pinned corpus average and hand-built per-post rows.
fn aggregate_of(average_sentiment: f64, posts: Vec<PostAnalysis>) -> SentimentAggregate {
    SentimentAggregate {
        total_posts: posts.len(),
        average_sentiment,
        overall_label: SentimentLabel::from_score(average_sentiment),
        token_stats: BTreeMap::new(),
        narrative_stats: BTreeMap::new(),
        keyword_frequency: Vec::new(),
        posts,
    }
}

fn quote(author: &str, engagement: u64) -> SampleQuote {
    SampleQuote {
        author: author.to_owned(),
        text: "quote".to_owned(),
        sentiment: 0.0,
        engagement,
    }
}

#[test]
fn zero_posts_yields_shaped_report_with_warning() {
    let report = aggregate(&aggregate_of(0.0, Vec::new()));
    assert_eq!(report.total_posts, 0);
    assert!(report.trending_narratives.is_empty());
    assert!(report.token_trends.is_empty());
    assert!(report.notable_posts.is_empty());
    assert_eq!(report.consensus.overall_bias, SentimentLabel::Neutral);
    assert_eq!(report.consensus.consensus_count, 0);
    assert!(
        !report.warnings.is_empty(),
        "degenerate input must carry a warning"
    );
}

#[test]
fn contrarian_and_consensus_split_against_bullish_average() {
    let agg = aggregate_of(
        0.5,
        vec![
            analysis("contrarian", -0.4, 10, 0),
            analysis("agreeing", 0.45, 5, 0),
            analysis("lukewarm", 0.05, 100, 0), // neutral: neither camp
        ],
    );
    let consensus = consensus_analysis(&agg);
    assert_eq!(consensus.overall_bias, SentimentLabel::Bullish);
    assert_eq!(consensus.contrarian_count, 1);
    assert_eq!(consensus.top_contrarian[0].author, "contrarian");
    assert_eq!(consensus.consensus_count, 1);
    assert_eq!(consensus.top_consensus[0].author, "agreeing");
}

#[test]
fn contrarian_split_against_bearish_average() {
    let agg = aggregate_of(
        -0.4,
        vec![
            analysis("bull_in_a_bear_tape", 0.6, 0, 0),
            analysis("doomer", -0.5, 0, 0),
        ],
    );
    let consensus = consensus_analysis(&agg);
    assert_eq!(consensus.overall_bias, SentimentLabel::Bearish);
    assert_eq!(consensus.contrarian_count, 1);
    assert_eq!(consensus.top_contrarian[0].author, "bull_in_a_bear_tape");
    assert_eq!(consensus.consensus_count, 1);
}

#[test]
fn opinion_lists_rank_by_engagement_and_cap_at_five() {
    let posts = (0..8u64)
        .map(|i| analysis(&format!("bull{i}"), 0.5, i * 10, 0))
        .collect();
    let consensus = consensus_analysis(&aggregate_of(0.5, posts));
    assert_eq!(consensus.consensus_count, 8);
    assert_eq!(consensus.top_consensus.len(), 5);
    assert_eq!(consensus.top_consensus[0].author, "bull7");
}

#[test]
fn token_label_tie_breaks_on_counts() {
    let mut token_stats = BTreeMap::new();
    for (token, bullish, bearish) in [("AAA", 3u64, 1u64), ("BBB", 1, 3), ("CCC", 2, 2)] {
        token_stats.insert(
            token.to_owned(),
            TokenStat {
                token: token.to_owned(),
                mentions: bullish + bearish,
                bullish,
                bearish,
                neutral: 0,
                sample_quotes: Vec::new(),
            },
        );
    }
    let mut agg = aggregate_of(0.0, vec![analysis("someone", 0.0, 0, 0)]);
    agg.token_stats = token_stats;

    let trends = token_trends(&agg);
    let by_token: BTreeMap<&str, &TokenTrend> =
        trends.iter().map(|t| (t.token.as_str(), t)).collect();
    assert_eq!(by_token["AAA"].label, SentimentLabel::Bullish);
    assert_eq!(by_token["AAA"].sentiment, 0.5);
    assert_eq!(by_token["BBB"].label, SentimentLabel::Bearish);
    assert_eq!(by_token["CCC"].label, SentimentLabel::Neutral);
    assert_eq!(by_token["CCC"].sentiment, 0.0);
}

#[test]
fn token_quotes_rank_by_engagement() {
    let mut agg = aggregate_of(0.0, vec![analysis("someone", 0.0, 0, 0)]);
    agg.token_stats.insert(
        "BTC".to_owned(),
        TokenStat {
            token: "BTC".to_owned(),
            mentions: 4,
            bullish: 4,
            bearish: 0,
            neutral: 0,
            sample_quotes: vec![
                quote("low", 5),
                quote("high", 500),
                quote("mid", 50),
                quote("floor", 1),
            ],
        },
    );
    let trends = token_trends(&agg);
    let authors: Vec<&str> = trends[0]
        .top_quotes
        .iter()
        .map(|q| q.author.as_str())
        .collect();
    assert_eq!(authors, vec!["high", "mid", "low"]);
}

#[test]
fn notable_posts_union_allow_list_and_engagement_floor() {
    let agg = aggregate_of(
        0.0,
        vec![
            analysis("cobie", 0.2, 0, 0),        // allow-listed, zero engagement
            analysis("loudanon", 0.0, 80, 0),    // likes floor
            analysis("spreader", 0.0, 0, 25),    // retweets floor
            analysis("quietanon", 0.0, 10, 2),   // below every floor
        ],
    );
    let notable = notable_posts(&agg);
    let authors: Vec<&str> = notable.iter().map(|p| p.author.as_str()).collect();
    assert!(authors.contains(&"cobie"));
    assert!(authors.contains(&"loudanon"));
    assert!(authors.contains(&"spreader"));
    assert!(!authors.contains(&"quietanon"));

    let cobie = notable.iter().find(|p| p.author == "cobie").unwrap();
    assert!(cobie.via_allow_list);
    let anon = notable.iter().find(|p| p.author == "loudanon").unwrap();
    assert!(!anon.via_allow_list);
}

#[test]
fn notable_ranking_weighs_retweets_triple() {
    let agg = aggregate_of(
        0.0,
        vec![
            analysis("likes_heavy", 0.0, 90, 0),  // score 90
            analysis("rt_heavy", 0.0, 0, 40),     // score 120
        ],
    );
    let notable = notable_posts(&agg);
    assert_eq!(notable[0].author, "rt_heavy");
    assert_eq!(notable[1].author, "likes_heavy");
}

#[test]
fn views_floor_alone_qualifies() {
    let mut post = analysis("lurker_magnet", 0.0, 0, 0);
    post.engagement.views = 10_000;
    let notable = notable_posts(&aggregate_of(0.0, vec![post]));
    assert_eq!(notable.len(), 1);
    assert!(!notable[0].via_allow_list);
}

fn raw_post(author: &str, text: &str) -> Post {
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
fn end_to_end_three_post_scenario() {
    let posts = vec![
        raw_post("alice", "bullish BTC: breakout incoming"),
        raw_post("bob", "bearish BTC: dump warning"),
        raw_post("carol", "neutral ETH chart update"),
    ];
    let report = aggregate(&analyze(&posts));

    assert_eq!(report.total_posts, 3);
    let btc = report
        .token_trends
        .iter()
        .find(|t| t.token == "BTC")
        .expect("BTC should rank");
    assert_eq!(btc.bullish, 1);
    assert_eq!(btc.bearish, 1);
    assert_eq!(btc.sentiment, 0.0);
    assert_eq!(btc.label, SentimentLabel::Neutral);

    let bitcoin = report
        .trending_narratives
        .iter()
        .find(|n| n.narrative == "Bitcoin")
        .expect("Bitcoin narrative should rank");
    assert!(bitcoin.mentions >= 2);
    assert!(report.warnings.is_empty());
}

#[test]
fn report_serializes_to_plain_json() {
    let posts = vec![
        raw_post("alice", "bullish BTC: breakout incoming"),
        raw_post("bob", "bearish BTC: dump warning"),
    ];
    let report = aggregate(&analyze(&posts));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["total_posts"], serde_json::Value::from(2));
    assert_eq!(json["overall_sentiment"]["label"], serde_json::Value::from("neutral"));
    assert_eq!(json["token_trends"][0]["token"], serde_json::Value::from("BTC"));
    assert_eq!(json["consensus"]["overall_bias"], serde_json::Value::from("neutral"));
    assert!(json["notable_posts"].is_array());
}

#[test]
fn rankings_are_capped() {
    let mut agg = aggregate_of(0.0, vec![analysis("someone", 0.0, 0, 0)]);
    for i in 0..40u64 {
        agg.token_stats.insert(
            format!("TK{i:02}"),
            TokenStat {
                token: format!("TK{i:02}"),
                mentions: 40 - i,
                bullish: 0,
                bearish: 0,
                neutral: 40 - i,
                sample_quotes: Vec::new(),
            },
        );
    }
    let trends = token_trends(&agg);
    assert_eq!(trends.len(), 25);
    assert_eq!(trends[0].token, "TK00", "highest mention count first");
}
