//! Ranking and aggregation into the final trend report.

use chrono::Utc;

use ctscan_core::SentimentLabel;
use ctscan_sentiment::{PostAnalysis, SentimentAggregate};

use crate::kol::is_kol;
use crate::types::{
    ConsensusAnalysis, NarrativeTrend, NotablePost, OpinionQuote, OverallSentiment, TokenTrend,
    TrendReport,
};

const MAX_NARRATIVES: usize = 10;
const MAX_TOKENS: usize = 25;
const MAX_NOTABLE: usize = 20;
const MAX_OPINIONS: usize = 5;
const MAX_TOP_KEYWORDS: usize = 20;
const MAX_TREND_QUOTES: usize = 3;

/// Engagement floor that qualifies a post as notable without an
/// allow-list match.
const NOTABLE_MIN_LIKES: u64 = 50;
const NOTABLE_MIN_RETWEETS: u64 = 20;
const NOTABLE_MIN_VIEWS: u64 = 10_000;

/// Build the ranked [`TrendReport`] from a batch analysis.
///
/// Zero-post input returns a fully-shaped report with empty rankings, a
/// neutral bias, and one explicit warning.
#[must_use]
pub fn aggregate(agg: &SentimentAggregate) -> TrendReport {
    if agg.total_posts == 0 {
        return TrendReport {
            generated_at: Utc::now(),
            total_posts: 0,
            overall_sentiment: OverallSentiment {
                score: 0.0,
                label: SentimentLabel::Neutral,
            },
            trending_narratives: Vec::new(),
            token_trends: Vec::new(),
            notable_posts: Vec::new(),
            consensus: ConsensusAnalysis {
                overall_bias: SentimentLabel::Neutral,
                average_sentiment: 0.0,
                consensus_count: 0,
                contrarian_count: 0,
                top_consensus: Vec::new(),
                top_contrarian: Vec::new(),
            },
            top_keywords: Vec::new(),
            warnings: vec!["no post data available for trend analysis".to_owned()],
        };
    }

    TrendReport {
        generated_at: Utc::now(),
        total_posts: agg.total_posts,
        overall_sentiment: OverallSentiment {
            score: agg.average_sentiment,
            label: agg.overall_label,
        },
        trending_narratives: trending_narratives(agg),
        token_trends: token_trends(agg),
        notable_posts: notable_posts(agg),
        consensus: consensus_analysis(agg),
        top_keywords: agg
            .keyword_frequency
            .iter()
            .take(MAX_TOP_KEYWORDS)
            .cloned()
            .collect(),
        warnings: Vec::new(),
    }
}

/// Top 10 narratives by mention count, each with its first 3 quotes.
fn trending_narratives(agg: &SentimentAggregate) -> Vec<NarrativeTrend> {
    let mut entries: Vec<NarrativeTrend> = agg
        .narrative_stats
        .values()
        .map(|stat| NarrativeTrend {
            narrative: stat.name.clone(),
            mentions: stat.mentions,
            average_sentiment: stat.average_sentiment,
            label: SentimentLabel::from_score(stat.average_sentiment),
            sample_quotes: stat.sample_quotes.iter().take(MAX_TREND_QUOTES).cloned().collect(),
        })
        .collect();
    entries.sort_by(|a, b| b.mentions.cmp(&a.mentions));
    entries.truncate(MAX_NARRATIVES);
    entries
}

/// Top 25 tokens by mention count.
///
/// The label comes from the bullish/bearish count comparison rather than
/// the derived score, so an even split is neutral no matter how loud the
/// two sides were.
fn token_trends(agg: &SentimentAggregate) -> Vec<TokenTrend> {
    let mut entries: Vec<TokenTrend> = agg
        .token_stats
        .values()
        .map(|stat| {
            let label = match stat.bullish.cmp(&stat.bearish) {
                std::cmp::Ordering::Greater => SentimentLabel::Bullish,
                std::cmp::Ordering::Less => SentimentLabel::Bearish,
                std::cmp::Ordering::Equal => SentimentLabel::Neutral,
            };
            let mut top_quotes = stat.sample_quotes.clone();
            top_quotes.sort_by(|a, b| b.engagement.cmp(&a.engagement));
            top_quotes.truncate(MAX_TREND_QUOTES);
            TokenTrend {
                token: stat.token.clone(),
                mentions: stat.mentions,
                bullish: stat.bullish,
                bearish: stat.bearish,
                neutral: stat.neutral,
                sentiment: round3(stat.sentiment()),
                label,
                top_quotes,
            }
        })
        .collect();
    entries.sort_by(|a, b| b.mentions.cmp(&a.mentions));
    entries.truncate(MAX_TOKENS);
    entries
}

/// Notable posts: allow-listed authors union the absolute engagement
/// floor, ranked by likes + 3×retweets.
fn notable_posts(agg: &SentimentAggregate) -> Vec<NotablePost> {
    let mut candidates: Vec<NotablePost> = agg
        .posts
        .iter()
        .filter_map(|post| {
            let via_allow_list = is_kol(&post.author);
            let high_engagement = post.engagement.likes >= NOTABLE_MIN_LIKES
                || post.engagement.retweets >= NOTABLE_MIN_RETWEETS
                || post.engagement.views >= NOTABLE_MIN_VIEWS;
            if !via_allow_list && !high_engagement {
                return None;
            }
            Some(NotablePost {
                author: post.author.clone(),
                text: post.text.clone(),
                sentiment: post.sentiment,
                label: post.label,
                tokens: post.tokens.clone(),
                narratives: post.narratives.clone(),
                engagement: post.engagement,
                via_allow_list,
            })
        })
        .collect();
    candidates.sort_by_key(|p| std::cmp::Reverse(p.engagement.likes + 3 * p.engagement.retweets));
    candidates.truncate(MAX_NOTABLE);
    candidates
}

/// Split posts into consensus and contrarian camps relative to the corpus
/// average.
///
/// Contrarian: strongly opposed to a non-neutral average. Consensus:
/// close to the average and itself non-neutral — posts saying nothing
/// don't count as agreement.
fn consensus_analysis(agg: &SentimentAggregate) -> ConsensusAnalysis {
    let avg = agg.average_sentiment;
    let mut consensus: Vec<&PostAnalysis> = Vec::new();
    let mut contrarian: Vec<&PostAnalysis> = Vec::new();

    for post in &agg.posts {
        let opposes = (avg > 0.1 && post.sentiment < -0.3) || (avg < -0.1 && post.sentiment > 0.3);
        if opposes {
            contrarian.push(post);
        } else if (post.sentiment - avg).abs() < 0.2 && post.sentiment.abs() > 0.1 {
            consensus.push(post);
        }
    }

    let by_engagement =
        |a: &&PostAnalysis, b: &&PostAnalysis| {
            (b.engagement.likes + b.engagement.retweets)
                .cmp(&(a.engagement.likes + a.engagement.retweets))
        };
    consensus.sort_by(by_engagement);
    contrarian.sort_by(by_engagement);

    let quote = |post: &&PostAnalysis| OpinionQuote {
        author: post.author.clone(),
        text: post.text.clone(),
        sentiment: post.sentiment,
    };

    ConsensusAnalysis {
        overall_bias: SentimentLabel::from_score(avg),
        average_sentiment: avg,
        consensus_count: consensus.len(),
        contrarian_count: contrarian.len(),
        top_consensus: consensus.iter().take(MAX_OPINIONS).map(quote).collect(),
        top_contrarian: contrarian.iter().take(MAX_OPINIONS).map(quote).collect(),
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
