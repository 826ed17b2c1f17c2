//! Batch aggregation over scraped posts.

use std::collections::{BTreeMap, HashMap};

use regex::Regex;

use ctscan_core::{Post, SentimentLabel};

use crate::lexicon::STOP_WORDS;
use crate::narratives::identify_narratives;
use crate::score::score_sentiment;
use crate::tokens::extract_tokens;
use crate::types::{
    KeywordCount, NarrativeStat, PostAnalysis, SampleQuote, SentimentAggregate, TokenStat,
};

const MAX_SAMPLE_QUOTES: usize = 5;
const MAX_KEYWORDS: usize = 50;
const ANALYSIS_TEXT_CHARS: usize = 300;
const QUOTE_TEXT_CHARS: usize = 200;

/// Analyze a batch of posts into a [`SentimentAggregate`].
///
/// One pass over the input: each post is scored, token-tagged, and
/// narrative-tagged, and the per-token / per-narrative / keyword
/// aggregates are updated as we go. Sample quotes are capped at 5 per
/// token and narrative, kept in first-seen order — ranking by engagement
/// is the trend stage's job, not ours.
#[must_use]
pub fn analyze(posts: &[Post]) -> SentimentAggregate {
    let mut token_stats: BTreeMap<String, TokenStat> = BTreeMap::new();
    let mut narrative_stats: BTreeMap<String, NarrativeStat> = BTreeMap::new();
    let mut narrative_sums: HashMap<String, f64> = HashMap::new();
    let mut keyword_counts: HashMap<String, u64> = HashMap::new();
    let mut analyses: Vec<PostAnalysis> = Vec::with_capacity(posts.len());
    let mut sentiment_sum = 0.0_f64;

    let word_re = Regex::new(r"\b[a-z]{4,}\b").expect("valid keyword regex");

    for post in posts {
        let sentiment = score_sentiment(&post.text);
        let tokens = extract_tokens(&post.text);
        let narratives = identify_narratives(&post.text);
        sentiment_sum += sentiment;

        for token in &tokens {
            let stat = token_stats
                .entry(token.clone())
                .or_insert_with(|| TokenStat {
                    token: token.clone(),
                    mentions: 0,
                    bullish: 0,
                    bearish: 0,
                    neutral: 0,
                    sample_quotes: Vec::new(),
                });
            stat.mentions += 1;
            match SentimentLabel::from_score(sentiment) {
                SentimentLabel::Bullish => stat.bullish += 1,
                SentimentLabel::Bearish => stat.bearish += 1,
                SentimentLabel::Neutral => stat.neutral += 1,
            }
            if stat.sample_quotes.len() < MAX_SAMPLE_QUOTES {
                stat.sample_quotes.push(quote_from(post, sentiment));
            }
        }

        for narrative in &narratives {
            let stat = narrative_stats
                .entry((*narrative).to_owned())
                .or_insert_with(|| NarrativeStat {
                    name: (*narrative).to_owned(),
                    mentions: 0,
                    average_sentiment: 0.0,
                    sample_quotes: Vec::new(),
                });
            stat.mentions += 1;
            *narrative_sums.entry((*narrative).to_owned()).or_default() += sentiment;
            if stat.sample_quotes.len() < MAX_SAMPLE_QUOTES {
                stat.sample_quotes.push(quote_from(post, sentiment));
            }
        }

        for m in word_re.find_iter(&post.text.to_lowercase()) {
            let word = m.as_str();
            if !STOP_WORDS.contains(&word) {
                *keyword_counts.entry(word.to_owned()).or_default() += 1;
            }
        }

        analyses.push(PostAnalysis {
            author: post.author.clone(),
            text: truncate_chars(&post.text, ANALYSIS_TEXT_CHARS),
            sentiment,
            label: SentimentLabel::from_score(sentiment),
            tokens,
            narratives: narratives.iter().map(|&n| n.to_owned()).collect(),
            engagement: post.engagement(),
        });
    }

    for (name, stat) in &mut narrative_stats {
        #[allow(clippy::cast_precision_loss)]
        let average = narrative_sums.get(name).copied().unwrap_or_default() / stat.mentions as f64;
        stat.average_sentiment = round3(average);
    }

    let average_sentiment = if posts.is_empty() {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let avg = sentiment_sum / posts.len() as f64;
        round3(avg)
    };

    SentimentAggregate {
        total_posts: posts.len(),
        average_sentiment,
        overall_label: SentimentLabel::from_score(average_sentiment),
        token_stats,
        narrative_stats,
        keyword_frequency: top_keywords(keyword_counts),
        posts: analyses,
    }
}

fn quote_from(post: &Post, sentiment: f64) -> SampleQuote {
    SampleQuote {
        author: post.author.clone(),
        text: truncate_chars(&post.text, QUOTE_TEXT_CHARS),
        sentiment,
        engagement: post.likes + post.retweets,
    }
}

/// Top 50 by count descending; ties broken alphabetically so output is
/// stable run to run.
fn top_keywords(counts: HashMap<String, u64>) -> Vec<KeywordCount> {
    let mut entries: Vec<(String, u64)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, count)| KeywordCount { word, count })
        .collect()
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
