//! Lexicon scoring for a single post.

use crate::lexicon::{BEARISH_WORDS, BULLISH_WORDS, FUD_INDICATORS, HYPE_INDICATORS};

/// Score one post's sentiment in `[-1.0, 1.0]`.
///
/// Lowercases the text, then counts one signal per lexicon entry that
/// appears as a substring: bullish +1, bearish −1, FUD −0.5, hype +0.3.
/// The score is the contribution sum divided by the signal count, clamped
/// to `[-1.0, 1.0]`. Zero signals means exactly `0.0` — neutral, not
/// merely near-zero.
#[must_use]
pub fn score_sentiment(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let mut sum = 0.0_f64;
    let mut signals = 0u32;

    for word in BULLISH_WORDS {
        if lower.contains(word) {
            sum += 1.0;
            signals += 1;
        }
    }
    for word in BEARISH_WORDS {
        if lower.contains(word) {
            sum -= 1.0;
            signals += 1;
        }
    }
    for word in FUD_INDICATORS {
        if lower.contains(word) {
            sum -= 0.5;
            signals += 1;
        }
    }
    for word in HYPE_INDICATORS {
        if lower.contains(word) {
            sum += 0.3;
            signals += 1;
        }
    }

    if signals == 0 {
        return 0.0;
    }
    (sum / f64::from(signals)).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_lexicon_hits_is_exactly_zero() {
        assert_eq!(score_sentiment("interesting chart pattern today"), 0.0);
        assert_eq!(score_sentiment(""), 0.0);
    }

    #[test]
    fn bullish_text_scores_positive() {
        let score = score_sentiment("bullish breakout, accumulate the dip");
        assert!(score > 0.1, "expected bullish score, got {score}");
    }

    #[test]
    fn bearish_text_scores_negative() {
        let score = score_sentiment("dump incoming, total capitulation and panic");
        assert!(score < -0.1, "expected bearish score, got {score}");
    }

    #[test]
    fn fud_weighs_half() {
        // Two FUD signals ("sec", "lawsuit"): -1.0 over 2 signals.
        assert_eq!(score_sentiment("another sec lawsuit"), -0.5);
    }

    #[test]
    fn hype_weighs_point_three() {
        // Single hype hit: 0.3 / 1.
        let score = score_sentiment("airdrop soon");
        assert!((score - 0.3).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn score_is_always_in_range() {
        let samples = [
            "bullish moon pump breakout rally strong conviction wagmi",
            "dump crash sell rekt panic fear bleeding capitulation scam",
            "mixed bullish but bearish, pump then dump",
            "sec ban lawsuit crackdown enforcement fud",
            "lfg gm ser 100x free money",
        ];
        for text in samples {
            let score = score_sentiment(text);
            assert!((-1.0..=1.0).contains(&score), "{text} scored {score}");
        }
    }

    #[test]
    fn opposing_signals_average_out() {
        // bullish(+1) + dump(-1) = 0 over 2 signals.
        assert_eq!(score_sentiment("bullish until the dump"), 0.0);
    }
}
