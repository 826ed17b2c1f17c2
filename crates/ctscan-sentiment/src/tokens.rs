//! Asset token extraction.

use std::collections::BTreeSet;

use regex::Regex;

use crate::lexicon::KNOWN_SYMBOLS;

/// Extract the set of asset tokens mentioned in a post.
///
/// Matches cashtags (`$` followed by 2–10 letters) and whitelisted symbols
/// as whole words, case-insensitive. Results are upper-cased and
/// deduplicated; the `BTreeSet` keeps iteration deterministic.
#[must_use]
pub fn extract_tokens(text: &str) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();

    let cashtag = Regex::new(r"\$([A-Za-z]{2,10})\b").expect("valid cashtag regex");
    for cap in cashtag.captures_iter(text) {
        tokens.insert(cap[1].to_uppercase());
    }

    for word in text.split(|c: char| !c.is_ascii_alphanumeric()) {
        if word.len() < 2 {
            continue;
        }
        let upper = word.to_uppercase();
        if KNOWN_SYMBOLS.contains(&upper.as_str()) {
            tokens.insert(upper);
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn cashtags_are_upper_cased_and_deduplicated() {
        assert_eq!(
            extract_tokens("$BTC mooning, $ETH too"),
            set(&["BTC", "ETH"])
        );
        assert_eq!(extract_tokens("$btc and $BTC and $Btc"), set(&["BTC"]));
    }

    #[test]
    fn whitelisted_symbols_match_as_whole_words() {
        assert_eq!(extract_tokens("sol and btc are moving"), set(&["BTC", "SOL"]));
    }

    #[test]
    fn whitelist_does_not_match_inside_words() {
        // "solid" must not match SOL, "beth" must not match ETH.
        assert_eq!(extract_tokens("solid analysis from beth"), BTreeSet::new());
    }

    #[test]
    fn single_letter_cashtag_is_ignored() {
        assert_eq!(extract_tokens("$a is not a token"), BTreeSet::new());
    }

    #[test]
    fn unknown_cashtags_still_count() {
        assert_eq!(extract_tokens("aping into $OBSCURE"), set(&["OBSCURE"]));
    }
}
