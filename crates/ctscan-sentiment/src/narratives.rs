//! Narrative bucket classification.

use crate::lexicon::NARRATIVE_KEYWORDS;

/// Classify a post into zero or more narrative buckets.
///
/// A post belongs to every bucket for which at least one keyword phrase
/// appears as a substring of the lowercased text. Buckets come back in
/// table order, which is stable across runs.
#[must_use]
pub fn identify_narratives(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    NARRATIVE_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(name, _)| *name)
        .collect()
}
