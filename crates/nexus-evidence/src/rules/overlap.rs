//! Keyword overlap between snippet and explanation.

use std::collections::HashSet;

use nexus_core::config::CheckerConfig;
use nexus_core::text::{char_len, tokens};

/// Distinct significant snippet tokens, in first-seen order.
pub fn significant_tokens<'a>(normalized_snippet: &'a str, config: &CheckerConfig) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    tokens(normalized_snippet)
        .filter(|t| char_len(t) >= config.significant_token_min_chars)
        .filter(|t| seen.insert(*t))
        .take(config.significant_token_limit)
        .collect()
}

/// Number of significant snippet tokens found (as substrings) in the
/// normalized explanation.
pub fn overlap(normalized_snippet: &str, normalized_explanation: &str, config: &CheckerConfig) -> usize {
    significant_tokens(normalized_snippet, config)
        .into_iter()
        .filter(|t| normalized_explanation.contains(t))
        .count()
}

/// `base_score + overlap_weight * overlap`, clamped to [0, 1].
pub fn score(overlap: usize, config: &CheckerConfig) -> f64 {
    (config.base_score + config.overlap_weight * overlap as f64).clamp(0.0, 1.0)
}
