use serde::{Deserialize, Serialize};

use super::defaults;

/// Evidence checker configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Default strictness when a request does not say.
    pub strict: bool,
    /// Endpoint-name tokens shorter than this do not count as mentions.
    pub mention_token_min_chars: usize,
    /// At most this many endpoint-name tokens are tried.
    pub mention_token_limit: usize,
    /// Snippet tokens shorter than this are not significant.
    pub significant_token_min_chars: usize,
    /// At most this many significant tokens are scored.
    pub significant_token_limit: usize,
    pub base_score: f64,
    pub overlap_weight: f64,
    /// Confidence multiplier for a failed edge.
    pub fail_multiplier: f64,
    /// Verdict score reported when neither endpoint is mentioned.
    pub no_mention_score: f64,
    /// Explanation injected in strict mode when the edge has none.
    pub fallback_explanation: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            strict: defaults::DEFAULT_STRICT_CHECK,
            mention_token_min_chars: defaults::DEFAULT_MENTION_TOKEN_MIN_CHARS,
            mention_token_limit: defaults::DEFAULT_MENTION_TOKEN_LIMIT,
            significant_token_min_chars: defaults::DEFAULT_SIGNIFICANT_TOKEN_MIN_CHARS,
            significant_token_limit: defaults::DEFAULT_SIGNIFICANT_TOKEN_LIMIT,
            base_score: defaults::DEFAULT_BASE_SCORE,
            overlap_weight: defaults::DEFAULT_OVERLAP_WEIGHT,
            fail_multiplier: defaults::DEFAULT_FAIL_MULTIPLIER,
            no_mention_score: defaults::DEFAULT_NO_MENTION_SCORE,
            fallback_explanation: defaults::DEFAULT_FALLBACK_EXPLANATION.to_string(),
        }
    }
}
