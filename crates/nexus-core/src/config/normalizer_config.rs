use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Graph normalizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Multiplier applied to every edge of a conflicting pair.
    pub conflict_penalty: f64,
    /// Whole-string abbreviation expansions applied after text normalization.
    pub abbreviations: BTreeMap<String, String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            conflict_penalty: defaults::DEFAULT_CONFLICT_PENALTY,
            abbreviations: defaults::DEFAULT_ABBREVIATIONS
                .iter()
                .map(|(short, long)| (short.to_string(), long.to_string()))
                .collect(),
        }
    }
}
