//! Text normalization shared by the normalizer and the evidence checker.
//!
//! Both stages must agree on what "the same name" means, so there is exactly
//! one normalization routine.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static PARENTHETICAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(.*?\)").unwrap());

// ASCII lowercase letters, digits, and CJK Unified Ideographs survive.
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\x{4E00}-\x{9FFF}]+").unwrap());

/// Normalize free text: trim, lowercase, drop parenthesized fragments, turn
/// every other run of characters into a single space, then trim again.
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let without_parens = PARENTHETICAL_RE.replace_all(&lowered, "");
    let spaced = SEPARATOR_RE.replace_all(&without_parens, " ");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a node name and expand it if the whole result is a known abbreviation.
pub fn canonical_name(name: &str, abbreviations: &BTreeMap<String, String>) -> String {
    let normalized = normalize(name);
    match abbreviations.get(&normalized) {
        Some(expanded) => expanded.clone(),
        None => normalized,
    }
}

/// Space-separated tokens of already normalized text.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(' ').filter(|t| !t.is_empty())
}

/// Length in characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_parentheses_and_punctuation() {
        assert_eq!(normalize("  Neural Network (NN)!  "), "neural network");
        assert_eq!(normalize("Kullback–Leibler divergence"), "kullback leibler divergence");
        assert_eq!(normalize("a--b__c"), "a b c");
    }

    #[test]
    fn keeps_cjk_ideographs() {
        assert_eq!(normalize("熵 (entropy)"), "熵");
        assert_eq!(normalize("信息论-基础"), "信息论 基础");
    }

    #[test]
    fn empty_and_symbol_only_inputs_normalize_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("(only parens)"), "");
        assert_eq!(normalize("!!! ???"), "");
    }

    #[test]
    fn abbreviation_expands_whole_string_only() {
        let abbreviations: BTreeMap<String, String> =
            [("nn".to_string(), "neural network".to_string())].into();
        assert_eq!(canonical_name("NN", &abbreviations), "neural network");
        assert_eq!(canonical_name("NN layers", &abbreviations), "nn layers");
    }
}
