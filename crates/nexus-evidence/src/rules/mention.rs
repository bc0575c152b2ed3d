//! Endpoint mention rule.

use nexus_core::config::CheckerConfig;
use nexus_core::text::{char_len, normalize, tokens};

/// Whether the normalized snippet mentions an endpoint name.
///
/// Up to `mention_token_limit` name tokens of at least
/// `mention_token_min_chars` characters are tried as substrings. A name with
/// no such token must appear whole. An empty name never matches.
pub fn mentions(normalized_snippet: &str, name: &str, config: &CheckerConfig) -> bool {
    let name = normalize(name);
    if name.is_empty() {
        return false;
    }

    let parts: Vec<&str> = tokens(&name)
        .filter(|t| char_len(t) >= config.mention_token_min_chars)
        .take(config.mention_token_limit)
        .collect();

    if parts.is_empty() {
        return normalized_snippet.contains(name.as_str());
    }
    parts.iter().any(|part| normalized_snippet.contains(part))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_token_matches_inside_snippet() {
        let config = CheckerConfig::default();
        assert!(mentions("heat flows in thermodynamics", "Thermodynamics", &config));
        assert!(mentions("the information content", "Information Theory", &config));
    }

    #[test]
    fn short_name_must_appear_whole() {
        let config = CheckerConfig::default();
        assert!(mentions("we train an nn model", "NN", &config));
        assert!(!mentions("nothing relevant", "NN", &config));
    }

    #[test]
    fn empty_name_never_matches() {
        let config = CheckerConfig::default();
        assert!(!mentions("anything at all", "", &config));
        assert!(!mentions("anything at all", "(only parens)", &config));
    }

    #[test]
    fn only_first_tokens_are_tried() {
        let config = CheckerConfig {
            mention_token_limit: 1,
            ..CheckerConfig::default()
        };
        assert!(!mentions("about theory only", "Information Theory", &config));
        assert!(mentions("about information only", "Information Theory", &config));
    }
}
