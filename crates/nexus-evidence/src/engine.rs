//! EvidenceChecker: whitelist, rules, and re-scoring for every edge.

use std::collections::HashMap;

use nexus_core::config::CheckerConfig;
use nexus_core::errors::EvidenceError;
use nexus_core::graph::{Edge, Graph};
use nexus_core::text::normalize;
use tracing::{debug, info};

use crate::healing::apply_verdict;
use crate::rules::{hard_rule, mention, overlap, whitelist};
use crate::stats::CheckStats;
use crate::verdict::Verdict;

/// Rule-based evidence checker.
#[derive(Debug, Clone, Default)]
pub struct EvidenceChecker {
    config: CheckerConfig,
}

impl EvidenceChecker {
    pub fn new(config: CheckerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Check every edge of `graph` in place and record the counters in its
    /// checker summary. Edges are never removed.
    pub fn check(&self, graph: &mut Graph, strict: bool) -> CheckStats {
        let names: HashMap<String, String> = graph
            .names_by_id()
            .into_iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect();
        let name_of = |id: &str| names.get(id).cloned().unwrap_or_else(|| id.to_string());

        let mut stats = CheckStats::default();
        for edge in &mut graph.edges {
            if whitelist::enforce(edge) {
                stats.downgraded += 1;
            }

            let verdict = self.evaluate(edge, &name_of(&edge.source), &name_of(&edge.target));
            if verdict.passed() {
                stats.passed += 1;
            } else {
                stats.failed += 1;
                debug!(edge = %edge.id, reason = %verdict.reason(), "evidence check failed");
            }
            apply_verdict(edge, &verdict, &self.config, strict);
            stats.checked += 1;
        }

        stats.write_to(graph.summary_mut());
        info!(
            checked = stats.checked,
            passed = stats.passed,
            failed = stats.failed,
            downgraded = stats.downgraded,
            "evidence check complete"
        );
        stats
    }

    /// Verdict for one edge given its endpoint names. Pure.
    pub fn evaluate(&self, edge: &Edge, source_name: &str, target_name: &str) -> Verdict {
        if let Err(reason) = hard_rule::check(edge) {
            return Verdict::Fail { score: 0.0, reason };
        }

        let snippet = normalize(&edge.evidence.snippet);
        if snippet.is_empty() {
            return Verdict::Fail {
                score: 0.0,
                reason: EvidenceError::EmptySnippet,
            };
        }

        let mentioned = mention::mentions(&snippet, source_name, &self.config)
            || mention::mentions(&snippet, target_name, &self.config);
        if !mentioned {
            return Verdict::Fail {
                score: self.config.no_mention_score,
                reason: EvidenceError::NoEndpointMention,
            };
        }

        let explanation = normalize(&edge.explanation);
        let hits = overlap::overlap(&snippet, &explanation, &self.config);
        Verdict::Pass {
            score: overlap::score(hits, &self.config),
        }
    }
}
