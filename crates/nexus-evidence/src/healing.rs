//! Apply a verdict to an edge: checked state, reason, and confidence.

use nexus_core::config::CheckerConfig;
use nexus_core::graph::Edge;

use crate::verdict::Verdict;

/// Passing edges move halfway toward the verdict score. Failing edges are
/// scaled by the fail multiplier.
pub fn apply_verdict(edge: &mut Edge, verdict: &Verdict, config: &CheckerConfig, strict: bool) {
    edge.check_reason = Some(verdict.reason());
    if verdict.passed() {
        edge.checked = true;
        edge.confidence = edge.confidence.blend(verdict.score());
        return;
    }

    edge.checked = false;
    edge.confidence = edge.confidence * config.fail_multiplier;
    if strict && edge.explanation.is_empty() {
        edge.explanation = config.fallback_explanation.clone();
    }
}
