//! Deterministic, idempotent draft repair.
//!
//! Repairs only fill what has a safe default: missing top-level structure,
//! metadata, edge flags, evidence text, evidence domain (inferred from the
//! target node), derivable edge ids, and out-of-range confidences. Node and
//! edge identity is never invented. List elements rejected on parse are
//! acknowledged and counted; their well-formed siblings are kept.

mod clamp;
mod edges;
mod shape;

use nexus_core::config::defaults;
use nexus_core::draft::GraphDraft;
use tracing::debug;

use crate::report::RepairOutcome;

/// Values used when repair fills top-level fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairDefaults {
    pub concept: String,
    pub version: String,
}

impl Default for RepairDefaults {
    fn default() -> Self {
        Self {
            concept: defaults::DEFAULT_CONCEPT.to_string(),
            version: defaults::DEFAULT_GRAPH_VERSION.to_string(),
        }
    }
}

/// Repair a draft. `errors` is the report that prompted the repair; repairs
/// are driven by the draft itself, so a stale or empty list is harmless.
pub fn repair(mut draft: GraphDraft, errors: &[String], defaults: &RepairDefaults) -> RepairOutcome {
    let mut fixed = shape::fill(&mut draft, defaults);
    fixed += edges::fill(&mut draft);
    fixed += clamp::clamp_confidences(&mut draft);

    debug!(reported = errors.len(), fixed, "draft repaired");
    RepairOutcome { draft, fixed }
}
