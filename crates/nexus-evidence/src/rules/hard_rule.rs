//! Hard rule: an edge needs an evidence title, an evidence snippet, and a
//! non-blank explanation.

use nexus_core::errors::EvidenceError;
use nexus_core::graph::Edge;

pub fn check(edge: &Edge) -> Result<(), EvidenceError> {
    let has_evidence = !edge.evidence.title.is_empty() && !edge.evidence.snippet.is_empty();
    if has_evidence && !edge.explanation.trim().is_empty() {
        Ok(())
    } else {
        Err(EvidenceError::MissingEvidence)
    }
}
