//! Field-by-field draft checks.
//!
//! Every condition [`repair`](crate::repair) can fix is reported here, so a
//! draft that validates cleanly needs no repair.

mod edges;
mod nodes;
mod shape;

use nexus_core::draft::GraphDraft;
use tracing::debug;

use crate::report::SchemaReport;

/// Validate a draft against the graph schema.
pub fn validate(draft: &GraphDraft) -> SchemaReport {
    let mut errors = Vec::new();

    shape::check(draft, &mut errors);
    if let Some(nodes) = &draft.nodes {
        nodes::check(nodes, &mut errors);
    }
    if let Some(edges) = &draft.edges {
        edges::check(edges, draft.nodes.as_deref(), &mut errors);
    }

    debug!(error_count = errors.len(), "draft validated");
    SchemaReport { errors }
}

pub(crate) fn required(path: &str) -> String {
    format!("{path}: field required")
}

pub(crate) fn out_of_range(path: &str) -> String {
    format!("{path}: must be within [0, 1]")
}
