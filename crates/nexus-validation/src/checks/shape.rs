use nexus_core::draft::GraphDraft;

use super::required;

/// Top-level fields and graph metadata.
pub(super) fn check(draft: &GraphDraft, errors: &mut Vec<String>) {
    if draft.concept.is_none() {
        errors.push(required("concept"));
    }
    if draft.nodes.is_none() {
        errors.push(required("nodes"));
    }
    if draft.edges.is_none() {
        errors.push(required("edges"));
    }
    for path in &draft.rejected_elements {
        errors.push(format!("{path}: invalid element"));
    }

    let Some(meta) = &draft.meta else {
        errors.push(required("meta"));
        return;
    };
    if meta.generated_at.is_none() {
        errors.push(required("meta.generated_at"));
    }
    if meta.version.is_none() {
        errors.push(required("meta.version"));
    }
    if meta.checker_summary.is_none() {
        errors.push(required("meta.checker_summary"));
    }
}
