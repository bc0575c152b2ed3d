use nexus_core::draft::{GraphDraft, MetaDraft};
use nexus_core::graph::CheckerSummary;

use super::RepairDefaults;

fn fill_missing<T>(slot: &mut Option<T>, value: impl FnOnce() -> T) -> usize {
    if slot.is_some() {
        return 0;
    }
    *slot = Some(value());
    1
}

/// Fill top-level fields and metadata. Each filled field counts once.
pub(super) fn fill(draft: &mut GraphDraft, defaults: &RepairDefaults) -> usize {
    let mut fixed = 0;
    fixed += fill_missing(&mut draft.concept, || defaults.concept.clone());
    fixed += fill_missing(&mut draft.nodes, Vec::new);
    fixed += fill_missing(&mut draft.edges, Vec::new);
    fixed += fill_missing(&mut draft.meta, MetaDraft::default);
    // Non-object elements were already dropped on parse; acknowledging them
    // keeps the valid siblings and counts one fix each.
    fixed += std::mem::take(&mut draft.rejected_elements).len();

    if let Some(meta) = draft.meta.as_mut() {
        fixed += fill_missing(&mut meta.generated_at, String::new);
        fixed += fill_missing(&mut meta.version, || defaults.version.clone());
        fixed += fill_missing(&mut meta.checker_summary, CheckerSummary::default);
    }
    fixed
}
