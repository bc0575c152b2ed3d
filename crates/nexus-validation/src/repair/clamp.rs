use nexus_core::draft::GraphDraft;
use nexus_core::graph::Confidence;

/// Clamp out-of-range confidences into [0, 1]. NaN is dropped so the
/// hydration default applies.
pub(super) fn clamp_confidences(draft: &mut GraphDraft) -> usize {
    let node_slots = draft.nodes.iter_mut().flatten().map(|n| &mut n.confidence);
    let edge_slots = draft.edges.iter_mut().flatten().map(|e| &mut e.confidence);

    node_slots.chain(edge_slots).map(clamp_slot).sum()
}

fn clamp_slot(slot: &mut Option<f64>) -> usize {
    match *slot {
        Some(c) if c.is_nan() => {
            *slot = None;
            1
        }
        Some(c) if !Confidence::in_range(c) => {
            *slot = Some(c.clamp(0.0, 1.0));
            1
        }
        _ => 0,
    }
}
