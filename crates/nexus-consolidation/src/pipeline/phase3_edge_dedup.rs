//! Phase 3: collapse edges sharing (source, target, relation).

use std::collections::HashMap;

use nexus_core::graph::{flags, Edge, EdgeKey};

#[derive(Debug, Clone, Default)]
pub struct EdgeDedup {
    pub edges: Vec<Edge>,
    pub removed: usize,
}

/// Keep one edge per key. A later edge replaces the current one in place only
/// when its confidence is strictly higher. The loser's snippet is appended to
/// the survivor's and the survivor is flagged `duplicate`.
pub fn dedup_edges(edges: Vec<Edge>) -> EdgeDedup {
    let mut slot_by_key: HashMap<EdgeKey, usize> = HashMap::new();
    let mut out = EdgeDedup::default();

    for edge in edges {
        let key = edge.key();
        let Some(&slot) = slot_by_key.get(&key) else {
            slot_by_key.insert(key, out.edges.len());
            out.edges.push(edge);
            continue;
        };

        out.removed += 1;
        let survivor = &mut out.edges[slot];
        let mut loser = edge;
        if loser.confidence > survivor.confidence {
            std::mem::swap(survivor, &mut loser);
        }
        absorb_snippet(survivor, &loser);
        survivor.add_flag(flags::DUPLICATE);
    }
    out
}

fn absorb_snippet(survivor: &mut Edge, loser: &Edge) {
    let extra = &loser.evidence.snippet;
    if extra.is_empty() || survivor.evidence.snippet.contains(extra.as_str()) {
        return;
    }
    survivor.evidence.snippet = format!(
        "{}\n{}",
        survivor.evidence.snippet.trim(),
        extra.trim()
    );
}
