use std::collections::{BTreeSet, HashMap};

use nexus_core::draft::{EvidenceDraft, GraphDraft};
use nexus_core::ids;

/// Fill per-edge fields: flags, evidence text, evidence domain, and id.
pub(super) fn fill(draft: &mut GraphDraft) -> usize {
    // Later nodes win when ids repeat.
    let node_domains: HashMap<String, String> = draft
        .nodes
        .iter()
        .flatten()
        .filter_map(|n| Some((n.id.clone()?, n.domain.clone()?)))
        .collect();

    let mut fixed = 0;
    for edge in draft.edges.iter_mut().flatten() {
        if edge.flags.is_none() {
            edge.flags = Some(BTreeSet::new());
            fixed += 1;
        }

        let evidence = edge.evidence.get_or_insert_with(EvidenceDraft::default);
        if evidence.title.is_none() {
            evidence.title = Some(String::new());
            fixed += 1;
        }
        if evidence.snippet.is_none() {
            evidence.snippet = Some(String::new());
            fixed += 1;
        }
        if evidence.domain.is_none() {
            // Counted even when the target has no known domain.
            let inferred = edge
                .target
                .as_ref()
                .and_then(|t| node_domains.get(t))
                .cloned();
            evidence.domain = Some(inferred);
            fixed += 1;
        }

        if edge.id.is_none() {
            if let (Some(source), Some(target), Some(relation)) =
                (&edge.source, &edge.target, &edge.relation)
            {
                edge.id = Some(ids::edge_id(source, relation.as_str(), target));
                fixed += 1;
            }
        }
    }
    fixed
}
