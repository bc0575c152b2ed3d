//! Phase 1: merge nodes sharing a canonical (domain, name) key.

use std::collections::{BTreeMap, HashMap};

use nexus_core::graph::Node;
use nexus_core::text;
use tracing::debug;

/// Surviving nodes plus the id remap for edges.
#[derive(Debug, Clone, Default)]
pub struct NodeMerge {
    /// Survivors in first-seen order.
    pub nodes: Vec<Node>,
    /// Every input node id mapped to its survivor's id.
    pub id_map: HashMap<String, String>,
    pub merged: usize,
}

/// Canonical identity of a node: lowercase domain and normalized name.
pub fn node_key(node: &Node, abbreviations: &BTreeMap<String, String>) -> String {
    format!(
        "{}::{}",
        node.domain.to_lowercase(),
        text::canonical_name(&node.name, abbreviations)
    )
}

/// The first node seen for a key survives. Later nodes are dropped and their
/// ids remapped to the survivor. A repeated id keeps its first mapping, so the
/// later node is dropped whatever its key.
pub fn merge_nodes(nodes: Vec<Node>, abbreviations: &BTreeMap<String, String>) -> NodeMerge {
    let mut survivor_by_key: HashMap<String, usize> = HashMap::new();
    let mut out = NodeMerge::default();

    for node in nodes {
        if let Some(survivor_id) = out.id_map.get(&node.id) {
            debug!(id = %node.id, into = %survivor_id, "repeated node id dropped");
            out.merged += 1;
            continue;
        }
        let key = node_key(&node, abbreviations);
        match survivor_by_key.get(&key) {
            Some(&idx) => {
                let survivor_id = out.nodes[idx].id.clone();
                debug!(merged = %node.id, into = %survivor_id, key = %key, "node merged");
                out.id_map.insert(node.id, survivor_id);
                out.merged += 1;
            }
            None => {
                survivor_by_key.insert(key, out.nodes.len());
                out.id_map.insert(node.id.clone(), node.id.clone());
                out.nodes.push(node);
            }
        }
    }
    out
}
