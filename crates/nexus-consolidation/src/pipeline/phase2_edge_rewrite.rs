//! Phase 2: repoint edges at surviving nodes and drop dangling ones.

use std::collections::HashMap;

use nexus_core::graph::Edge;
use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct EdgeRewrite {
    pub edges: Vec<Edge>,
    /// Ids of edges dropped because an endpoint names no node.
    pub dangling: Vec<String>,
}

pub fn rewrite_edges(edges: Vec<Edge>, id_map: &HashMap<String, String>) -> EdgeRewrite {
    let mut out = EdgeRewrite::default();

    for mut edge in edges {
        match (id_map.get(&edge.source), id_map.get(&edge.target)) {
            (Some(source), Some(target)) => {
                edge.source = source.clone();
                edge.target = target.clone();
                out.edges.push(edge);
            }
            _ => {
                warn!(
                    edge = %edge.id,
                    source = %edge.source,
                    target = %edge.target,
                    "dropping edge with unknown endpoint"
                );
                out.dangling.push(edge.id);
            }
        }
    }
    out
}
