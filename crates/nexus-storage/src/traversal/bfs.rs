//! Hop-bounded breadth-first traversal along outgoing relationships.

use std::collections::{HashSet, VecDeque};

use nexus_core::graph::Edge;
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use super::IndexedGraph;

/// Vertex ids and relationships reached from an origin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reach {
    /// Origin first, then discovery order.
    pub vertex_ids: Vec<String>,
    pub edges: Vec<Edge>,
}

/// Follow outgoing relationships from `origin` for at most `max_hops` hops.
///
/// Every relationship leaving a vertex at distance `< max_hops` is included,
/// including ones pointing back at already visited vertices. Relationships
/// leave each vertex in (target, relation) order.
pub fn reachable(graph: &IndexedGraph, origin: &str, max_hops: usize) -> Reach {
    let mut reach = Reach {
        vertex_ids: vec![origin.to_string()],
        edges: Vec::new(),
    };
    let Some(start) = graph.get_node(origin) else {
        return reach;
    };

    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([(start, 0usize)]);

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_hops {
            continue;
        }

        let mut outgoing: Vec<_> = graph
            .graph
            .edges_directed(current, Direction::Outgoing)
            .collect();
        outgoing.sort_by(|a, b| {
            (&a.weight().target, a.weight().relation.as_str())
                .cmp(&(&b.weight().target, b.weight().relation.as_str()))
        });

        for edge_ref in outgoing {
            reach.edges.push(edge_ref.weight().clone());
            let next = edge_ref.target();
            if visited.insert(next) {
                if let Some(id) = graph.graph.node_weight(next) {
                    reach.vertex_ids.push(id.clone());
                }
                queue.push_back((next, depth + 1));
            }
        }
    }

    reach
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_core::graph::{Evidence, RelationKind};

    fn edge(source: &str, target: &str) -> Edge {
        Edge::new(source, target, RelationKind::RelatedTo, "", Evidence::default())
    }

    fn chain() -> IndexedGraph {
        IndexedGraph::from_edges(vec![edge("a", "b"), edge("b", "c"), edge("c", "d"), edge("d", "e")])
    }

    #[test]
    fn zero_hops_returns_origin_only() {
        let reach = reachable(&chain(), "a", 0);
        assert_eq!(reach.vertex_ids, vec!["a"]);
        assert!(reach.edges.is_empty());
    }

    #[test]
    fn hops_bound_the_chain() {
        let reach = reachable(&chain(), "a", 2);
        assert_eq!(reach.vertex_ids, vec!["a", "b", "c"]);
        assert_eq!(reach.edges.len(), 2);
    }

    #[test]
    fn cycles_terminate() {
        let graph = IndexedGraph::from_edges(vec![edge("a", "b"), edge("b", "a")]);
        let reach = reachable(&graph, "a", 3);
        assert_eq!(reach.vertex_ids, vec!["a", "b"]);
        assert_eq!(reach.edges.len(), 2);
    }

    #[test]
    fn incoming_edges_are_not_followed() {
        let graph = IndexedGraph::from_edges(vec![edge("x", "a"), edge("a", "b")]);
        let reach = reachable(&graph, "a", 3);
        assert_eq!(reach.vertex_ids, vec!["a", "b"]);
    }

    #[test]
    fn unknown_origin_is_returned_alone() {
        let reach = reachable(&chain(), "zz", 3);
        assert_eq!(reach.vertex_ids, vec!["zz"]);
        assert!(reach.edges.is_empty());
    }
}
