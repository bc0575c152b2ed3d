//! StableGraph over node ids with an id → index map.

use std::collections::HashMap;

use nexus_core::graph::Edge;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;

/// Directed graph whose node weights are vertex ids and whose edge weights
/// are the stored relationships.
#[derive(Debug, Default)]
pub struct IndexedGraph {
    pub graph: StableGraph<String, Edge, Directed>,
    index: HashMap<String, NodeIndex>,
}

impl IndexedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of relationships. Endpoints become nodes.
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    pub fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.index.insert(id.to_string(), idx);
        idx
    }

    pub fn add_edge(&mut self, edge: Edge) {
        let source = self.ensure_node(&edge.source);
        let target = self.ensure_node(&edge.target);
        self.graph.add_edge(source, target, edge);
    }

    pub fn get_node(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
