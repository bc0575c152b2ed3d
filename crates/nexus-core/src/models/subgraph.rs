use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::graph::{Edge, Graph, GraphMeta, Node};

/// Result of a bounded traversal from a concept's root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subgraph {
    pub concept: String,
    pub version: String,
    /// Depth actually used after clamping.
    pub depth: usize,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Subgraph {
    pub fn empty(concept: impl Into<String>, version: impl Into<String>, depth: usize) -> Self {
        Self {
            concept: concept.into(),
            version: version.into(),
            depth,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Wrap the traversal result as a graph with fresh metadata.
    pub fn into_graph(self) -> Graph {
        Graph {
            meta: GraphMeta::new(self.version),
            concept: self.concept,
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}
