use crate::errors::NexusResult;
use crate::graph::{Graph, Node};
use crate::models::{Subgraph, UpsertReport};

/// Persistent, versioned graph store.
pub trait IGraphStore: Send + Sync {
    /// Idempotently write a graph's nodes and edges.
    ///
    /// Nodes are merged by id. Edges are merged by
    /// (source, target, relation, version, concept). Edges whose endpoints do
    /// not exist are skipped and reported, not written.
    fn upsert(&self, graph: &Graph) -> NexusResult<UpsertReport>;

    /// Look up a node by id.
    fn get_node(&self, id: &str) -> NexusResult<Option<Node>>;

    /// Nodes and edges reachable from the root of `concept` within `depth`
    /// hops, restricted to `version`. Depth is clamped to the store maximum.
    /// An absent root yields an empty subgraph.
    ///
    /// Traversal follows only relationships written under the same
    /// (concept, version) slice. Vertices are shared across concepts, but a
    /// relationship stored by another concept is not followed even when it
    /// touches a vertex reached here.
    fn query_subgraph(&self, concept: &str, depth: usize, version: &str)
        -> NexusResult<Subgraph>;
}
