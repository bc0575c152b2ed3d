//! GraphNormalizer: canonicalizes nodes and edges of one graph.

use nexus_core::config::NormalizerConfig;
use nexus_core::graph::Graph;

use crate::pipeline;
use crate::stats::MergeStats;

/// Merges synonymous nodes, drops duplicate and dangling edges, and flags
/// conflicting relations.
#[derive(Debug, Clone, Default)]
pub struct GraphNormalizer {
    config: NormalizerConfig,
}

impl GraphNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize a graph, adding the merge counters to its checker summary.
    pub fn normalize(&self, mut graph: Graph) -> (Graph, MergeStats) {
        let nodes = std::mem::take(&mut graph.nodes);
        let edges = std::mem::take(&mut graph.edges);

        let output = pipeline::run_pipeline(nodes, edges, &self.config);
        graph.nodes = output.nodes;
        graph.edges = output.edges;
        output.stats.apply_to(graph.summary_mut());

        (graph, output.stats)
    }
}
