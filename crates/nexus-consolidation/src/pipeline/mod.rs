//! 4-phase normalization pipeline.
//!
//! Phase 1: Node merge → Phase 2: Edge rewrite → Phase 3: Edge de-dup →
//! Phase 4: Conflict flagging

pub mod phase1_node_merge;
pub mod phase2_edge_rewrite;
pub mod phase3_edge_dedup;
pub mod phase4_conflicts;

use nexus_core::config::NormalizerConfig;
use nexus_core::graph::{Edge, Node};
use tracing::info;

use crate::stats::MergeStats;

/// Nodes, edges and counters after normalization.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub stats: MergeStats,
}

/// Run all four phases in order.
pub fn run_pipeline(nodes: Vec<Node>, edges: Vec<Edge>, config: &NormalizerConfig) -> PipelineOutput {
    // Phase 1: Node merge.
    let merge = phase1_node_merge::merge_nodes(nodes, &config.abbreviations);
    info!(
        kept = merge.nodes.len(),
        merged = merge.merged,
        "Phase 1: nodes merged"
    );

    // Phase 2: Edge rewrite.
    let rewrite = phase2_edge_rewrite::rewrite_edges(edges, &merge.id_map);
    info!(
        kept = rewrite.edges.len(),
        dangling = rewrite.dangling.len(),
        "Phase 2: edges rewritten"
    );

    // Phase 3: Edge de-dup.
    let dedup = phase3_edge_dedup::dedup_edges(rewrite.edges);
    info!(
        kept = dedup.edges.len(),
        removed = dedup.removed,
        "Phase 3: duplicate edges removed"
    );

    // Phase 4: Conflict flagging.
    let mut edges = dedup.edges;
    let conflicts_flagged = phase4_conflicts::flag_conflicts(&mut edges, config.conflict_penalty);
    info!(flagged = conflicts_flagged, "Phase 4: conflicts flagged");

    PipelineOutput {
        nodes: merge.nodes,
        edges,
        stats: MergeStats {
            nodes_merged: merge.merged,
            edges_removed: dedup.removed,
            dangling_removed: rewrite.dangling.len(),
            conflicts_flagged,
        },
    }
}
