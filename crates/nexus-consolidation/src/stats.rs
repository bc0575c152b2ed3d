use nexus_core::graph::CheckerSummary;

/// Counters produced by one normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub nodes_merged: usize,
    pub edges_removed: usize,
    pub dangling_removed: usize,
    pub conflicts_flagged: usize,
}

impl MergeStats {
    /// Add these counters into a graph's checker summary.
    pub fn apply_to(&self, summary: &mut CheckerSummary) {
        summary.dedup_nodes_merged += self.nodes_merged;
        summary.dedup_edges_removed += self.edges_removed;
        summary.dangling_edges_removed += self.dangling_removed;
        summary.conflicts_flagged += self.conflicts_flagged;
    }
}
