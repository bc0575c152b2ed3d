use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Per-run counters accumulated by the pipeline stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct CheckerSummary {
    /// Repairs applied by the schema repairer.
    pub schema_fixed: usize,
    /// Nodes absorbed into an existing canonical node.
    pub dedup_nodes_merged: usize,
    /// Duplicate edges dropped.
    pub dedup_edges_removed: usize,
    /// Edges dropped because an endpoint was missing.
    pub dangling_edges_removed: usize,
    /// Newly flagged conflicting edges.
    pub conflicts_flagged: usize,
    pub edges_checked: usize,
    pub edges_failed: usize,
    pub edges_downgraded: usize,
    /// Edges whose verdict passed.
    pub passed: usize,
    /// Edges whose verdict failed.
    pub failed: usize,
}

impl CheckerSummary {
    /// Add every counter of `other` into `self`.
    pub fn absorb(&mut self, other: &CheckerSummary) {
        self.schema_fixed += other.schema_fixed;
        self.dedup_nodes_merged += other.dedup_nodes_merged;
        self.dedup_edges_removed += other.dedup_edges_removed;
        self.dangling_edges_removed += other.dangling_edges_removed;
        self.conflicts_flagged += other.conflicts_flagged;
        self.edges_checked += other.edges_checked;
        self.edges_failed += other.edges_failed;
        self.edges_downgraded += other.edges_downgraded;
        self.passed += other.passed;
        self.failed += other.failed;
    }
}

impl fmt::Display for CheckerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "schema_fixed={} dedup_nodes_merged={} dedup_edges_removed={} \
             dangling_edges_removed={} conflicts_flagged={} edges_checked={} \
             edges_failed={} edges_downgraded={}",
            self.schema_fixed,
            self.dedup_nodes_merged,
            self.dedup_edges_removed,
            self.dangling_edges_removed,
            self.conflicts_flagged,
            self.edges_checked,
            self.edges_failed,
            self.edges_downgraded,
        )
    }
}
