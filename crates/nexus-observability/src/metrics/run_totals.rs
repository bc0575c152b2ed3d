use nexus_core::graph::CheckerSummary;
use serde::{Deserialize, Serialize};

/// Cumulative counters over every recorded run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTotals {
    pub runs: u64,
    pub succeeded: u64,
    pub failed: u64,
    /// Per-counter sums of every recorded checker summary.
    pub summary: CheckerSummary,
}

impl RunTotals {
    pub fn record(&mut self, summary: &CheckerSummary, succeeded: bool) {
        self.runs += 1;
        if succeeded {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.summary.absorb(summary);
    }

    /// Share of checked edges that failed the evidence check.
    pub fn edge_failure_rate(&self) -> f64 {
        if self.summary.edges_checked == 0 {
            return 0.0;
        }
        self.summary.edges_failed as f64 / self.summary.edges_checked as f64
    }
}
