use nexus_core::graph::CheckerSummary;

/// Counters from one checker run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckStats {
    pub checked: usize,
    pub passed: usize,
    pub failed: usize,
    pub downgraded: usize,
}

impl CheckStats {
    /// Overwrite the checker counters of a summary with this run's values.
    pub fn write_to(&self, summary: &mut CheckerSummary) {
        summary.edges_checked = self.checked;
        summary.edges_failed = self.failed;
        summary.edges_downgraded = self.downgraded;
        summary.passed = self.passed;
        summary.failed = self.failed;
    }
}
