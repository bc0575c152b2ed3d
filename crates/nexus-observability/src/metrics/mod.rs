//! Run metrics.
//!
//! [`MetricsCollector`] accumulates checker summaries across generation runs
//! for an external sink. It is shared between jobs, so totals live behind a
//! mutex.

pub mod run_totals;

use std::sync::Mutex;

use nexus_core::graph::CheckerSummary;

pub use run_totals::RunTotals;

#[derive(Debug, Default)]
pub struct MetricsCollector {
    totals: Mutex<RunTotals>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&self, summary: &CheckerSummary) {
        self.update(|totals| totals.record(summary, true));
    }

    /// Failed runs still contribute whatever counters they reached.
    pub fn record_failure(&self, summary: &CheckerSummary) {
        self.update(|totals| totals.record(summary, false));
    }

    /// Copy of the current totals.
    pub fn snapshot(&self) -> RunTotals {
        match self.totals.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Current totals as JSON for an external sink.
    pub fn snapshot_json(&self) -> serde_json::Value {
        serde_json::to_value(self.snapshot()).unwrap_or(serde_json::Value::Null)
    }

    /// Reset all totals (useful for testing or periodic rotation).
    pub fn reset(&self) {
        self.update(|totals| *totals = RunTotals::default());
    }

    fn update(&self, f: impl FnOnce(&mut RunTotals)) {
        // A panicked recorder leaves plain counters behind; keep counting.
        let mut guard = match self.totals.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard);
    }
}
