use nexus_core::errors::NexusError;
use nexus_core::graph::{CheckerSummary, Graph};
use nexus_core::models::UpsertReport;

/// A successful generation run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub job_id: String,
    /// The checked graph as persisted.
    pub graph: Graph,
    pub upsert: UpsertReport,
}

impl RunReport {
    pub fn summary(&self) -> &CheckerSummary {
        self.graph.summary()
    }
}

/// A failed generation run with the counters reached before the failure.
#[derive(Debug, thiserror::Error)]
#[error("generation failed: {error} ({summary})")]
pub struct RunFailure {
    #[source]
    pub error: NexusError,
    pub summary: CheckerSummary,
}

impl RunFailure {
    pub fn new(error: impl Into<NexusError>, summary: CheckerSummary) -> Self {
        Self {
            error: error.into(),
            summary,
        }
    }
}
