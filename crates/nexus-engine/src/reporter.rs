//! Job reporter that writes status, log lines and summaries to `tracing`.

use nexus_core::graph::CheckerSummary;
use nexus_core::models::JobProgress;
use nexus_core::traits::IJobReporter;
use tracing::info;

/// Default reporter when no external job registry is wired.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl IJobReporter for TracingReporter {
    fn set_status(&self, job_id: &str, progress: JobProgress) {
        info!(
            job_id,
            state = ?progress.state,
            progress = progress.progress,
            message = %progress.message,
            "job status"
        );
    }

    fn log(&self, job_id: &str, line: &str) {
        info!(job_id, "{line}");
    }

    fn record_summary(&self, job_id: &str, summary: &CheckerSummary) {
        info!(job_id, %summary, "job summary");
    }
}
