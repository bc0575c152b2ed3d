use crate::graph::CheckerSummary;
use crate::models::JobProgress;

/// Sink for job progress, log lines and final counters.
///
/// Reporting never fails a run; implementations swallow their own errors.
pub trait IJobReporter: Send + Sync {
    fn set_status(&self, job_id: &str, progress: JobProgress);
    fn log(&self, job_id: &str, line: &str);
    fn record_summary(&self, job_id: &str, summary: &CheckerSummary);
}
