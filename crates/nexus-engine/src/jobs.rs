//! Background execution of generation jobs on the tokio blocking pool.

use std::sync::Arc;

use nexus_core::models::{GenerateRequest, JobProgress, JobState};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::pipeline::{GenerationPipeline, RunFailure, RunReport};

/// Fresh job id.
pub fn new_job_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Submits pipeline runs as blocking tasks. The pipeline itself is
/// synchronous; the store serializes writers internally.
pub struct JobRunner {
    pipeline: Arc<GenerationPipeline>,
    runtime: Handle,
}

/// A submitted job.
pub struct SubmittedJob {
    pub job_id: String,
    pub handle: JoinHandle<Result<RunReport, RunFailure>>,
}

impl JobRunner {
    pub fn new(pipeline: Arc<GenerationPipeline>, runtime: Handle) -> Self {
        Self { pipeline, runtime }
    }

    /// Report the job as queued and start it in the background.
    pub fn submit(&self, request: GenerateRequest) -> SubmittedJob {
        let job_id = new_job_id();
        self.pipeline
            .reporter()
            .set_status(&job_id, JobProgress::new(JobState::Queued, 0, "Queued"));
        debug!(job_id = %job_id, concept = %request.concept, "job queued");

        let pipeline = Arc::clone(&self.pipeline);
        let id = job_id.clone();
        let handle = self
            .runtime
            .spawn_blocking(move || pipeline.run(&id, &request));

        SubmittedJob { job_id, handle }
    }
}
