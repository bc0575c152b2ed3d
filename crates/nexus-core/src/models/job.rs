use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Lifecycle of a generation job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    Queued,
    Running,
    Succeeded,
    Failed,
}

impl JobState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// A status update published to the job reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct JobProgress {
    pub state: JobState,
    /// Percent complete, 0..=100.
    pub progress: u8,
    pub message: String,
}

impl JobProgress {
    pub fn new(state: JobState, progress: u8, message: impl Into<String>) -> Self {
        Self {
            state,
            progress: progress.min(100),
            message: message.into(),
        }
    }
}
