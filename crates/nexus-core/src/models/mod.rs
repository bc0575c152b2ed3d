mod generate_request;
mod job;
mod subgraph;
mod upsert_report;

pub use generate_request::GenerateRequest;
pub use job::{JobProgress, JobState};
pub use subgraph::Subgraph;
pub use upsert_report::UpsertReport;
