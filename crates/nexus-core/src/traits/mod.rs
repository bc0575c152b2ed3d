mod draft_repairer;
mod draft_source;
mod graph_store;
mod job_reporter;

pub use draft_repairer::IDraftRepairer;
pub use draft_source::IDraftSource;
pub use graph_store::IGraphStore;
pub use job_reporter::IJobReporter;
