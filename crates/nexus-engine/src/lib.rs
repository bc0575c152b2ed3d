//! # nexus-engine
//!
//! Runs the generation pipeline (draft, schema repair, merge, evidence check,
//! persist) for a request, reports progress to a job reporter, and serves
//! graph and node queries over the store.

pub mod jobs;
pub mod pipeline;
pub mod reporter;
pub mod service;

pub use jobs::{JobRunner, SubmittedJob};
pub use pipeline::{GenerationPipeline, RunFailure, RunReport, Stage};
pub use reporter::TracingReporter;
pub use service::GraphService;
