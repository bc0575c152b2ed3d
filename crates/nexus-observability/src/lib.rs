//! # nexus-observability
//!
//! Tracing subscriber setup, span macros for each pipeline stage, and a
//! cumulative metrics collector over checker summaries.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{MetricsCollector, RunTotals};
pub use tracing_setup::init_tracing;
