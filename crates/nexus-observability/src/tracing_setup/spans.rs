//! Span definitions per pipeline stage.

/// Create a schema validation span.
#[macro_export]
macro_rules! validation_span {
    ($concept:expr) => {
        tracing::info_span!("nexus.validation", concept = %$concept)
    };
}

/// Create a merge/dedup span.
#[macro_export]
macro_rules! consolidation_span {
    ($nodes:expr, $edges:expr) => {
        tracing::info_span!("nexus.consolidation", nodes = $nodes, edges = $edges)
    };
}

/// Create an evidence checking span.
#[macro_export]
macro_rules! evidence_span {
    ($edges:expr, $strict:expr) => {
        tracing::info_span!("nexus.evidence", edges = $edges, strict = $strict)
    };
}

/// Create a persistence span.
#[macro_export]
macro_rules! storage_span {
    ($concept:expr, $version:expr) => {
        tracing::info_span!("nexus.storage", concept = %$concept, version = %$version)
    };
}

/// Create a span around one generation job.
#[macro_export]
macro_rules! pipeline_span {
    ($job_id:expr, $concept:expr) => {
        tracing::info_span!("nexus.pipeline", job_id = %$job_id, concept = %$concept)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const VALIDATION: &str = "nexus.validation";
    pub const CONSOLIDATION: &str = "nexus.consolidation";
    pub const EVIDENCE: &str = "nexus.evidence";
    pub const STORAGE: &str = "nexus.storage";
    pub const PIPELINE: &str = "nexus.pipeline";
}
