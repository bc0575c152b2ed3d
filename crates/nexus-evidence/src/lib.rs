//! # nexus-evidence
//!
//! Evidence checking for graph edges: relation whitelist, hard rule,
//! endpoint mention rule, and keyword-overlap scoring.
//! Every edge receives a verdict and a re-scored confidence.

pub mod engine;
pub mod healing;
pub mod rules;
pub mod stats;
pub mod verdict;

pub use engine::EvidenceChecker;
pub use stats::CheckStats;
pub use verdict::Verdict;
