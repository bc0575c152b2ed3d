//! # nexus-consolidation
//!
//! 4-phase graph normalization: node merge → edge rewrite → edge de-dup → conflict flagging.
//! Deterministic for a given input order.

pub mod engine;
pub mod pipeline;
pub mod stats;

pub use engine::GraphNormalizer;
pub use stats::MergeStats;
