//! # nexus-validation
//!
//! Schema validation and deterministic repair of graph drafts.
//!
//! [`validate`] reports every defect of a draft. [`repair`] fills what can be
//! filled without inventing identity, and counts each fix. [`SchemaEngine`]
//! runs the validate, repair, re-validate cycle and the optional external
//! repair step.

pub mod checks;
pub mod engine;
pub mod repair;
pub mod report;

pub use checks::validate;
pub use engine::SchemaEngine;
pub use repair::{repair, RepairDefaults};
pub use report::{RepairOutcome, SchemaOutcome, SchemaReport};
