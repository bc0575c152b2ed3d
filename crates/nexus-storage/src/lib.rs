//! # nexus-storage
//!
//! Versioned persistence for concept graphs.
//! Vertices are keyed by node id; relationships by
//! (source, target, relation, version, concept). Subgraph queries run a
//! hop-bounded BFS over one (concept, version) slice.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;
pub mod traversal;

pub use engine::StorageEngine;

use nexus_core::errors::StorageError;

/// Wrap any displayable failure as a SQLite storage error.
pub(crate) fn to_storage_err(message: impl std::fmt::Display) -> StorageError {
    StorageError::SqliteError {
        message: message.to_string(),
    }
}

/// Key under which a concept is stored: trimmed and lowercased.
pub fn concept_key(concept: &str) -> String {
    concept.trim().to_lowercase()
}
