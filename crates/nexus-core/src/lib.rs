//! # nexus-core
//!
//! Foundation crate for the Nexus concept graph engine.
//! Defines the graph model, the typed raw draft, errors, config, constants,
//! the shared text normalization family, and the collaborator traits.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod draft;
pub mod errors;
pub mod graph;
pub mod ids;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::NexusConfig;
pub use draft::GraphDraft;
pub use errors::{NexusError, NexusResult};
pub use graph::{CheckerSummary, Confidence, Edge, Evidence, Graph, GraphMeta, Node, Relation, RelationKind};
