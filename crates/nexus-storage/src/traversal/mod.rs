//! In-memory traversal over one (concept, version) slice.

pub mod bfs;
pub mod indexed_graph;

pub use bfs::{reachable, Reach};
pub use indexed_graph::IndexedGraph;
