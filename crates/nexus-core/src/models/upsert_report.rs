use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Outcome of persisting one graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UpsertReport {
    pub nodes_written: usize,
    pub edges_written: usize,
    /// Ids of edges skipped because an endpoint vertex does not exist.
    pub edges_skipped: Vec<String>,
}
