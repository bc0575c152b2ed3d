use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{CheckerSummary, Edge, Node};

/// Graph-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GraphMeta {
    /// ISO-8601 timestamp, empty when unknown.
    pub generated_at: String,
    pub version: String,
    pub checker_summary: CheckerSummary,
}

impl GraphMeta {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            generated_at: now_iso8601(),
            version: version.into(),
            checker_summary: CheckerSummary::default(),
        }
    }
}

/// A concept graph: nodes, edges and metadata for one concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Graph {
    pub concept: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub meta: GraphMeta,
}

impl Graph {
    pub fn new(concept: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            concept: concept.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
            meta: GraphMeta::new(version),
        }
    }

    pub fn version(&self) -> &str {
        &self.meta.version
    }

    pub fn summary(&self) -> &CheckerSummary {
        &self.meta.checker_summary
    }

    pub fn summary_mut(&mut self) -> &mut CheckerSummary {
        &mut self.meta.checker_summary
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Map node id to node name. Later duplicates of an id win.
    pub fn names_by_id(&self) -> HashMap<&str, &str> {
        self.nodes
            .iter()
            .map(|n| (n.id.as_str(), n.name.as_str()))
            .collect()
    }

    /// The first node that qualifies as the root of this graph's concept.
    pub fn root(&self, root_domain: &str) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| n.is_root_for(&self.concept, root_domain))
    }
}

/// Current UTC time as an ISO-8601 string with second precision.
pub fn now_iso8601() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
