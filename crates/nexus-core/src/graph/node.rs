use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Confidence;
use crate::config::defaults;

/// A concept vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    pub confidence: Confidence,
}

impl Node {
    pub fn new(id: impl Into<String>, name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            domain: domain.into(),
            definition: None,
            confidence: Confidence::new(defaults::DEFAULT_NODE_CONFIDENCE),
        }
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Confidence::new(confidence);
        self
    }

    /// Whether this node is the root of `concept`: it lives in the root domain
    /// and its trimmed name matches the concept case-insensitively.
    pub fn is_root_for(&self, concept: &str, root_domain: &str) -> bool {
        self.domain == root_domain
            && self.name.trim().to_lowercase() == concept.trim().to_lowercase()
    }
}
