use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Confidence, Relation};
use crate::config::defaults;
use crate::ids;

/// Supporting text for an edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evidence {
    pub title: String,
    pub snippet: String,
    #[serde(default)]
    pub url: Option<String>,
    /// Domain of the evidence source, usually inferred from the target node.
    #[serde(default)]
    pub domain: Option<String>,
}

impl Evidence {
    pub fn new(title: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            url: None,
            domain: None,
        }
    }
}

/// A directed, typed relationship between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub relation: Relation,
    pub explanation: String,
    pub evidence: Evidence,
    pub confidence: Confidence,
    pub checked: bool,
    #[serde(default)]
    pub check_reason: Option<String>,
    #[serde(default)]
    pub flags: BTreeSet<String>,
}

/// Identity of an edge for de-duplication: (source, target, relation).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub source: String,
    pub target: String,
    pub relation: Relation,
}

impl Edge {
    /// Build an edge with default confidence and a derived id.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        relation: impl Into<Relation>,
        explanation: impl Into<String>,
        evidence: Evidence,
    ) -> Self {
        let source = source.into();
        let target = target.into();
        let relation = relation.into();
        Self {
            id: ids::edge_id(&source, relation.as_str(), &target),
            source,
            target,
            relation,
            explanation: explanation.into(),
            evidence,
            confidence: Confidence::new(defaults::DEFAULT_EDGE_CONFIDENCE),
            checked: defaults::DEFAULT_EDGE_CHECKED,
            check_reason: None,
            flags: BTreeSet::new(),
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Confidence::new(confidence);
        self
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey {
            source: self.source.clone(),
            target: self.target.clone(),
            relation: self.relation.clone(),
        }
    }

    /// The (source, target) pair, ignoring the relation.
    pub fn pair(&self) -> (&str, &str) {
        (&self.source, &self.target)
    }

    /// Insert a flag. Returns `true` when it was not already present.
    pub fn add_flag(&mut self, flag: &str) -> bool {
        self.flags.insert(flag.to_string())
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }
}
