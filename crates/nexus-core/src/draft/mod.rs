//! Typed representation of an untrusted graph draft.
//!
//! Every field is optional so that a partially formed draft can be held,
//! reported on, and repaired field by field before it becomes a [`Graph`].
//! A value of the wrong JSON type reads as absent; only malformed JSON syntax
//! fails to parse. A node or edge element that is not an object is dropped
//! alone and its position kept in [`GraphDraft::rejected_elements`].

mod hydrate;

use std::collections::BTreeSet;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::NexusResult;
use crate::graph::{CheckerSummary, Relation};

#[cfg(doc)]
use crate::graph::Graph;

/// A raw graph as produced by an upstream generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawGraphDraft")]
pub struct GraphDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<NodeDraft>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<EdgeDraft>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaDraft>,
    /// Source paths (`nodes.2`, `edges.0`) of list elements that were not
    /// objects. Indices refer to the list as received.
    #[serde(skip)]
    pub rejected_elements: Vec<String>,
}

/// Wire shape of a draft: lists are read element by element.
#[derive(Deserialize)]
struct RawGraphDraft {
    #[serde(default, deserialize_with = "lenient")]
    concept: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    nodes: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    edges: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    meta: Option<MetaDraft>,
}

impl From<RawGraphDraft> for GraphDraft {
    fn from(raw: RawGraphDraft) -> Self {
        let mut rejected_elements = Vec::new();
        let nodes = raw
            .nodes
            .map(|values| elements("nodes", values, &mut rejected_elements));
        let edges = raw
            .edges
            .map(|values| elements("edges", values, &mut rejected_elements));
        Self {
            concept: raw.concept,
            nodes,
            edges,
            meta: raw.meta,
            rejected_elements,
        }
    }
}

/// Keep the object elements of a list; record the position of the others.
fn elements<T: DeserializeOwned>(
    list: &str,
    values: Vec<Value>,
    rejected: &mut Vec<String>,
) -> Vec<T> {
    let mut kept = Vec::with_capacity(values.len());
    for (i, value) in values.into_iter().enumerate() {
        let element = match value {
            Value::Object(_) => serde_json::from_value(value).ok(),
            _ => None,
        };
        match element {
            Some(element) => kept.push(element),
            None => rejected.push(format!("{list}.{i}")),
        }
    }
    kept
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeDraft {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeDraft {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub relation: Option<Relation>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub evidence: Option<EvidenceDraft>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub check_reason: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub flags: Option<BTreeSet<String>>,
}

impl EdgeDraft {
    /// Whether the identity triple needed to derive an id is present.
    pub fn has_identity(&self) -> bool {
        self.source.is_some() && self.target.is_some() && self.relation.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvidenceDraft {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// `None` when the key is absent, `Some(None)` when it is explicitly null.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub domain: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaDraft {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub checker_summary: Option<CheckerSummary>,
}

impl GraphDraft {
    pub fn from_json(json: &str) -> NexusResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> NexusResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_value(&self) -> NexusResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Read a field, treating `null` and wrongly typed values as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Distinguish an explicit `null` from an absent key. Non-string values read
/// as `null`.
fn nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(Some(s))),
        _ => Ok(Some(None)),
    }
}
