use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::defaults;
use crate::constants::{MAX_CONCEPT_CHARS, MAX_GENERATION_DEPTH, MIN_GENERATION_DEPTH};
use crate::errors::{NexusError, NexusResult};

/// A request to generate and persist the graph of one concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GenerateRequest {
    pub concept: String,
    /// Domains the upstream generator should explore. `None` lets it choose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
    #[serde(default = "default_depth")]
    pub depth: usize,
    #[serde(default = "default_strict")]
    pub strict_check: bool,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_depth() -> usize {
    defaults::DEFAULT_GENERATION_DEPTH
}

fn default_strict() -> bool {
    defaults::DEFAULT_STRICT_CHECK
}

fn default_version() -> String {
    defaults::DEFAULT_GRAPH_VERSION.to_string()
}

impl GenerateRequest {
    pub fn new(concept: impl Into<String>) -> Self {
        Self {
            concept: concept.into(),
            domains: None,
            depth: default_depth(),
            strict_check: default_strict(),
            version: default_version(),
        }
    }

    pub fn with_domains(mut self, domains: Vec<String>) -> Self {
        self.domains = Some(domains);
        self
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_strict_check(mut self, strict: bool) -> Self {
        self.strict_check = strict;
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Reject requests outside the accepted bounds.
    pub fn validate(&self) -> NexusResult<()> {
        let chars = self.concept.chars().count();
        if self.concept.trim().is_empty() || chars > MAX_CONCEPT_CHARS {
            return Err(NexusError::invalid_request(
                "concept",
                format!("must be 1..={MAX_CONCEPT_CHARS} characters and not blank"),
            ));
        }
        if !(MIN_GENERATION_DEPTH..=MAX_GENERATION_DEPTH).contains(&self.depth) {
            return Err(NexusError::invalid_request(
                "depth",
                format!("must be within {MIN_GENERATION_DEPTH}..={MAX_GENERATION_DEPTH}"),
            ));
        }
        if self.version.trim().is_empty() {
            return Err(NexusError::invalid_request("version", "must not be empty"));
        }
        Ok(())
    }
}
