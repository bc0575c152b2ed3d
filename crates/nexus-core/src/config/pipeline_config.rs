use serde::{Deserialize, Serialize};

use super::defaults;

/// Pipeline and query configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Version tag used when a request or draft carries none.
    pub default_version: String,
    /// Domain that marks the root node of a concept.
    pub root_domain: String,
    pub default_query_depth: usize,
    /// Subgraph depth read back after an expansion.
    pub expand_query_depth: usize,
    /// Whether to hand unresolved drafts to an external repairer when one is wired.
    pub external_repair: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_version: defaults::DEFAULT_GRAPH_VERSION.to_string(),
            root_domain: defaults::DEFAULT_ROOT_DOMAIN.to_string(),
            default_query_depth: defaults::DEFAULT_QUERY_DEPTH,
            expand_query_depth: defaults::DEFAULT_EXPAND_QUERY_DEPTH,
            external_repair: defaults::DEFAULT_EXTERNAL_REPAIR,
        }
    }
}
