//! GraphService: query facade and node expansion over a pipeline's store.

use std::sync::Arc;

use nexus_core::constants::{MAX_EXPAND_INCREMENT, MIN_EXPAND_INCREMENT};
use nexus_core::errors::{NexusError, NexusResult};
use nexus_core::graph::{CheckerSummary, Graph, Node};
use nexus_core::models::GenerateRequest;
use nexus_core::traits::IGraphStore;
use tracing::{info, warn};

use crate::jobs::new_job_id;
use crate::pipeline::{GenerationPipeline, RunFailure};

pub struct GraphService {
    pipeline: Arc<GenerationPipeline>,
    store: Arc<dyn IGraphStore>,
}

impl GraphService {
    pub fn new(pipeline: Arc<GenerationPipeline>) -> Self {
        let store = Arc::clone(pipeline.store());
        Self { pipeline, store }
    }

    pub fn pipeline(&self) -> &Arc<GenerationPipeline> {
        &self.pipeline
    }

    /// Subgraph of `concept` as a graph with fresh metadata.
    /// An absent root is `NotFound`.
    pub fn get_graph(&self, concept: &str, depth: usize, version: &str) -> NexusResult<Graph> {
        let subgraph = self.store.query_subgraph(concept, depth, version)?;
        if subgraph.is_empty() {
            return Err(NexusError::not_found(format!(
                "graph for concept '{concept}' version '{version}'"
            )));
        }
        Ok(subgraph.into_graph())
    }

    /// Same as [`get_graph`](Self::get_graph) with the configured default
    /// depth and version.
    pub fn get_graph_default(&self, concept: &str) -> NexusResult<Graph> {
        let pipeline = &self.pipeline.config().pipeline;
        self.get_graph(concept, pipeline.default_query_depth, &pipeline.default_version)
    }

    pub fn get_node(&self, id: &str) -> NexusResult<Node> {
        self.store
            .get_node(id)?
            .ok_or_else(|| NexusError::not_found(format!("node '{id}'")))
    }

    /// Generate the graph of an existing node's name with depth
    /// `1 + depth_increment`, strict checking on, then read it back.
    ///
    /// The read-back is returned as is, even when the new concept has no root.
    /// Failures carry the counters of the run; errors raised before the run
    /// carry zeroed counters.
    pub fn expand(&self, node_id: &str, depth_increment: usize) -> Result<Graph, RunFailure> {
        let before_run = |e: NexusError| RunFailure::new(e, CheckerSummary::default());
        if !(MIN_EXPAND_INCREMENT..=MAX_EXPAND_INCREMENT).contains(&depth_increment) {
            return Err(before_run(NexusError::invalid_request(
                "depth_increment",
                format!("must be within {MIN_EXPAND_INCREMENT}..={MAX_EXPAND_INCREMENT}"),
            )));
        }
        let node = self.get_node(node_id).map_err(before_run)?;

        let pipeline = &self.pipeline.config().pipeline;
        let request = GenerateRequest::new(node.name.clone())
            .with_depth(1 + depth_increment)
            .with_strict_check(true)
            .with_version(pipeline.default_version.clone());

        let job_id = new_job_id();
        info!(job_id = %job_id, node_id, concept = %node.name, "expanding node");
        let report = self.pipeline.run(&job_id, &request)?;

        let subgraph = self
            .store
            .query_subgraph(&node.name, pipeline.expand_query_depth, &request.version)
            .map_err(|e| {
                warn!(job_id = %job_id, error = %e, "expand read-back failed");
                RunFailure::new(e, *report.summary())
            })?;
        Ok(subgraph.into_graph())
    }
}
