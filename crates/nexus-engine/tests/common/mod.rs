#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use nexus_core::config::NexusConfig;
use nexus_core::draft::GraphDraft;
use nexus_core::errors::{NexusError, NexusResult, StorageError};
use nexus_core::graph::{CheckerSummary, Graph, Node};
use nexus_core::models::{GenerateRequest, JobProgress, Subgraph, UpsertReport};
use nexus_core::traits::{IDraftSource, IGraphStore, IJobReporter};
use nexus_engine::GenerationPipeline;
use nexus_storage::StorageEngine;

/// Serves a fixed draft per concept and remembers every request.
#[derive(Default)]
pub struct MapSource {
    drafts: HashMap<String, GraphDraft>,
    pub requests: Mutex<Vec<GenerateRequest>>,
}

impl MapSource {
    pub fn with(mut self, concept: &str, draft: GraphDraft) -> Self {
        self.drafts.insert(concept.to_string(), draft);
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl IDraftSource for MapSource {
    fn draft(&self, request: &GenerateRequest) -> NexusResult<GraphDraft> {
        self.requests.lock().unwrap().push(request.clone());
        self.drafts
            .get(&request.concept)
            .cloned()
            .ok_or_else(|| NexusError::DraftSourceFailed {
                reason: format!("no draft for {}", request.concept),
            })
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    pub statuses: Mutex<Vec<(String, JobProgress)>>,
    pub lines: Mutex<Vec<String>>,
    pub summaries: Mutex<Vec<CheckerSummary>>,
}

impl RecordingReporter {
    pub fn progress(&self) -> Vec<u8> {
        self.statuses.lock().unwrap().iter().map(|(_, p)| p.progress).collect()
    }

    pub fn last_status(&self) -> JobProgress {
        self.statuses.lock().unwrap().last().unwrap().1.clone()
    }

    pub fn has_line(&self, prefix: &str) -> bool {
        self.lines.lock().unwrap().iter().any(|l| l.starts_with(prefix))
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl IJobReporter for RecordingReporter {
    fn set_status(&self, job_id: &str, progress: JobProgress) {
        self.statuses.lock().unwrap().push((job_id.to_string(), progress));
    }

    fn log(&self, _job_id: &str, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }

    fn record_summary(&self, _job_id: &str, summary: &CheckerSummary) {
        self.summaries.lock().unwrap().push(*summary);
    }
}

/// A store whose writes always fail.
pub struct BrokenStore;

impl IGraphStore for BrokenStore {
    fn upsert(&self, _graph: &Graph) -> NexusResult<UpsertReport> {
        Err(StorageError::SqliteError {
            message: "disk I/O error".to_string(),
        }
        .into())
    }

    fn get_node(&self, _id: &str) -> NexusResult<Option<Node>> {
        Ok(None)
    }

    fn query_subgraph(&self, concept: &str, depth: usize, version: &str) -> NexusResult<Subgraph> {
        Ok(Subgraph::empty(concept, version, depth))
    }
}

pub struct Harness {
    pub pipeline: Arc<GenerationPipeline>,
    pub source: Arc<MapSource>,
    pub reporter: Arc<RecordingReporter>,
    pub store: Arc<StorageEngine>,
}

pub fn harness(source: MapSource) -> Harness {
    let source = Arc::new(source);
    let reporter = Arc::new(RecordingReporter::default());
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    let pipeline = GenerationPipeline::new(
        NexusConfig::default(),
        source.clone(),
        store.clone(),
        reporter.clone(),
    );
    Harness {
        pipeline: Arc::new(pipeline),
        source,
        reporter,
        store,
    }
}
