//! GenerationPipeline: draft → schema → hydrate → merge → check → persist.
//!
//! Every stage reports its status and a log line to the job reporter. A
//! failure anywhere marks the job failed and returns the counters reached so
//! far. Nothing is rolled back; store merges are idempotent.

mod report;
mod stage;

use std::sync::Arc;

use nexus_consolidation::GraphNormalizer;
use nexus_core::config::NexusConfig;
use nexus_core::constants::MAX_LOGGED_SCHEMA_ERRORS;
use nexus_core::draft::GraphDraft;
use nexus_core::errors::{NexusError, SchemaError};
use nexus_core::graph::{now_iso8601, CheckerSummary, Graph};
use nexus_core::models::{GenerateRequest, JobProgress, JobState};
use nexus_core::traits::{IDraftRepairer, IDraftSource, IGraphStore, IJobReporter};
use nexus_evidence::EvidenceChecker;
use nexus_observability::{
    consolidation_span, evidence_span, pipeline_span, storage_span, validation_span,
    MetricsCollector,
};
use nexus_validation::SchemaEngine;
use tracing::{error, info};

pub use report::{RunFailure, RunReport};
pub use stage::Stage;

/// Orchestrates one generation run per call. Shareable across jobs.
pub struct GenerationPipeline {
    config: NexusConfig,
    source: Arc<dyn IDraftSource>,
    repairer: Option<Arc<dyn IDraftRepairer>>,
    store: Arc<dyn IGraphStore>,
    reporter: Arc<dyn IJobReporter>,
    metrics: Arc<MetricsCollector>,
    schema: SchemaEngine,
    normalizer: GraphNormalizer,
    checker: EvidenceChecker,
}

impl GenerationPipeline {
    pub fn new(
        config: NexusConfig,
        source: Arc<dyn IDraftSource>,
        store: Arc<dyn IGraphStore>,
        reporter: Arc<dyn IJobReporter>,
    ) -> Self {
        Self {
            schema: SchemaEngine::from_config(&config.pipeline),
            normalizer: GraphNormalizer::new(config.normalizer.clone()),
            checker: EvidenceChecker::new(config.checker.clone()),
            config,
            source,
            repairer: None,
            store,
            reporter,
            metrics: Arc::new(MetricsCollector::new()),
        }
    }

    pub fn with_repairer(mut self, repairer: Arc<dyn IDraftRepairer>) -> Self {
        self.repairer = Some(repairer);
        self
    }

    /// Share a metrics collector with other pipelines or an exporter.
    pub fn with_metrics(mut self, metrics: Arc<MetricsCollector>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn config(&self) -> &NexusConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Arc<MetricsCollector> {
        &self.metrics
    }

    pub fn store(&self) -> &Arc<dyn IGraphStore> {
        &self.store
    }

    pub fn reporter(&self) -> &Arc<dyn IJobReporter> {
        &self.reporter
    }

    /// Validate the request, obtain a draft from the source, and run it.
    pub fn run(&self, job_id: &str, request: &GenerateRequest) -> Result<RunReport, RunFailure> {
        let span = pipeline_span!(job_id, request.concept);
        let _guard = span.enter();

        if let Err(e) = request.validate() {
            return Err(self.fail(job_id, e, CheckerSummary::default()));
        }

        self.status(job_id, Stage::Drafting);
        self.log(
            job_id,
            format!("[Planner] concept={} depth={}", request.concept, request.depth),
        );
        let draft = match self.source.draft(request) {
            Ok(draft) => draft,
            Err(e) => return Err(self.fail(job_id, e, CheckerSummary::default())),
        };

        self.process(job_id, request, draft)
    }

    /// Run every stage after drafting on a draft supplied by the caller.
    pub fn run_draft(
        &self,
        job_id: &str,
        request: &GenerateRequest,
        draft: GraphDraft,
    ) -> Result<RunReport, RunFailure> {
        let span = pipeline_span!(job_id, request.concept);
        let _guard = span.enter();

        if let Err(e) = request.validate() {
            return Err(self.fail(job_id, e, CheckerSummary::default()));
        }
        self.process(job_id, request, draft)
    }

    fn process(
        &self,
        job_id: &str,
        request: &GenerateRequest,
        draft: GraphDraft,
    ) -> Result<RunReport, RunFailure> {
        let mut graph = match self.schema_stage(job_id, request, draft) {
            Ok(graph) => graph,
            Err((e, summary)) => return Err(self.fail(job_id, e, summary)),
        };

        self.status(job_id, Stage::Merge);
        graph = {
            let _span = consolidation_span!(graph.nodes.len(), graph.edges.len()).entered();
            self.normalizer.normalize(graph).0
        };
        self.log(
            job_id,
            format!("[Merge] nodes={} edges={}", graph.nodes.len(), graph.edges.len()),
        );

        self.status(job_id, Stage::Check);
        {
            let _span = evidence_span!(graph.edges.len(), request.strict_check).entered();
            self.checker.check(&mut graph, request.strict_check);
        }
        let summary = *graph.summary();
        self.log(
            job_id,
            format!("[Check] passed={} failed={}", summary.passed, summary.failed),
        );

        self.status(job_id, Stage::Persist);
        let upsert = {
            let _span = storage_span!(graph.concept, graph.version()).entered();
            match self.store.upsert(&graph) {
                Ok(report) => report,
                Err(e) => return Err(self.fail(job_id, e, summary)),
            }
        };
        self.log(
            job_id,
            format!(
                "[Persist] nodes={} edges={} skipped={}",
                upsert.nodes_written,
                upsert.edges_written,
                upsert.edges_skipped.len()
            ),
        );

        self.log(job_id, format!("[Summary] {summary}"));
        self.reporter.record_summary(job_id, &summary);
        self.metrics.record_success(&summary);
        self.status(job_id, Stage::Done);
        info!(job_id, concept = %graph.concept, %summary, "generation succeeded");

        Ok(RunReport {
            job_id: job_id.to_string(),
            graph,
            upsert,
        })
    }

    /// Validate and repair the draft, then hydrate it with the request's
    /// concept and version.
    fn schema_stage(
        &self,
        job_id: &str,
        request: &GenerateRequest,
        draft: GraphDraft,
    ) -> Result<Graph, (NexusError, CheckerSummary)> {
        let _span = validation_span!(request.concept).entered();
        self.status(job_id, Stage::Schema);

        let outcome = self
            .schema
            .check_and_repair(draft, self.repairer.as_deref());
        let summary = CheckerSummary {
            schema_fixed: outcome.fixed,
            ..CheckerSummary::default()
        };

        if outcome.initial_errors.is_empty() {
            self.log(job_id, "[Schema] ok".to_string());
        } else {
            self.log(
                job_id,
                format!("[Schema] invalid: {} errors", outcome.initial_errors.len()),
            );
            for err in outcome.initial_errors.iter().take(MAX_LOGGED_SCHEMA_ERRORS) {
                self.log(job_id, format!("[Schema][err] {err}"));
            }
            self.log(
                job_id,
                format!("[Schema] repair applied: schema_fixed={}", outcome.fixed),
            );
            if !outcome.is_clean() {
                self.log(
                    job_id,
                    format!(
                        "[Schema] still invalid after repair: {} errors",
                        outcome.remaining_errors.len()
                    ),
                );
            }
        }

        let remaining = outcome.remaining_errors;
        let mut graph = outcome.draft.into_graph().map_err(|_| {
            let unresolved = SchemaError::Unresolved {
                errors: remaining,
                fixed: summary.schema_fixed,
            };
            (NexusError::from(unresolved), summary)
        })?;

        graph.concept = request.concept.clone();
        graph.meta.version = request.version.clone();
        if graph.meta.generated_at.is_empty() {
            graph.meta.generated_at = now_iso8601();
        }
        graph.meta.checker_summary = summary;
        Ok(graph)
    }

    fn fail(&self, job_id: &str, error: impl Into<NexusError>, summary: CheckerSummary) -> RunFailure {
        let failure = RunFailure::new(error, summary);
        error!(job_id, error = %failure.error, "generation failed");
        self.log(job_id, format!("[Error] {}", failure.error));
        self.reporter.record_summary(job_id, &summary);
        self.metrics.record_failure(&summary);
        self.reporter
            .set_status(job_id, JobProgress::new(JobState::Failed, 100, "Failed"));
        failure
    }

    fn status(&self, job_id: &str, stage: Stage) {
        self.reporter.set_status(job_id, stage.status());
    }

    fn log(&self, job_id: &str, line: String) {
        self.reporter.log(job_id, &line);
    }
}
