mod common;

use std::sync::Arc;

use common::{harness, Harness, MapSource};
use nexus_core::draft::GraphDraft;
use nexus_core::errors::NexusError;
use nexus_core::graph::CheckerSummary;
use nexus_core::models::GenerateRequest;
use nexus_engine::GraphService;
use test_fixtures::{load_draft, make_edge, make_graph, make_node};

fn information_theory_draft() -> GraphDraft {
    GraphDraft::from(make_graph(
        "Information Theory",
        vec![
            make_node("i1", "Information Theory", "Core"),
            make_node("i2", "Coding Theory", "CS"),
        ],
        vec![make_edge(
            "i1",
            "i2",
            "used_in",
            "Information theory sets the limits that coding theory works within.",
            "Coding theory builds on the limits of information theory.",
        )],
    ))
}

fn generated() -> (Harness, GraphService) {
    let h = harness(
        MapSource::default()
            .with("Entropy", load_draft("entropy_valid"))
            .with("Information Theory", information_theory_draft()),
    );
    h.pipeline.run("seed", &GenerateRequest::new("Entropy")).unwrap();
    let service = GraphService::new(Arc::clone(&h.pipeline));
    (h, service)
}

// ─── get_graph ───

#[test]
fn missing_concept_is_not_found() {
    let (_h, service) = generated();
    let err = service.get_graph("Gravity", 2, "v1").unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("'Gravity'"));
}

#[test]
fn stored_graph_is_returned_with_fresh_meta() {
    let (_h, service) = generated();
    let graph = service.get_graph_default("Entropy").unwrap();
    assert_eq!(graph.concept, "Entropy");
    assert_eq!(graph.version(), "v1");
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.summary().edges_checked, 0);
}

#[test]
fn depth_zero_returns_only_the_root() {
    let (_h, service) = generated();
    let graph = service.get_graph("Entropy", 0, "v1").unwrap();
    assert_eq!(graph.nodes.len(), 1);
    assert!(graph.edges.is_empty());
}

#[test]
fn unknown_version_is_not_found() {
    let (_h, service) = generated();
    assert!(service.get_graph("Entropy", 2, "v9").unwrap_err().is_not_found());
}

// ─── get_node ───

#[test]
fn node_lookup() {
    let (_h, service) = generated();
    assert_eq!(service.get_node("n3").unwrap().name, "Thermodynamics");
    assert!(service.get_node("missing").unwrap_err().is_not_found());
}

// ─── expand ───

#[test]
fn expand_generates_the_node_concept() {
    let (h, service) = generated();
    let graph = service.expand("n2", 1).unwrap();

    assert_eq!(graph.concept, "Information Theory");
    let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["i1", "i2"]);

    let requests = h.source.requests.lock().unwrap();
    let last = requests.last().unwrap();
    assert_eq!(last.concept, "Information Theory");
    assert_eq!(last.depth, 2);
    assert!(last.strict_check);
    assert_eq!(last.version, "v1");
}

#[test]
fn expand_rejects_out_of_range_increments() {
    let (h, service) = generated();
    for inc in [0, 3] {
        let failure = service.expand("n2", inc).unwrap_err();
        assert!(
            matches!(failure.error, NexusError::InvalidRequest { .. }),
            "{inc}: {failure}"
        );
        assert_eq!(failure.summary, CheckerSummary::default());
    }
    assert_eq!(h.source.request_count(), 1);
}

#[test]
fn expand_of_missing_node_is_not_found() {
    let (h, service) = generated();
    assert!(service.expand("ghost", 1).unwrap_err().error.is_not_found());
    assert_eq!(h.source.request_count(), 1);
}

#[test]
fn expand_surfaces_generation_errors() {
    let (_h, service) = generated();
    // No draft is registered for "Thermodynamics".
    let failure = service.expand("n3", 2).unwrap_err();
    assert!(matches!(failure.error, NexusError::DraftSourceFailed { .. }));
}

#[test]
fn expand_failure_keeps_the_run_counters() {
    let unresolved = GraphDraft::from_json(
        r#"{"concept": "Information Theory",
            "nodes": [{"id": "i1", "name": "Information Theory", "domain": "Core"}],
            "edges": [{"source": "i1", "relation": "is_a"}]}"#,
    )
    .unwrap();
    let h = harness(
        MapSource::default()
            .with("Entropy", load_draft("entropy_valid"))
            .with("Information Theory", unresolved),
    );
    h.pipeline.run("seed", &GenerateRequest::new("Entropy")).unwrap();
    let service = GraphService::new(Arc::clone(&h.pipeline));

    let failure = service.expand("n2", 1).unwrap_err();
    assert!(matches!(failure.error, NexusError::SchemaError(_)));
    assert!(failure.summary.schema_fixed > 0);
    assert_eq!(failure.summary, *h.reporter.summaries.lock().unwrap().last().unwrap());
}
