use nexus_core::draft::GraphDraft;
use nexus_core::errors::SchemaError;
use nexus_core::graph::{Relation, RelationKind};

const FULL_DRAFT: &str = r#"{
  "concept": "Entropy",
  "nodes": [
    {"id": "n1", "name": "Entropy", "domain": "Core", "confidence": 0.9},
    {"id": "n2", "name": "Information Theory", "domain": "CS"}
  ],
  "edges": [
    {
      "source": "n1", "target": "n2", "relation": "used_in",
      "explanation": "Entropy is central to information theory.",
      "evidence": {"title": "Shannon", "snippet": "Entropy measures information.", "domain": null}
    }
  ],
  "meta": {"generated_at": "2024-01-01T00:00:00Z", "version": "v1"}
}"#;

#[test]
fn evidence_domain_distinguishes_null_from_absent() {
    let draft = GraphDraft::from_json(FULL_DRAFT).unwrap();
    let edge = &draft.edges.as_ref().unwrap()[0];
    assert_eq!(edge.evidence.as_ref().unwrap().domain, Some(None));

    let absent = GraphDraft::from_json(
        r#"{"edges": [{"source": "a", "target": "b", "relation": "is_a", "evidence": {}}]}"#,
    )
    .unwrap();
    assert_eq!(absent.edges.unwrap()[0].evidence.as_ref().unwrap().domain, None);
}

#[test]
fn explicit_null_domain_survives_reserialization() {
    let draft = GraphDraft::from_json(FULL_DRAFT).unwrap();
    let value = draft.to_value().unwrap();
    assert!(value["edges"][0]["evidence"]["domain"].is_null());
    assert!(value["edges"][0]["evidence"]
        .as_object()
        .unwrap()
        .contains_key("domain"));
}

#[test]
fn into_graph_fills_non_identity_defaults() {
    let graph = GraphDraft::from_json(FULL_DRAFT).unwrap().into_graph().unwrap();
    assert_eq!(graph.concept, "Entropy");
    assert_eq!(graph.nodes[0].confidence.value(), 0.9);
    assert_eq!(graph.nodes[1].confidence.value(), 0.75);

    let edge = &graph.edges[0];
    assert_eq!(edge.relation, Relation::Known(RelationKind::UsedIn));
    assert_eq!(edge.confidence.value(), 0.7);
    assert!(edge.checked);
    assert_eq!(edge.id, nexus_core::ids::edge_id("n1", "used_in", "n2"));
    assert!(edge.flags.is_empty());
    assert_eq!(graph.meta.version, "v1");
}

#[test]
fn into_graph_rejects_missing_identity_fields() {
    let draft = GraphDraft::from_json(
        r#"{"nodes": [{"id": "n1", "domain": "Core"}],
            "edges": [{"source": "n1", "relation": "is_a"}]}"#,
    )
    .unwrap();
    match draft.into_graph() {
        Err(SchemaError::Invalid { errors }) => {
            assert!(errors.contains(&"nodes.0.name: field required".to_string()));
            assert!(errors.contains(&"edges.0.target: field required".to_string()));
            assert_eq!(errors.len(), 2);
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn graph_converts_back_to_an_equivalent_draft() {
    let graph = GraphDraft::from_json(FULL_DRAFT).unwrap().into_graph().unwrap();
    let again = GraphDraft::from(graph.clone()).into_graph().unwrap();
    assert_eq!(graph, again);
}

#[test]
fn wrongly_typed_fields_read_as_absent() {
    let draft = GraphDraft::from_json(
        r#"{"concept": 42, "nodes": [{"id": "n1", "name": ["x"], "confidence": "high"}],
            "edges": "oops", "meta": {"version": 1}}"#,
    )
    .unwrap();
    assert_eq!(draft.concept, None);
    let node = &draft.nodes.as_ref().unwrap()[0];
    assert_eq!(node.id.as_deref(), Some("n1"));
    assert_eq!(node.name, None);
    assert_eq!(node.confidence, None);
    assert_eq!(draft.edges, None);
    assert_eq!(draft.meta.unwrap().version, None);
}

#[test]
fn invalid_json_syntax_still_fails() {
    assert!(GraphDraft::from_json("{\"nodes\": [").is_err());
}

#[test]
fn non_object_elements_are_dropped_individually() {
    let draft = GraphDraft::from_json(
        r#"{
            "nodes": [{"id": "n1"}, "n2", {"id": "n3"}, null],
            "edges": [7, {"source": "n1", "target": "n3", "relation": "is_a"}]
        }"#,
    )
    .unwrap();

    let node_ids: Vec<_> = draft.nodes.iter().flatten().filter_map(|n| n.id.as_deref()).collect();
    assert_eq!(node_ids, vec!["n1", "n3"]);
    assert_eq!(draft.edges.as_ref().unwrap().len(), 1);
    assert_eq!(draft.rejected_elements, vec!["nodes.1", "nodes.3", "edges.0"]);
}

#[test]
fn non_array_lists_still_read_as_absent() {
    let draft = GraphDraft::from_json(r#"{"nodes": "n1", "edges": {}}"#).unwrap();
    assert!(draft.nodes.is_none());
    assert!(draft.edges.is_none());
    assert!(draft.rejected_elements.is_empty());
    assert!(!draft.to_value().unwrap().as_object().unwrap().contains_key("rejected_elements"));
}
