use nexus_core::models::*;

#[test]
fn generate_request_applies_serde_defaults() {
    let req: GenerateRequest = serde_json::from_str(r#"{"concept": "Entropy"}"#).unwrap();
    assert_eq!(req.depth, 2);
    assert!(req.strict_check);
    assert_eq!(req.version, "v1");
    assert!(req.validate().is_ok());
}

#[test]
fn generate_request_bounds_are_enforced() {
    assert!(GenerateRequest::new("").validate().is_err());
    assert!(GenerateRequest::new("   ").validate().is_err());
    assert!(GenerateRequest::new("x".repeat(80)).validate().is_ok());
    assert!(GenerateRequest::new("x".repeat(81)).validate().is_err());
    assert!(GenerateRequest::new("Entropy").with_depth(0).validate().is_err());
    assert!(GenerateRequest::new("Entropy").with_depth(3).validate().is_ok());
    assert!(GenerateRequest::new("Entropy").with_depth(4).validate().is_err());
    assert!(GenerateRequest::new("Entropy").with_version("").validate().is_err());
}

#[test]
fn concept_length_counts_characters() {
    // 80 multi-byte characters are accepted.
    assert!(GenerateRequest::new("熵".repeat(80)).validate().is_ok());
}

#[test]
fn job_progress_is_capped_at_100() {
    let p = JobProgress::new(JobState::Running, 250, "Checking");
    assert_eq!(p.progress, 100);
    assert!(!p.state.is_terminal());
    assert!(JobState::Failed.is_terminal());
    assert_eq!(serde_json::to_string(&JobState::Succeeded).unwrap(), "\"succeeded\"");
}

#[test]
fn subgraph_into_graph_keeps_concept_and_version() {
    let sub = Subgraph::empty("Entropy", "v2", 2);
    assert!(sub.is_empty());
    let graph = sub.into_graph();
    assert_eq!(graph.concept, "Entropy");
    assert_eq!(graph.meta.version, "v2");
    assert!(!graph.meta.generated_at.is_empty());
}
