//! Test that generates TypeScript bindings from Rust types via ts-rs.
//!
//! Run with: cargo test -p nexus-core export_bindings
//! Generated files appear in nexus-core/bindings/*.ts

#[test]
fn export_bindings() {
    use nexus_core::graph::{
        CheckerSummary, Confidence, Edge, Evidence, Graph, GraphMeta, Node, Relation,
        RelationKind,
    };
    use nexus_core::models::{GenerateRequest, JobProgress, JobState, Subgraph, UpsertReport};

    // ts-rs export is triggered by the derive macro at compile time.
    // This test just validates all types are importable and TS-derivable.
    let _ = std::any::type_name::<Graph>();
    let _ = std::any::type_name::<GraphMeta>();
    let _ = std::any::type_name::<Node>();
    let _ = std::any::type_name::<Edge>();
    let _ = std::any::type_name::<Evidence>();
    let _ = std::any::type_name::<Confidence>();
    let _ = std::any::type_name::<Relation>();
    let _ = std::any::type_name::<RelationKind>();
    let _ = std::any::type_name::<CheckerSummary>();
    let _ = std::any::type_name::<GenerateRequest>();
    let _ = std::any::type_name::<JobProgress>();
    let _ = std::any::type_name::<JobState>();
    let _ = std::any::type_name::<Subgraph>();
    let _ = std::any::type_name::<UpsertReport>();
}
