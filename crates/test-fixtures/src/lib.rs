//! Test fixture loader and graph builders for Nexus tests.
//!
//! Fixture JSON lives next to this crate under `drafts/`. The builders keep
//! test setup short across crates.

use std::path::PathBuf;

use nexus_core::draft::GraphDraft;
use nexus_core::graph::{Edge, Evidence, Graph, Node, Relation};
use serde::de::DeserializeOwned;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by file name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
}

/// Load `drafts/<name>.json` as a typed draft.
pub fn load_draft(name: &str) -> GraphDraft {
    load_fixture(&format!("drafts/{name}.json"))
}

// ─── Builders ───

pub fn make_node(id: &str, name: &str, domain: &str) -> Node {
    Node::new(id, name, domain)
}

/// An edge with a derived id, titled evidence, and default confidence.
pub fn make_edge(
    source: &str,
    target: &str,
    relation: &str,
    explanation: &str,
    snippet: &str,
) -> Edge {
    Edge::new(
        source,
        target,
        Relation::parse(relation),
        explanation,
        Evidence::new("Reference", snippet),
    )
}

pub fn make_graph(concept: &str, nodes: Vec<Node>, edges: Vec<Edge>) -> Graph {
    let mut graph = Graph::new(concept, "v1");
    graph.nodes = nodes;
    graph.edges = edges;
    graph
}

/// A small, well-formed graph rooted at "Entropy".
pub fn entropy_graph() -> Graph {
    make_graph(
        "Entropy",
        vec![
            make_node("n1", "Entropy", "Core"),
            make_node("n2", "Information Theory", "CS"),
            make_node("n3", "Thermodynamics", "Physics"),
            make_node("n4", "Heat Engine", "Physics"),
        ],
        vec![
            make_edge(
                "n1",
                "n2",
                "used_in",
                "Entropy quantifies the average information content of a message source.",
                "Shannon defined entropy as the average information content of a source.",
            ),
            make_edge(
                "n1",
                "n3",
                "explains",
                "Thermodynamic entropy counts the microscopic configurations of a system.",
                "In thermodynamics entropy counts microscopic configurations.",
            ),
            make_edge(
                "n3",
                "n4",
                "used_in",
                "Thermodynamics predicts the maximum efficiency of a heat engine.",
                "Thermodynamics bounds the efficiency of every heat engine.",
            ),
        ],
    )
}
