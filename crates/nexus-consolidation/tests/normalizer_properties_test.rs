//! Property tests for the graph normalizer.

use std::collections::HashSet;

use nexus_consolidation::GraphNormalizer;
use nexus_core::graph::{Edge, Graph, Node};
use proptest::prelude::*;
use test_fixtures::{make_edge, make_graph, make_node};

const NAMES: [&str; 7] = [
    "Neural Network",
    "NN",
    "neural-network (model)",
    "Entropy",
    "ML",
    "Machine Learning",
    "熵",
];
const DOMAINS: [&str; 3] = ["ML", "ml", "Core"];
const RELATIONS: [&str; 4] = ["is_a", "used_in", "explains", "causes"];

fn arb_graph() -> impl Strategy<Value = Graph> {
    // Ids come from a small pool so repeats are common; n6 never names a node.
    let nodes = proptest::collection::vec((0..6usize, 0..NAMES.len(), 0..DOMAINS.len()), 1..8);
    let edge = (0..7usize, 0..7usize, 0..RELATIONS.len(), 0.0f64..=1.0, 0..NAMES.len());
    (nodes, proptest::collection::vec(edge, 0..12)).prop_map(|(specs, edge_specs)| {
        let nodes: Vec<Node> = specs
            .iter()
            .map(|&(id, name, domain)| make_node(&format!("n{id}"), NAMES[name], DOMAINS[domain]))
            .collect();
        let edges: Vec<Edge> = edge_specs
            .iter()
            .map(|&(s, t, rel, conf, snippet)| {
                make_edge(&format!("n{s}"), &format!("n{t}"), RELATIONS[rel], "because", NAMES[snippet])
                    .with_confidence(conf)
            })
            .collect();
        make_graph("Entropy", nodes, edges)
    })
}

proptest! {
    #[test]
    fn normalization_is_deterministic(graph in arb_graph()) {
        let normalizer = GraphNormalizer::default();
        let (a, stats_a) = normalizer.normalize(graph.clone());
        let (b, stats_b) = normalizer.normalize(graph);
        prop_assert_eq!(a, b);
        prop_assert_eq!(stats_a, stats_b);
    }

    #[test]
    fn every_edge_endpoint_names_a_surviving_node(graph in arb_graph()) {
        let (out, _) = GraphNormalizer::default().normalize(graph);
        let ids: HashSet<&str> = out.nodes.iter().map(|n| n.id.as_str()).collect();
        for edge in &out.edges {
            prop_assert!(ids.contains(edge.source.as_str()));
            prop_assert!(ids.contains(edge.target.as_str()));
        }
    }

    #[test]
    fn counters_account_for_every_input(graph in arb_graph()) {
        let nodes_in = graph.nodes.len();
        let edges_in = graph.edges.len();
        let (out, stats) = GraphNormalizer::default().normalize(graph);
        prop_assert_eq!(out.nodes.len() + stats.nodes_merged, nodes_in);
        prop_assert_eq!(
            out.edges.len() + stats.edges_removed + stats.dangling_removed,
            edges_in
        );
    }

    #[test]
    fn edge_keys_are_unique_and_confidence_bounded(graph in arb_graph()) {
        let (out, _) = GraphNormalizer::default().normalize(graph);
        let mut keys = HashSet::new();
        for edge in &out.edges {
            prop_assert!(keys.insert(edge.key()));
            prop_assert!((0.0..=1.0).contains(&edge.confidence.value()));
        }
    }

    #[test]
    fn node_ids_stay_unique(graph in arb_graph()) {
        let (out, _) = GraphNormalizer::default().normalize(graph);
        let ids: HashSet<&str> = out.nodes.iter().map(|n| n.id.as_str()).collect();
        prop_assert_eq!(ids.len(), out.nodes.len());
    }
}
