//! Property tests: depth monotonicity and upsert idempotence on random graphs.

use std::collections::HashSet;

use nexus_core::traits::IGraphStore;
use nexus_core::Graph;
use nexus_storage::StorageEngine;
use proptest::prelude::*;
use test_fixtures::{make_edge, make_graph, make_node};

fn random_graph() -> impl Strategy<Value = Graph> {
    (2usize..8)
        .prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..16)))
        .prop_map(|(n, pairs)| {
            let mut nodes = vec![make_node("c0", "Topic", "Core")];
            nodes.extend((1..n).map(|i| make_node(&format!("c{i}"), &format!("Node {i}"), "CS")));
            let edges = pairs
                .into_iter()
                .map(|(s, t)| make_edge(&format!("c{s}"), &format!("c{t}"), "related_to", "x", "Topic."))
                .collect();
            make_graph("Topic", nodes, edges)
        })
}

fn node_ids(store: &StorageEngine, depth: usize) -> HashSet<String> {
    store
        .query_subgraph("Topic", depth, "v1")
        .unwrap()
        .nodes
        .into_iter()
        .map(|n| n.id)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn deeper_queries_never_lose_nodes(graph in random_graph()) {
        let store = StorageEngine::open_in_memory().unwrap();
        store.upsert(&graph).unwrap();

        let mut previous = node_ids(&store, 0);
        prop_assert_eq!(previous.len(), 1);
        for depth in 1..=3 {
            let current = node_ids(&store, depth);
            prop_assert!(previous.is_subset(&current));
            previous = current;
        }
    }

    #[test]
    fn upsert_twice_equals_upsert_once(graph in random_graph()) {
        let store = StorageEngine::open_in_memory().unwrap();
        store.upsert(&graph).unwrap();
        let counts = store.counts().unwrap();
        let first = store.query_subgraph("Topic", 3, "v1").unwrap();

        store.upsert(&graph).unwrap();
        prop_assert_eq!(store.counts().unwrap(), counts);
        prop_assert_eq!(store.query_subgraph("Topic", 3, "v1").unwrap(), first);
    }

    #[test]
    fn traversed_edges_are_unique(graph in random_graph()) {
        let store = StorageEngine::open_in_memory().unwrap();
        store.upsert(&graph).unwrap();

        let sub = store.query_subgraph("Topic", 3, "v1").unwrap();
        let keys: HashSet<_> = sub.edges.iter().map(|e| e.key()).collect();
        prop_assert_eq!(keys.len(), sub.edges.len());
    }
}
