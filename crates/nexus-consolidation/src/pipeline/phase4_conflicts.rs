//! Phase 4: flag (source, target) pairs carrying more than one relation.

use std::collections::HashMap;

use nexus_core::graph::{flags, Edge};

/// Flag every edge of a conflicting pair and scale its confidence by
/// `penalty`. Returns the number of edges newly flagged.
///
/// Expects de-duplicated edges, so the edge count of a pair equals its number
/// of distinct relations.
pub fn flag_conflicts(edges: &mut [Edge], penalty: f64) -> usize {
    let mut relations_per_pair: HashMap<(String, String), usize> = HashMap::new();
    for edge in edges.iter() {
        *relations_per_pair
            .entry((edge.source.clone(), edge.target.clone()))
            .or_default() += 1;
    }

    let mut flagged = 0;
    for edge in edges.iter_mut() {
        let pair = (edge.source.clone(), edge.target.clone());
        if relations_per_pair.get(&pair).copied().unwrap_or(0) <= 1 {
            continue;
        }
        if edge.add_flag(flags::CONFLICT) {
            flagged += 1;
        }
        edge.confidence = edge.confidence * penalty;
    }
    flagged
}
