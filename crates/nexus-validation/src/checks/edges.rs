use std::collections::HashSet;

use nexus_core::draft::{EdgeDraft, NodeDraft};
use nexus_core::graph::{Confidence, Relation};

use super::{out_of_range, required};

pub(super) fn check(edges: &[EdgeDraft], nodes: Option<&[NodeDraft]>, errors: &mut Vec<String>) {
    let node_ids: Option<HashSet<&str>> =
        nodes.map(|nodes| nodes.iter().filter_map(|n| n.id.as_deref()).collect());

    for (j, edge) in edges.iter().enumerate() {
        let path = |field: &str| format!("edges.{j}.{field}");

        if edge.id.is_none() {
            errors.push(required(&path("id")));
        }
        for (field, endpoint) in [("source", &edge.source), ("target", &edge.target)] {
            match (endpoint, &node_ids) {
                (None, _) => errors.push(required(&path(field))),
                (Some(id), Some(ids)) if !ids.contains(id.as_str()) => {
                    errors.push(format!("{}: unknown node '{id}'", path(field)));
                }
                _ => {}
            }
        }
        match &edge.relation {
            None => errors.push(required(&path("relation"))),
            Some(Relation::Unrecognized(name)) => {
                errors.push(format!("{}: unknown relation '{name}'", path("relation")));
            }
            Some(Relation::Known(_)) => {}
        }
        if edge.explanation.is_none() {
            errors.push(required(&path("explanation")));
        }
        if edge.flags.is_none() {
            errors.push(required(&path("flags")));
        }
        if let Some(c) = edge.confidence {
            if !Confidence::in_range(c) {
                errors.push(out_of_range(&path("confidence")));
            }
        }

        match &edge.evidence {
            None => errors.push(required(&path("evidence"))),
            Some(evidence) => {
                if evidence.title.is_none() {
                    errors.push(required(&path("evidence.title")));
                }
                if evidence.snippet.is_none() {
                    errors.push(required(&path("evidence.snippet")));
                }
                if evidence.domain.is_none() {
                    errors.push(required(&path("evidence.domain")));
                }
            }
        }
    }
}
