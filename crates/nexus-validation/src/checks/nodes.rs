use std::collections::HashSet;

use nexus_core::draft::NodeDraft;
use nexus_core::graph::Confidence;

use super::{out_of_range, required};

pub(super) fn check(nodes: &[NodeDraft], errors: &mut Vec<String>) {
    let mut seen: HashSet<&str> = HashSet::new();

    for (i, node) in nodes.iter().enumerate() {
        match &node.id {
            None => errors.push(required(&format!("nodes.{i}.id"))),
            Some(id) => {
                if !seen.insert(id.as_str()) {
                    errors.push(format!("nodes.{i}.id: duplicate id '{id}'"));
                }
            }
        }
        if node.name.is_none() {
            errors.push(required(&format!("nodes.{i}.name")));
        }
        if node.domain.is_none() {
            errors.push(required(&format!("nodes.{i}.domain")));
        }
        if let Some(c) = node.confidence {
            if !Confidence::in_range(c) {
                errors.push(out_of_range(&format!("nodes.{i}.confidence")));
            }
        }
    }
}
