use std::collections::BTreeSet;

use super::{EdgeDraft, GraphDraft, NodeDraft};
use crate::config::defaults;
use crate::errors::SchemaError;
use crate::graph::{Confidence, Edge, Evidence, Graph, GraphMeta, Node};
use crate::ids;

impl GraphDraft {
    /// Build a [`Graph`] from the draft.
    ///
    /// Non-identity fields fall back to their defaults. Fails only when a node
    /// lacks `id`, `name` or `domain`, or an edge lacks `source`, `target` or
    /// `relation`.
    pub fn into_graph(self) -> Result<Graph, SchemaError> {
        let mut errors = Vec::new();

        let nodes: Vec<Node> = self
            .nodes
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(i, draft)| hydrate_node(i, draft, &mut errors))
            .collect();

        let edges: Vec<Edge> = self
            .edges
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(j, draft)| hydrate_edge(j, draft, &mut errors))
            .collect();

        if !errors.is_empty() {
            return Err(SchemaError::Invalid { errors });
        }

        let meta = self.meta.unwrap_or_default();
        Ok(Graph {
            concept: self
                .concept
                .unwrap_or_else(|| defaults::DEFAULT_CONCEPT.to_string()),
            nodes,
            edges,
            meta: GraphMeta {
                generated_at: meta.generated_at.unwrap_or_default(),
                version: meta
                    .version
                    .unwrap_or_else(|| defaults::DEFAULT_GRAPH_VERSION.to_string()),
                checker_summary: meta.checker_summary.unwrap_or_default(),
            },
        })
    }
}

fn required<T>(value: Option<T>, path: String, errors: &mut Vec<String>) -> Option<T> {
    if value.is_none() {
        errors.push(format!("{path}: field required"));
    }
    value
}

fn hydrate_node(i: usize, draft: NodeDraft, errors: &mut Vec<String>) -> Option<Node> {
    let id = required(draft.id, format!("nodes.{i}.id"), errors);
    let name = required(draft.name, format!("nodes.{i}.name"), errors);
    let domain = required(draft.domain, format!("nodes.{i}.domain"), errors);
    let (id, name, domain) = (id?, name?, domain?);

    Some(Node {
        id,
        name,
        domain,
        definition: draft.definition,
        confidence: Confidence::new(
            draft
                .confidence
                .unwrap_or(defaults::DEFAULT_NODE_CONFIDENCE),
        ),
    })
}

fn hydrate_edge(j: usize, draft: EdgeDraft, errors: &mut Vec<String>) -> Option<Edge> {
    let source = required(draft.source, format!("edges.{j}.source"), errors);
    let target = required(draft.target, format!("edges.{j}.target"), errors);
    let relation = required(draft.relation, format!("edges.{j}.relation"), errors);
    let (source, target, relation) = (source?, target?, relation?);

    let evidence = draft.evidence.unwrap_or_default();
    let id = draft
        .id
        .unwrap_or_else(|| ids::edge_id(&source, relation.as_str(), &target));

    Some(Edge {
        id,
        source,
        target,
        relation,
        explanation: draft.explanation.unwrap_or_default(),
        evidence: Evidence {
            title: evidence.title.unwrap_or_default(),
            snippet: evidence.snippet.unwrap_or_default(),
            url: evidence.url,
            domain: evidence.domain.flatten(),
        },
        confidence: Confidence::new(
            draft
                .confidence
                .unwrap_or(defaults::DEFAULT_EDGE_CONFIDENCE),
        ),
        checked: draft.checked.unwrap_or(defaults::DEFAULT_EDGE_CHECKED),
        check_reason: draft.check_reason,
        flags: draft.flags.unwrap_or_else(BTreeSet::new),
    })
}

impl From<Graph> for GraphDraft {
    fn from(graph: Graph) -> Self {
        use super::{EvidenceDraft, MetaDraft};

        let nodes = graph
            .nodes
            .into_iter()
            .map(|n| NodeDraft {
                id: Some(n.id),
                name: Some(n.name),
                domain: Some(n.domain),
                definition: n.definition,
                confidence: Some(n.confidence.value()),
            })
            .collect();
        let edges = graph
            .edges
            .into_iter()
            .map(|e| EdgeDraft {
                id: Some(e.id),
                source: Some(e.source),
                target: Some(e.target),
                relation: Some(e.relation),
                explanation: Some(e.explanation),
                evidence: Some(EvidenceDraft {
                    title: Some(e.evidence.title),
                    snippet: Some(e.evidence.snippet),
                    url: e.evidence.url,
                    domain: Some(e.evidence.domain),
                }),
                confidence: Some(e.confidence.value()),
                checked: Some(e.checked),
                check_reason: e.check_reason,
                flags: Some(e.flags),
            })
            .collect();

        GraphDraft {
            concept: Some(graph.concept),
            nodes: Some(nodes),
            edges: Some(edges),
            meta: Some(MetaDraft {
                generated_at: Some(graph.meta.generated_at),
                version: Some(graph.meta.version),
                checker_summary: Some(graph.meta.checker_summary),
            }),
            rejected_elements: Vec::new(),
        }
    }
}
