//! Relationship upsert and slice reads.

use std::collections::BTreeSet;

use nexus_core::config::defaults::DEFAULT_EDGE_CONFIDENCE;
use nexus_core::errors::StorageError;
use nexus_core::graph::{Confidence, Edge, Evidence, Relation};
use rusqlite::{params, Connection, Row};

use crate::to_storage_err;

/// Merge an edge into its relationship within a (concept, version) slice,
/// overwriting every attribute.
pub fn upsert_relation(
    conn: &Connection,
    edge: &Edge,
    concept: &str,
    version: &str,
    updated_at: &str,
) -> Result<(), StorageError> {
    let flags = serde_json::to_string(&edge.flags).map_err(to_storage_err)?;
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO relationships
                (source, target, relation, version, concept, edge_id, explanation,
                 evidence_title, evidence_snippet, evidence_url, evidence_domain,
                 confidence, checked, check_reason, flags, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)
             ON CONFLICT(source, target, relation, version, concept) DO UPDATE SET
                edge_id = excluded.edge_id,
                explanation = excluded.explanation,
                evidence_title = excluded.evidence_title,
                evidence_snippet = excluded.evidence_snippet,
                evidence_url = excluded.evidence_url,
                evidence_domain = excluded.evidence_domain,
                confidence = excluded.confidence,
                checked = excluded.checked,
                check_reason = excluded.check_reason,
                flags = excluded.flags,
                updated_at = excluded.updated_at",
        )
        .map_err(to_storage_err)?;
    stmt.execute(params![
        edge.source,
        edge.target,
        edge.relation.as_str(),
        version,
        concept,
        edge.id,
        edge.explanation,
        edge.evidence.title,
        edge.evidence.snippet,
        edge.evidence.url,
        edge.evidence.domain,
        edge.confidence.value(),
        edge.checked,
        edge.check_reason,
        flags,
        updated_at,
    ])
    .map_err(to_storage_err)?;
    Ok(())
}

/// Every relationship of one (concept, version) slice, in key order.
/// Unknown relation strings read back as `related_to`.
pub fn relations_in_slice(
    conn: &Connection,
    concept: &str,
    version: &str,
) -> Result<Vec<Edge>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT source, target, relation, edge_id, explanation,
                    evidence_title, evidence_snippet, evidence_url, evidence_domain,
                    confidence, checked, check_reason, flags
             FROM relationships
             WHERE concept = ?1 AND version = ?2
             ORDER BY source, target, relation",
        )
        .map_err(to_storage_err)?;
    let rows = stmt
        .query_map(params![concept, version], row_to_raw)
        .map_err(to_storage_err)?;

    let mut edges = Vec::new();
    for row in rows {
        let raw = row.map_err(to_storage_err)?;
        edges.push(raw.into_edge()?);
    }
    Ok(edges)
}

pub fn count_relations(conn: &Connection) -> Result<usize, StorageError> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM relationships", [], |row| row.get(0))
        .map_err(to_storage_err)?;
    Ok(count as usize)
}

/// Row as stored, before relation coercion and flag decoding.
struct RawRelation {
    source: String,
    target: String,
    relation: String,
    edge_id: String,
    explanation: String,
    evidence: Evidence,
    confidence: Option<f64>,
    checked: Option<bool>,
    check_reason: Option<String>,
    flags: String,
}

impl RawRelation {
    fn into_edge(self) -> Result<Edge, StorageError> {
        let flags: BTreeSet<String> =
            serde_json::from_str(&self.flags).map_err(|e| StorageError::MalformedRow {
                details: format!("relationship {} flags: {e}", self.edge_id),
            })?;
        Ok(Edge {
            id: self.edge_id,
            source: self.source,
            target: self.target,
            relation: Relation::Known(Relation::parse(&self.relation).coerced()),
            explanation: self.explanation,
            evidence: self.evidence,
            confidence: Confidence::new(self.confidence.unwrap_or(DEFAULT_EDGE_CONFIDENCE)),
            checked: self.checked.unwrap_or(false),
            check_reason: self.check_reason,
            flags,
        })
    }
}

fn row_to_raw(row: &Row<'_>) -> rusqlite::Result<RawRelation> {
    Ok(RawRelation {
        source: row.get(0)?,
        target: row.get(1)?,
        relation: row.get(2)?,
        edge_id: row.get(3)?,
        explanation: row.get(4)?,
        evidence: Evidence {
            title: row.get(5)?,
            snippet: row.get(6)?,
            url: row.get(7)?,
            domain: row.get(8)?,
        },
        confidence: row.get(9)?,
        checked: row.get(10)?,
        check_reason: row.get(11)?,
        flags: row.get(12)?,
    })
}
