//! Vertex upsert and lookup.

use nexus_core::config::defaults::DEFAULT_NODE_CONFIDENCE;
use nexus_core::errors::StorageError;
use nexus_core::graph::{Confidence, Node};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::to_storage_err;

const VERTEX_COLUMNS: &str = "id, name, domain, definition, confidence";

/// Scope written alongside every vertex.
#[derive(Debug, Clone, Copy)]
pub struct VertexScope<'a> {
    /// Trimmed, lowercased concept.
    pub concept: &'a str,
    pub version: &'a str,
    pub updated_at: &'a str,
}

/// Merge a node into its vertex by id, overwriting every attribute.
pub fn upsert_vertex(
    conn: &Connection,
    node: &Node,
    scope: VertexScope<'_>,
    is_root: bool,
) -> Result<(), StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO concepts
                (id, name, domain, definition, confidence, origin_concept, version, is_root, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                domain = excluded.domain,
                definition = excluded.definition,
                confidence = excluded.confidence,
                origin_concept = excluded.origin_concept,
                version = excluded.version,
                is_root = excluded.is_root,
                updated_at = excluded.updated_at",
        )
        .map_err(to_storage_err)?;
    stmt.execute(params![
        node.id,
        node.name,
        node.domain,
        node.definition,
        node.confidence.value(),
        scope.concept,
        scope.version,
        is_root,
        scope.updated_at,
    ])
    .map_err(to_storage_err)?;
    Ok(())
}

pub fn get_vertex(conn: &Connection, id: &str) -> Result<Option<Node>, StorageError> {
    conn.query_row(
        &format!("SELECT {VERTEX_COLUMNS} FROM concepts WHERE id = ?1"),
        params![id],
        row_to_node,
    )
    .optional()
    .map_err(to_storage_err)
}

pub fn vertex_exists(conn: &Connection, id: &str) -> Result<bool, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT 1 FROM concepts WHERE id = ?1")
        .map_err(to_storage_err)?;
    stmt.exists(params![id]).map_err(to_storage_err)
}

/// Root vertices of a (concept, version) slice, ordered by id.
pub fn find_roots(
    conn: &Connection,
    concept: &str,
    version: &str,
) -> Result<Vec<Node>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {VERTEX_COLUMNS} FROM concepts
             WHERE origin_concept = ?1 AND version = ?2 AND is_root = 1
             ORDER BY id"
        ))
        .map_err(to_storage_err)?;
    let rows = stmt
        .query_map(params![concept, version], row_to_node)
        .map_err(to_storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

pub fn count_vertices(conn: &Connection) -> Result<usize, StorageError> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM concepts", [], |row| row.get(0))
        .map_err(to_storage_err)?;
    Ok(count as usize)
}

fn row_to_node(row: &Row<'_>) -> rusqlite::Result<Node> {
    let confidence: Option<f64> = row.get(4)?;
    Ok(Node {
        id: row.get(0)?,
        name: row.get(1)?,
        domain: row.get(2)?,
        definition: row.get(3)?,
        confidence: Confidence::new(confidence.unwrap_or(DEFAULT_NODE_CONFIDENCE)),
    })
}
