//! Stable identifiers.

use crate::constants::EDGE_ID_LEN;

/// Derive an edge id from its identity triple.
///
/// The id is the first 12 hex characters of BLAKE3 over `source|relation|target`,
/// so the same triple yields the same id in every run.
pub fn edge_id(source: &str, relation: &str, target: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(source.as_bytes());
    hasher.update(b"|");
    hasher.update(relation.as_bytes());
    hasher.update(b"|");
    hasher.update(target.as_bytes());
    let hex = hasher.finalize().to_hex();
    hex.as_str()[..EDGE_ID_LEN].to_string()
}
