//! V001: concepts (vertices) and relationships.

pub const MIGRATION_SQL: &str = r#"
-- Vertices are keyed by node id alone; every upsert overwrites attributes.
-- origin_concept holds the trimmed, lowercased concept of the last writer.
CREATE TABLE IF NOT EXISTS concepts (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    domain TEXT NOT NULL,
    definition TEXT,
    confidence REAL,
    origin_concept TEXT NOT NULL,
    version TEXT NOT NULL,
    is_root INTEGER NOT NULL DEFAULT 0,
    updated_at TEXT NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_concepts_root
    ON concepts(origin_concept, version) WHERE is_root = 1;

-- One row per (source, target, relation) within a (concept, version) slice.
CREATE TABLE IF NOT EXISTS relationships (
    source TEXT NOT NULL,
    target TEXT NOT NULL,
    relation TEXT NOT NULL,
    version TEXT NOT NULL,
    concept TEXT NOT NULL,
    edge_id TEXT NOT NULL,
    explanation TEXT NOT NULL DEFAULT '',
    evidence_title TEXT NOT NULL DEFAULT '',
    evidence_snippet TEXT NOT NULL DEFAULT '',
    evidence_url TEXT,
    evidence_domain TEXT,
    confidence REAL,
    checked INTEGER,
    check_reason TEXT,
    flags TEXT NOT NULL DEFAULT '[]',
    updated_at TEXT NOT NULL,
    PRIMARY KEY (source, target, relation, version, concept)
) STRICT;

CREATE INDEX IF NOT EXISTS idx_relationships_slice
    ON relationships(concept, version, source);
"#;
