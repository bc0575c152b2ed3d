//! StorageEngine: owns the ConnectionPool and implements IGraphStore.

use std::path::Path;

use nexus_core::config::defaults::DEFAULT_ROOT_DOMAIN;
use nexus_core::config::{NexusConfig, StorageConfig};
use nexus_core::constants::MAX_SUBGRAPH_DEPTH;
use nexus_core::errors::{NexusResult, StorageError};
use nexus_core::graph::{now_iso8601, Graph, Node};
use nexus_core::models::{Subgraph, UpsertReport};
use nexus_core::traits::IGraphStore;
use rusqlite::Connection;
use tracing::{debug, info, warn};

use crate::concept_key;
use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::relation_ops::{self, count_relations};
use crate::queries::vertex_ops::{self, count_vertices, VertexScope};
use crate::traversal::{reachable, IndexedGraph};

/// SQLite-backed graph store.
pub struct StorageEngine {
    pool: ConnectionPool,
    root_domain: String,
}

impl StorageEngine {
    /// Open a store backed by a file on disk with default settings.
    pub fn open(path: &Path) -> NexusResult<Self> {
        Self::open_with(path, &StorageConfig::default(), DEFAULT_ROOT_DOMAIN)
    }

    /// Open the database named by `config.storage.db_path`.
    pub fn from_config(config: &NexusConfig) -> NexusResult<Self> {
        Self::open_with(
            &config.storage.db_path,
            &config.storage,
            &config.pipeline.root_domain,
        )
    }

    pub fn open_with(path: &Path, storage: &StorageConfig, root_domain: &str) -> NexusResult<Self> {
        let pool = ConnectionPool::open(
            path,
            storage.read_pool_size,
            storage.busy_timeout_ms,
            initialize,
        )?;
        info!(path = %path.display(), readers = pool.reader_count(), "graph store opened");
        Ok(Self {
            pool,
            root_domain: root_domain.to_string(),
        })
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> NexusResult<Self> {
        let pool = ConnectionPool::open_in_memory(initialize)?;
        Ok(Self {
            pool,
            root_domain: DEFAULT_ROOT_DOMAIN.to_string(),
        })
    }

    pub fn with_root_domain(mut self, root_domain: impl Into<String>) -> Self {
        self.root_domain = root_domain.into();
        self
    }

    pub fn root_domain(&self) -> &str {
        &self.root_domain
    }

    pub fn db_path(&self) -> Option<&Path> {
        self.pool.db_path.as_deref()
    }

    pub fn schema_version(&self) -> NexusResult<u32> {
        Ok(self.with_reader(migrations::current_version)?)
    }

    /// (vertices, relationships) currently stored.
    pub fn counts(&self) -> NexusResult<(usize, usize)> {
        Ok(self.with_reader(|conn| Ok((count_vertices(conn)?, count_relations(conn)?)))?)
    }

    /// Read-only connections in use; zero for in-memory stores.
    pub fn reader_count(&self) -> usize {
        self.pool.reader_count()
    }

    fn with_reader<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        self.pool.with_reader(f)
    }
}

fn initialize(conn: &Connection) -> Result<(), StorageError> {
    let version = migrations::run_migrations(conn)?;
    debug!(version, "schema ready");
    Ok(())
}

impl IGraphStore for StorageEngine {
    fn upsert(&self, graph: &Graph) -> NexusResult<UpsertReport> {
        let concept = concept_key(&graph.concept);
        let updated_at = now_iso8601();
        let scope = VertexScope {
            concept: &concept,
            version: graph.version(),
            updated_at: &updated_at,
        };

        let report = self.pool.writer.with_conn(|conn| {
            let mut report = UpsertReport::default();
            for node in &graph.nodes {
                let is_root = node.is_root_for(&graph.concept, &self.root_domain);
                vertex_ops::upsert_vertex(conn, node, scope, is_root)?;
                report.nodes_written += 1;
            }

            for edge in &graph.edges {
                let endpoints_exist = vertex_ops::vertex_exists(conn, &edge.source)?
                    && vertex_ops::vertex_exists(conn, &edge.target)?;
                if !endpoints_exist {
                    warn!(edge = %edge.id, source = %edge.source, target = %edge.target,
                        "skipping edge with missing endpoint vertex");
                    report.edges_skipped.push(edge.id.clone());
                    continue;
                }
                relation_ops::upsert_relation(conn, edge, &concept, graph.version(), &updated_at)?;
                report.edges_written += 1;
            }
            Ok(report)
        })?;

        info!(
            concept = %graph.concept,
            version = %graph.version(),
            nodes = report.nodes_written,
            edges = report.edges_written,
            skipped = report.edges_skipped.len(),
            "graph upserted"
        );
        Ok(report)
    }

    fn get_node(&self, id: &str) -> NexusResult<Option<Node>> {
        Ok(self.with_reader(|conn| vertex_ops::get_vertex(conn, id))?)
    }

    fn query_subgraph(&self, concept: &str, depth: usize, version: &str) -> NexusResult<Subgraph> {
        let depth = depth.min(MAX_SUBGRAPH_DEPTH);
        let key = concept_key(concept);

        let subgraph = self.with_reader(|conn| {
            let roots = vertex_ops::find_roots(conn, &key, version)?;
            let Some(root) = roots.first() else {
                return Ok(Subgraph::empty(concept, version, depth));
            };
            if roots.len() > 1 {
                warn!(concept, version, count = roots.len(), chosen = %root.id,
                    "multiple root vertices; using smallest id");
            }

            // Relationships from other concepts are never followed.
            let relations = relation_ops::relations_in_slice(conn, &key, version)?;
            let reach = reachable(&IndexedGraph::from_edges(relations), &root.id, depth);

            let mut nodes = Vec::with_capacity(reach.vertex_ids.len());
            for id in &reach.vertex_ids {
                match vertex_ops::get_vertex(conn, id)? {
                    Some(node) => nodes.push(node),
                    None => warn!(vertex = %id, "relationship references a missing vertex"),
                }
            }

            Ok(Subgraph {
                concept: concept.to_string(),
                version: version.to_string(),
                depth,
                nodes,
                edges: reach.edges,
            })
        })?;

        debug!(
            concept,
            version,
            depth,
            nodes = subgraph.nodes.len(),
            edges = subgraph.edges.len(),
            "subgraph queried"
        );
        Ok(subgraph)
    }
}
