//! File-backed stores: reopen survival, WAL mode, schema version.

use nexus_core::config::NexusConfig;
use nexus_core::traits::IGraphStore;
use nexus_storage::migrations::LATEST_VERSION;
use nexus_storage::pool::pragmas::verify_wal_mode;
use nexus_storage::pool::WriteConnection;
use nexus_storage::StorageEngine;
use test_fixtures::entropy_graph;

#[test]
fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("graph.db");

    {
        let store = StorageEngine::open(&db_path).unwrap();
        store.upsert(&entropy_graph()).unwrap();
    }

    let store = StorageEngine::open(&db_path).unwrap();
    let sub = store.query_subgraph("Entropy", 2, "v1").unwrap();
    assert_eq!(sub.nodes.len(), 4);
    assert_eq!(sub.edges.len(), 3);
}

#[test]
fn schema_is_migrated_once() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("graph.db");

    let store = StorageEngine::open(&db_path).unwrap();
    assert_eq!(store.schema_version().unwrap(), LATEST_VERSION);
    drop(store);

    let store = StorageEngine::open(&db_path).unwrap();
    assert_eq!(store.schema_version().unwrap(), LATEST_VERSION);
}

#[test]
fn writer_uses_wal() {
    let dir = tempfile::tempdir().unwrap();
    let writer = WriteConnection::open(&dir.path().join("wal.db"), 1_000).unwrap();
    assert!(writer.with_conn(verify_wal_mode).unwrap());
}

#[test]
fn from_config_opens_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = NexusConfig::default();
    config.storage.db_path = dir.path().join("configured.db");
    config.storage.read_pool_size = 2;

    let store = StorageEngine::from_config(&config).unwrap();
    assert_eq!(store.db_path(), Some(config.storage.db_path.as_path()));
    assert_eq!(store.root_domain(), "Core");
    assert!(config.storage.db_path.exists());
}

#[test]
fn newer_schema_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("future.db");
    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.pragma_update(None, "user_version", LATEST_VERSION + 1).unwrap();
    }
    assert!(StorageEngine::open(&db_path).is_err());
}

#[test]
fn file_store_opens_the_configured_read_pool() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("graph.db");

    let store = StorageEngine::open(&db_path).unwrap();
    assert_eq!(
        store.reader_count(),
        nexus_core::config::defaults::DEFAULT_READ_POOL_SIZE
    );
}
