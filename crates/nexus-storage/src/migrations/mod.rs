//! Schema migrations, tracked with `PRAGMA user_version`.

pub mod v001_initial_schema;

use nexus_core::errors::StorageError;
use rusqlite::Connection;
use tracing::info;

use crate::to_storage_err;

/// Ordered (version, sql) pairs. Versions are contiguous from 1.
const MIGRATIONS: &[(u32, &str)] = &[(1, v001_initial_schema::MIGRATION_SQL)];

/// Highest schema version this build knows about.
pub const LATEST_VERSION: u32 = 1;

/// Current schema version of a database.
pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(to_storage_err)
}

/// Apply every migration newer than the database's `user_version`.
/// Each migration runs in its own transaction. Returns the resulting version.
pub fn run_migrations(conn: &Connection) -> Result<u32, StorageError> {
    let current = current_version(conn)?;
    if current > LATEST_VERSION {
        return Err(StorageError::MigrationFailed {
            version: current,
            reason: format!("database schema is newer than supported version {LATEST_VERSION}"),
        });
    }

    for &(version, sql) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        let batch = format!("BEGIN;\n{sql}\nPRAGMA user_version = {version};\nCOMMIT;");
        if let Err(e) = conn.execute_batch(&batch) {
            // Leave the database at the previous version.
            let _ = conn.execute_batch("ROLLBACK;");
            return Err(StorageError::MigrationFailed {
                version,
                reason: e.to_string(),
            });
        }
        info!(version, "applied schema migration");
    }

    current_version(conn)
}
