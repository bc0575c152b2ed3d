//! The single serialized write connection.

use std::path::Path;
use std::sync::Mutex;

use nexus_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use nexus_core::errors::StorageError;
use rusqlite::Connection;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// All writes go through this connection, one at a time.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, busy_timeout_ms: u64) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(to_storage_err)?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(to_storage_err)?;
        apply_pragmas(&conn, DEFAULT_BUSY_TIMEOUT_MS)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` while holding the write lock.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let guard = self.conn.lock().map_err(|_| StorageError::LockPoisoned {
            role: "writer".to_string(),
        })?;
        f(&guard)
    }
}
