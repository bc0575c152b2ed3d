//! Connection management: one serialized writer plus a read pool for
//! file-backed databases.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use nexus_core::errors::StorageError;
use rusqlite::Connection;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// Manages the single write connection and the read connection pool.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    /// `None` for in-memory databases, where another connection would open a
    /// separate empty database.
    pub readers: Option<ReadPool>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open the writer first so the file and its WAL exist before the
    /// read-only connections attach. Migrations run before readers open.
    pub fn open(
        path: &Path,
        read_pool_size: usize,
        busy_timeout_ms: u64,
        init: impl FnOnce(&Connection) -> Result<(), StorageError>,
    ) -> Result<Self, StorageError> {
        let writer = WriteConnection::open(path, busy_timeout_ms)?;
        writer.with_conn(init)?;
        let readers = ReadPool::open(path, read_pool_size, busy_timeout_ms)?;
        Ok(Self {
            writer,
            readers: Some(readers),
            db_path: Some(path.to_path_buf()),
        })
    }

    /// In-memory pool with the writer only.
    pub fn open_in_memory(
        init: impl FnOnce(&Connection) -> Result<(), StorageError>,
    ) -> Result<Self, StorageError> {
        let writer = WriteConnection::open_in_memory()?;
        writer.with_conn(init)?;
        Ok(Self {
            writer,
            readers: None,
            db_path: None,
        })
    }

    /// Run `f` on a reader, or on the writer when there is no read pool.
    pub fn with_reader<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        match &self.readers {
            Some(readers) => readers.with_conn(f),
            None => self.writer.with_conn(f),
        }
    }

    /// Number of read-only connections.
    pub fn reader_count(&self) -> usize {
        self.readers.as_ref().map_or(0, ReadPool::size)
    }
}
