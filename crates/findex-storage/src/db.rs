//! Database connection management and schema bootstrap.
//!
//! Wraps a single rusqlite Connection in a Mutex for exclusive access.
//! The schema is three untyped text columns with no primary key, no
//! uniqueness and no indexes; duplicate records are permitted.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;
use tracing::info;

use findex_core::error::{FindexError, Result};

/// SQLite-backed record store.
///
/// The connection is wrapped in a Mutex since rusqlite Connection is not
/// Sync. Each CLI invocation opens one store, runs at most one query, and
/// closes it on drop.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) the store at the given path.
    ///
    /// Bootstraps the schema with `CREATE TABLE IF NOT EXISTS` — idempotent,
    /// never resets an existing store.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)
            .map_err(|e| FindexError::Storage(format!("Failed to open store: {}", e)))?;

        let db = Self {
            conn: Mutex::new(conn),
        };
        db.bootstrap()?;

        info!("Store opened at {}", path.display());
        Ok(db)
    }

    /// Open an in-memory store (for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| FindexError::Storage(format!("Failed to open in-memory store: {}", e)))?;

        let db = Self {
            conn: Mutex::new(conn),
        };
        db.bootstrap()?;
        Ok(db)
    }

    fn bootstrap(&self) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS files (
                    name TEXT,
                    size TEXT,
                    date TEXT
                );",
            )
            .map_err(|e| FindexError::Storage(format!("Failed to bootstrap schema: {}", e)))
        })
    }

    /// Execute a closure with a reference to the underlying connection.
    ///
    /// This is the primary way to interact with the store. The mutex is held
    /// for the duration of the closure.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| FindexError::Storage(format!("Store lock poisoned: {}", e)))?;
        f(&conn)
    }

    /// Number of records currently in the store.
    pub fn record_count(&self) -> Result<u64> {
        self.with_conn(|conn| {
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM files", [], |row| row.get(0))
                .map_err(|e| FindexError::Storage(e.to_string()))?;
            Ok(count as u64)
        })
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish()
    }
}
