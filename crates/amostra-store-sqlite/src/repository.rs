//! SQLite-backed sample repository: connection handling.

use std::sync::{Mutex, MutexGuard};

use amostra_store::RepositoryError;
use rusqlite::Connection;

use crate::migrations::run_migrations;

/// SQLite-backed sample repository.
///
/// Single-process, single-connection usage: the connection lives behind
/// a mutex for the lifetime of the process.
pub struct SqliteSampleRepository {
    conn: Mutex<Connection>,
}

impl SqliteSampleRepository {
    /// Opens or creates a SQLite database at the given path and ensures
    /// the schema exists. Safe to call on every startup.
    pub fn open(path: &str) -> Result<Self, RepositoryError> {
        let conn = Connection::open(path).map_err(|e| RepositoryError::Storage {
            message: e.to_string(),
        })?;
        run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Opens an in-memory database (tests and throwaway usage).
    pub fn open_in_memory() -> Result<Self, RepositoryError> {
        let conn = Connection::open_in_memory().map_err(|e| RepositoryError::Storage {
            message: e.to_string(),
        })?;
        run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Locks the connection, mapping poisoning to a storage error.
    pub(crate) fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, RepositoryError> {
        self.conn.lock().map_err(|e| RepositoryError::Storage {
            message: e.to_string(),
        })
    }
}
