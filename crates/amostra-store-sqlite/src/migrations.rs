//! Database schema migrations for the sample store.

use amostra_store::RepositoryError;
use rusqlite::Connection;

/// Current schema version.
const SCHEMA_VERSION: u32 = 1;

/// Runs all pending migrations on the database.
pub fn run_migrations(conn: &Connection) -> Result<(), RepositoryError> {
    let current = get_schema_version(conn)?;

    if current < 1 {
        migrate_v1(conn)?;
    }

    set_schema_version(conn, SCHEMA_VERSION)?;
    Ok(())
}

/// Creates the initial schema (v1).
fn migrate_v1(conn: &Connection) -> Result<(), RepositoryError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS samples (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            categoria          TEXT NOT NULL,
            fabricante         TEXT NOT NULL,
            codigo             TEXT NOT NULL,
            pn_fabricante      TEXT NOT NULL DEFAULT '',
            pn_intelbras       TEXT NOT NULL DEFAULT '',
            sn                 TEXT NOT NULL DEFAULT '',
            tipo_amostra       TEXT NOT NULL DEFAULT '',
            status             TEXT NOT NULL DEFAULT 'Pending',
            localizacao        TEXT NOT NULL DEFAULT '',
            projeto_poc_evento TEXT NOT NULL DEFAULT '',
            responsavel        TEXT NOT NULL DEFAULT '',
            data_saida         DATE NOT NULL,
            data_retorno       DATE,
            observacoes        TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_samples_codigo ON samples(codigo);
        CREATE INDEX IF NOT EXISTS idx_samples_status ON samples(status);",
    )
    .map_err(|e| RepositoryError::Storage {
        message: format!("migration v1 failed: {e}"),
    })
}

/// Reads the current schema version from PRAGMA user_version.
fn get_schema_version(conn: &Connection) -> Result<u32, RepositoryError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to read schema version: {e}"),
        })
}

/// Sets the schema version via PRAGMA user_version.
fn set_schema_version(conn: &Connection, version: u32) -> Result<(), RepositoryError> {
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to set schema version: {e}"),
        })
}
