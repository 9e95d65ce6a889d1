//! Shared helpers used across CLI commands.
//!
//! Centralises the repetitive pattern of opening the SQLite store and
//! creating a `SampleService`, ensuring consistent defaults everywhere.

use std::sync::Arc;

use amostra_config::AmostraConfig;
use amostra_service::SampleService;
use amostra_store::SampleRepository;
use amostra_store_sqlite::SqliteSampleRepository;

/// Resolves the database path: per-command `--db` flag first, then the
/// configured store path.
pub fn resolve_db_path(db: &Option<String>, config: &AmostraConfig) -> String {
    db.clone()
        .unwrap_or_else(|| config.store.database_path.clone())
}

/// Opens the SQLite sample store.
///
/// # Errors
///
/// Returns an error if the database file cannot be created or opened.
pub fn open_repository(
    db: &Option<String>,
    config: &AmostraConfig,
) -> anyhow::Result<Arc<dyn SampleRepository>> {
    let path = resolve_db_path(db, config);
    if let Some(parent) = std::path::Path::new(&path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let repo =
        SqliteSampleRepository::open(&path).map_err(|e| anyhow::anyhow!("store error: {e}"))?;
    Ok(Arc::new(repo))
}

/// Opens the store and wraps it in a `SampleService`.
pub fn open_service(db: &Option<String>, config: &AmostraConfig) -> anyhow::Result<SampleService> {
    let repo = open_repository(db, config)?;
    Ok(SampleService::new(repo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_flag_over_config() {
        let config = AmostraConfig::default();
        let path = resolve_db_path(&Some("/tmp/override.db".to_string()), &config);
        assert_eq!(path, "/tmp/override.db");
    }

    #[test]
    fn resolve_falls_back_to_config() {
        let config = AmostraConfig::default();
        let path = resolve_db_path(&None, &config);
        assert_eq!(path, "amostra.db");
    }

    #[test]
    fn open_repository_with_temp_path() {
        let dir = tempfile::tempdir().expect("tmp");
        let db = dir.path().join("test_shared.db");
        let path = db.to_str().expect("utf8").to_string();
        let repo = open_repository(&Some(path), &AmostraConfig::default());
        assert!(repo.is_ok());
    }

    #[test]
    fn open_service_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().expect("tmp");
        let db = dir.path().join("nested/deeper/samples.db");
        let path = db.to_str().expect("utf8").to_string();
        let service = open_service(&Some(path), &AmostraConfig::default());
        assert!(service.is_ok());
    }
}
