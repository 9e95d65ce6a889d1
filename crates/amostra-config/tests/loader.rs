//! Integration tests for the configuration loader.

use std::io::Write;

use amostra_config::load_config;

#[test]
fn defaults_when_no_file_given() {
    let config = load_config(None).expect("load");
    assert_eq!(config.store.database_path, "amostra.db");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let config = load_config(Some("/nonexistent/amostra.toml")).expect("load");
    assert_eq!(config.store.database_path, "amostra.db");
}

#[test]
fn file_overrides_defaults() {
    let dir = tempfile::tempdir().expect("tmp");
    let path = dir.path().join("amostra.toml");
    let mut file = std::fs::File::create(&path).expect("create");
    writeln!(
        file,
        "[store]\ndatabase_path = \"/var/lib/amostra/samples.db\"\n\n[logging]\nlevel = \"debug\""
    )
    .expect("write");

    let config = load_config(path.to_str()).expect("load");
    assert_eq!(config.store.database_path, "/var/lib/amostra/samples.db");
    assert_eq!(config.logging.level, "debug");
    // Untouched fields keep their defaults.
    assert_eq!(config.logging.format, "plain");
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().expect("tmp");
    let path = dir.path().join("amostra.toml");
    let mut file = std::fs::File::create(&path).expect("create");
    writeln!(file, "[logging]\nformat = \"json\"").expect("write");

    let config = load_config(path.to_str()).expect("load");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.store.database_path, "amostra.db");
}
