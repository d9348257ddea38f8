//! Tests for configuration validation.

#![allow(clippy::disallowed_methods)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use unbarrel_config::{ConfigError, UnbarrelConfig, validate_fs, validate_schema};

fn config_with(barrels: &[&str]) -> UnbarrelConfig {
    UnbarrelConfig {
        barrels: barrels.iter().map(PathBuf::from).collect(),
        ..Default::default()
    }
}

#[test]
fn schema_requires_barrels() {
    let err = validate_schema(&UnbarrelConfig::default()).unwrap_err();
    assert!(matches!(err, ConfigError::NoBarrels));
    assert!(err.hint().is_some());
}

#[test]
fn schema_rejects_unknown_extensions() {
    let mut config = config_with(&["src/components"]);
    config.include_extensions = vec![".ts".to_string()];

    let err = validate_schema(&config).unwrap_err();
    match err {
        ConfigError::SchemaValidation { message, hint } => {
            assert!(message.contains(".ts"));
            assert!(hint.unwrap().contains("without a leading dot"));
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn schema_rejects_absolute_barrel_outside_root() {
    let outside = if cfg!(windows) { "C:\\elsewhere" } else { "/elsewhere" };
    let config = config_with(&[outside]);

    assert!(matches!(
        validate_schema(&config).unwrap_err(),
        ConfigError::SchemaValidation { .. }
    ));
}

#[test]
fn fs_catches_missing_barrel() {
    let dir = TempDir::new().expect("tempdir");
    let config = config_with(&["src/missing"]);

    match validate_fs(&config, dir.path()).unwrap_err() {
        ConfigError::BarrelNotFound { path } => assert!(path.ends_with("src/missing")),
        other => panic!("expected BarrelNotFound, got {other:?}"),
    }
}

#[test]
fn fs_catches_file_barrel() {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/index.ts"), "").unwrap();
    let config = config_with(&["src/index.ts"]);

    assert!(matches!(
        validate_fs(&config, dir.path()).unwrap_err(),
        ConfigError::BarrelNotDirectory { .. }
    ));
}

#[test]
fn fs_succeeds_when_barrels_exist() {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir_all(dir.path().join("src/components")).unwrap();

    validate_fs(&config_with(&["src/components"]), dir.path()).unwrap();
}
