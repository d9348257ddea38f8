//! Tests for config file discovery and loading

#![allow(clippy::disallowed_methods)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use unbarrel::SpecifierStyle;
use unbarrel_config::{ConfigDiscovery, UnbarrelConfig};

#[test]
fn discovers_unbarrel_toml() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("unbarrel.toml"),
        r#"
barrels = ["src/components", "src/utils"]
specifier_style = "absolute"
exclude = ["generated"]
"#,
    )
    .unwrap();

    let discovery = ConfigDiscovery::new(dir.path());
    let found = discovery.find().unwrap();
    assert_eq!(found.file_name().unwrap(), "unbarrel.toml");

    let config = discovery.load().unwrap();
    assert_eq!(
        config.barrels,
        vec![PathBuf::from("src/components"), PathBuf::from("src/utils")]
    );
    assert_eq!(config.specifier_style, SpecifierStyle::Absolute);
    assert_eq!(config.exclude, vec!["generated".to_string()]);
    assert_eq!(
        config.include_extensions,
        UnbarrelConfig::default().include_extensions
    );
}

#[test]
fn discovers_package_json() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{
  "name": "test",
  "unbarrel": {
    "barrels": ["src/components"],
    "includeExtensions": ["ts", "tsx"]
  }
}"#,
    )
    .unwrap();

    let discovery = ConfigDiscovery::new(dir.path());
    let found = discovery.find().unwrap();
    assert_eq!(found.file_name().unwrap(), "package.json");

    let config = discovery.load().unwrap();
    assert_eq!(config.barrels, vec![PathBuf::from("src/components")]);
    assert_eq!(config.include_extensions, vec!["ts", "tsx"]);
}

#[test]
fn toml_takes_precedence_over_package_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("unbarrel.toml"), "barrels = [\"from-toml\"]\n").unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{ "unbarrel": { "barrels": ["from-package"] } }"#,
    )
    .unwrap();

    let config = ConfigDiscovery::new(dir.path()).load().unwrap();
    assert_eq!(config.barrels, vec![PathBuf::from("from-toml")]);
}

#[test]
fn null_package_json_field_is_not_a_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), r#"{ "unbarrel": null }"#).unwrap();

    assert!(ConfigDiscovery::new(dir.path()).find().is_none());
}

#[test]
fn load_from_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "barrels = [\"lib\"]\nroot = \"packages/app\"\n").unwrap();

    let config = ConfigDiscovery::load_from(&path).unwrap();
    assert_eq!(config.root, Some(PathBuf::from("packages/app")));
    assert_eq!(
        config.barrel_dirs(dir.path()),
        vec![dir.path().join("packages/app/lib")]
    );
}
