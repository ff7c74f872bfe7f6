//! Unit tests for config module
//!
//! Tests configuration defaults, parsing, validation and file loading.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;

use crate::MediatorError;
use crate::config::{Config, LogLevel};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.gate.restart_threshold_ms, 3000);
    assert_eq!(config.room_link.route_keyword, "listentogether");
    assert!(config.gate.is_listenable("track"));
    assert!(config.gate.is_listenable("episode"));
    assert!(!config.gate.is_listenable("album"));
}

#[test]
fn config_serialize_toml() {
    let toml_str = toml::to_string(&Config::default()).unwrap();

    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[gate]"));
    assert!(toml_str.contains("[room_link]"));
}

#[test]
fn config_empty_toml_uses_defaults() {
    let config = Config::from_toml_str("").unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn config_partial_sections_keep_other_defaults() {
    let config = Config::from_toml_str(
        r#"
        [general]
        log_level = "debug"

        [gate]
        restart_threshold_ms = 5000
    "#,
    )
    .unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.gate.restart_threshold_ms, 5000);
    assert_eq!(config.gate.listenable_kinds, vec!["track", "episode"]);
    assert_eq!(config.room_link.route_keyword, "listentogether");
}

#[test]
fn config_rejects_unknown_log_level() {
    let err = Config::from_toml_str(
        r#"
        [general]
        log_level = "loud"
    "#,
    )
    .unwrap_err();

    assert!(matches!(err, MediatorError::TomlParseError { .. }));
}

#[test]
fn config_rejects_empty_route_keyword() {
    let err = Config::from_toml_str(
        r#"
        [room_link]
        route_keyword = ""
    "#,
    )
    .unwrap_err();

    match err {
        MediatorError::InvalidConfigField { field, .. } => assert_eq!(field, "route_keyword"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_rejects_multi_segment_route_keyword() {
    let result = Config::from_toml_str(
        r#"
        [room_link]
        route_keyword = "listen/together"
    "#,
    );

    assert!(matches!(
        result,
        Err(MediatorError::InvalidConfigField { .. })
    ));
}

#[test]
fn config_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
        [room_link]
        route_keyword = "join"
    "#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.room_link.route_keyword, "join");
}

#[test]
fn config_load_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    match Config::load(&path).unwrap_err() {
        MediatorError::IoError { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_json_schema_lists_sections() {
    let schema = Config::json_schema().unwrap();

    assert!(schema.contains("restart_threshold_ms"));
    assert!(schema.contains("route_keyword"));
}
