//! Unit tests for config module
//!
//! Tests settings types, defaults and TOML parsing.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::{fs, path::Path};

use tempfile::TempDir;

use crate::{
    ConfctlError,
    config::{LogLevel, Settings, StorageLayout},
};

#[test]
fn settings_default() {
    let settings = Settings::default();

    assert_eq!(settings.general.log_level, LogLevel::Warn);
    assert!(!settings.general.simulate);
    assert!(!settings.general.log_to_file);
    assert_eq!(settings.storage.active, Path::new("config/active"));
}

#[test]
fn settings_empty_toml() {
    let settings = Settings::parse("", None).unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn settings_partial_toml_keeps_other_defaults() {
    let settings = Settings::parse(
        r#"
        [general]
        simulate = true

        [storage]
        active = "/srv/site/active"
    "#,
        None,
    )
    .unwrap();

    assert!(settings.general.simulate);
    assert_eq!(settings.general.log_level, LogLevel::Warn);
    assert_eq!(settings.storage.active, Path::new("/srv/site/active"));
    assert_eq!(
        settings.storage.overrides.as_deref(),
        Some(Path::new("config/overrides.yml"))
    );
}

#[test]
fn settings_serialize_roundtrip() {
    let original = Settings::default();

    let toml_str = toml::to_string(&original).unwrap();
    let parsed = Settings::parse(&toml_str, None).unwrap();

    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[storage]"));
    assert_eq!(parsed, original);
}

#[test]
fn settings_invalid_log_level() {
    let result = Settings::parse("[general]\nlog_level = \"loud\"\n", None);

    assert!(matches!(result, Err(ConfctlError::TomlParseError { .. })));
}

#[test]
fn settings_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("confctl.toml");
    fs::write(&path, "[general]\nlog_level = \"debug\"\n").unwrap();

    let settings = Settings::load(Some(&path)).unwrap();

    assert_eq!(settings.general.log_level, LogLevel::Debug);
}

#[test]
fn settings_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();

    let result = Settings::load(Some(&dir.path().join("missing.toml")));

    assert!(matches!(result, Err(ConfctlError::IoError { .. })));
}

#[test]
fn storage_resolves_relative_paths_against_root() {
    let settings = Settings::default();

    let layout = settings.storage.resolve(Path::new("/srv/site"));

    assert_eq!(
        layout,
        StorageLayout {
            active: "/srv/site/config/active".into(),
            sync: Some("/srv/site/config/sync".into()),
            overrides: Some("/srv/site/config/overrides.yml".into()),
        }
    );
}

#[test]
fn storage_keeps_absolute_paths() {
    let settings = Settings::parse("[storage]\nactive = \"/data/active\"\n", None).unwrap();

    let layout = settings.storage.resolve(Path::new("/srv/site"));

    assert_eq!(layout.active, Path::new("/data/active"));
}

#[test]
fn log_level_raised_saturates() {
    assert_eq!(LogLevel::Warn.raised(0), LogLevel::Warn);
    assert_eq!(LogLevel::Warn.raised(1), LogLevel::Info);
    assert_eq!(LogLevel::Warn.raised(2), LogLevel::Debug);
    assert_eq!(LogLevel::Warn.raised(9), LogLevel::Trace);
}

#[test]
fn log_level_display_matches_serde_names() {
    for level in [LogLevel::Error, LogLevel::Info, LogLevel::Trace] {
        let parsed = Settings::parse(&format!("[general]\nlog_level = \"{level}\"\n"), None)
            .unwrap();
        assert_eq!(parsed.general.log_level, level);
    }
}
