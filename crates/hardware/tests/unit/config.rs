//! # Configuration Tests

use std::io::Write;

use emu8_core::EmuError;
use emu8_core::config::Config;
use emu8_core::sim::loader::ImageLayout;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.max_steps, None);
    assert_eq!(config.image.layout, ImageLayout::ProgramHalf);
}

#[test]
fn test_empty_document_uses_defaults() {
    assert_eq!(Config::from_json_str("{}").unwrap(), Config::default());
}

#[test]
fn test_partial_document() {
    let config = Config::from_json_str(r#"{ "general": { "max_steps": 500 } }"#).unwrap();
    assert_eq!(config.general.max_steps, Some(500));
    assert!(!config.general.trace_instructions);
    assert_eq!(config.image.layout, ImageLayout::ProgramHalf);
}

#[test]
fn test_full_document() {
    let json = r#"{
        "general": { "trace_instructions": true, "max_steps": null },
        "image": { "layout": "flat" }
    }"#;
    let config = Config::from_json_str(json).unwrap();
    assert!(config.general.trace_instructions);
    assert_eq!(config.general.max_steps, None);
    assert_eq!(config.image.layout, ImageLayout::Flat);
}

#[test]
fn test_wrong_type_is_rejected() {
    assert!(Config::from_json_str(r#"{ "general": { "max_steps": "lots" } }"#).is_err());
    assert!(Config::from_json_str(r#"{ "image": { "layout": 3 } }"#).is_err());
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "image": { "layout": "program-half" }, "general": { "max_steps": 7 } }"#)
        .unwrap();
    file.flush().unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.general.max_steps, Some(7));
}

#[test]
fn test_from_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    assert!(matches!(
        Config::from_file(&missing),
        Err(EmuError::ConfigRead { .. })
    ));

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();
    file.flush().unwrap();
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, EmuError::Config { .. }));
    assert!(err.to_string().contains("invalid configuration"));
}
