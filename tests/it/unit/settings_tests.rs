//! Unit tests for settings module.

use draglist::{ConfigError, GesturePlatform, ListConfig, Orientation};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("list.json");
    fs::write(
        &path,
        r#"{ "orientation": "horizontal", "platform": "ios", "long_press_delay_ms": 400 }"#,
    )
    .unwrap();

    let config = ListConfig::load(&path).unwrap();
    assert_eq!(config.orientation, Orientation::Horizontal);
    assert_eq!(config.platform, GesturePlatform::Ios);
    assert_eq!(config.long_press_delay(), Duration::from_millis(400));
    assert_eq!(config.measure_debounce(), Duration::from_millis(100));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = ListConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_zero_long_press_rejected() {
    let err = ListConfig::from_json_str(r#"{ "long_press_delay_ms": 0 }"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid value for `long_press_delay_ms`: must be greater than zero"
    );
}

#[test]
fn snapshot_default_config() {
    let json = serde_json::to_string(&ListConfig::default()).unwrap();
    insta::assert_snapshot!(json, @r#"{"orientation":"vertical","platform":"android","long_press_delay_ms":700,"measure_debounce_ms":null,"edge_margin":4.0,"animated_scroll":true}"#);
}
