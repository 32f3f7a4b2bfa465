//! Tests for the layered Weft configuration.

use weft_core::config::WeftConfig;
use weft_core::errors::ConfigError;

#[test]
fn defaults_resolve_to_documented_values() {
    let config = WeftConfig::default();
    assert_eq!(config.engine.effective_timeout().as_millis(), 30_000);
    assert_eq!(config.engine.effective_queue_capacity(), 256);
    assert!(config.engine.effective_background());
    assert_eq!(config.analysis.effective_hub_multiplier(), 2.0);
    assert_eq!(config.analysis.effective_node_size_cap(), 1000.0);
    assert_eq!(config.analysis.effective_bridge_ratio(), 0.10);
}

#[test]
fn from_toml_overrides_only_named_fields() {
    let config = WeftConfig::from_toml(
        r#"
[engine]
default_timeout_ms = 5000

[analysis]
hub_multiplier = 3.5
"#,
    )
    .unwrap();

    assert_eq!(config.engine.effective_timeout().as_millis(), 5000);
    // Untouched fields keep their defaults.
    assert_eq!(config.engine.effective_queue_capacity(), 256);
    assert_eq!(config.analysis.effective_hub_multiplier(), 3.5);
    assert_eq!(config.analysis.effective_bridge_ratio(), 0.10);
}

#[test]
fn from_toml_rejects_invalid_syntax() {
    let result = WeftConfig::from_toml("engine = not valid toml {{");
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn project_config_layers_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("weft.toml"),
        "[engine]\nqueue_capacity = 64\n",
    )
    .unwrap();

    let config = WeftConfig::load(dir.path()).unwrap();
    assert_eq!(config.engine.effective_queue_capacity(), 64);
    assert_eq!(config.engine.effective_timeout().as_millis(), 30_000);
}

#[test]
fn load_without_any_config_files_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = WeftConfig::load(dir.path()).unwrap();
    assert_eq!(config.engine.effective_queue_capacity(), 256);
}

#[test]
fn malformed_project_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("weft.toml"), "[engine\nbroken").unwrap();

    let result = WeftConfig::load(dir.path());
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn validation_rejects_zero_timeout() {
    let result = WeftConfig::from_toml("[engine]\ndefault_timeout_ms = 0\n");
    assert!(matches!(
        result,
        Err(ConfigError::ValidationFailed { field, .. }) if field == "engine.default_timeout_ms"
    ));
}

#[test]
fn validation_rejects_out_of_range_bridge_ratio() {
    let result = WeftConfig::from_toml("[analysis]\nbridge_ratio = 1.5\n");
    assert!(matches!(
        result,
        Err(ConfigError::ValidationFailed { field, .. }) if field == "analysis.bridge_ratio"
    ));
}

#[test]
fn validation_rejects_non_positive_hub_multiplier() {
    let result = WeftConfig::from_toml("[analysis]\nhub_multiplier = 0.0\n");
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn toml_roundtrip_preserves_values() {
    let config = WeftConfig::from_toml(
        "[engine]\ndefault_timeout_ms = 1234\nbackground = false\n",
    )
    .unwrap();
    let rendered = config.to_toml().unwrap();
    let reparsed = WeftConfig::from_toml(&rendered).unwrap();
    assert_eq!(reparsed.engine.default_timeout_ms, Some(1234));
    assert_eq!(reparsed.engine.background, Some(false));
}
