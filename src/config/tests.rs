//! Tests for config functionality.

use crate::config::types::{default_empty_label, default_unnamed_label};
use crate::config::{CONFIG_FILE_NAME, Config, MarkerPatterns, MismatchPolicy};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.markers.is_empty());
    assert!(config.language_globs.is_empty());
    assert_eq!(config.labels.unnamed, "# region");
    assert_eq!(config.labels.empty, "No regions detected");
    assert_eq!(config.mismatch_policy, MismatchPolicy::Innermost);
    assert!(config.reveal_on_mismatch);
    assert_eq!(config.log_filter, "warn");
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    assert_eq!(config.labels.unnamed, default_unnamed_label());
    assert_eq!(config.labels.empty, default_empty_label());
    assert!(config.reveal_on_mismatch);
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
reveal_on_mismatch: false
labels:
  empty: "(nothing here)"
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert!(!config.reveal_on_mismatch);
    assert_eq!(config.labels.empty, "(nothing here)");
    // Sibling field inside the nested struct keeps its default
    assert_eq!(config.labels.unnamed, "# region");
    assert_eq!(config.mismatch_policy, MismatchPolicy::Innermost);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
markers:
  python:
    start: '^\s*#\s*region\b(?<name>.*)'
    end: '^\s*#\s*endregion\b'
language_globs:
  "*.pyw": python
labels:
  unnamed: "(unnamed)"
  empty: "(empty)"
mismatch_policy: all
reveal_on_mismatch: false
log_filter: debug
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(
        config.markers.get("python"),
        Some(&MarkerPatterns::new(
            r"^\s*#\s*region\b(?<name>.*)",
            r"^\s*#\s*endregion\b"
        ))
    );
    assert_eq!(
        config.language_globs.get("*.pyw").map(String::as_str),
        Some("python")
    );
    assert_eq!(config.labels.unnamed, "(unnamed)");
    assert_eq!(config.labels.empty, "(empty)");
    assert_eq!(config.mismatch_policy, MismatchPolicy::All);
    assert!(!config.reveal_on_mismatch);
    assert_eq!(config.log_filter, "debug");
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
reveal_on_mismatch: false
some_future_option: 42
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert!(!config.reveal_on_mismatch);
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let err = Config::from_yaml("markers: [not, a, map]").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_validate_rejects_empty_labels() {
    let yaml = r#"
labels:
  unnamed: "   "
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("labels.unnamed"));

    let yaml = r#"
labels:
  empty: ""
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("labels.empty"));
}

#[test]
fn test_validate_rejects_half_marker_pair() {
    let yaml = r#"
markers:
  lua:
    start: '^\s*--\s*#region\b(?<name>.*)'
    end: ''
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("markers.lua"));
}

#[test]
fn test_validate_rejects_glob_without_language() {
    let yaml = r#"
language_globs:
  "*.foo": ""
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("*.foo"));
}

#[test]
fn test_yaml_roundtrip_keeps_values() {
    let mut config = Config::default();
    config.mismatch_policy = MismatchPolicy::All;
    config
        .markers
        .insert("sql".to_string(), MarkerPatterns::new("^--region", "^--endregion"));

    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();

    assert_eq!(parsed.mismatch_policy, MismatchPolicy::All);
    assert_eq!(parsed.markers, config.markers);
}

#[test]
fn test_load_missing_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::load(dir.path().join("nope.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_discover_walks_up_to_ancestor() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "mismatch_policy: all\n",
    )
    .unwrap();
    let nested = dir.path().join("src").join("deep");
    std::fs::create_dir_all(&nested).unwrap();

    let config = Config::discover(&nested).unwrap();
    assert_eq!(config.mismatch_policy, MismatchPolicy::All);
}

#[test]
fn test_discover_without_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::discover(dir.path()).unwrap();
    assert_eq!(config.mismatch_policy, MismatchPolicy::Innermost);
}
