use std::fs;
use tempfile::TempDir;
use class_variants::{Variants, VariantConfig, VariantError};

#[test]
fn test_error_message_for_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nowhere.yaml");

    let err = VariantConfig::from_file(&missing).unwrap_err();
    let error_msg = format!("{}", err);
    assert!(error_msg.contains("Failed to read config file"),
            "Error should say the file could not be read: {}", error_msg);
    assert!(error_msg.contains("nowhere.yaml"),
            "Error should contain the file path: {}", error_msg);
}

#[test]
fn test_error_message_for_malformed_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, r#"{"base": "btn", "variant": "#).unwrap();

    let err = VariantConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, VariantError::Json(_)));
    assert!(err.to_string().contains("JSON parsing error"));
}

#[test]
fn test_wrong_group_shape_is_rejected_at_parse_time() {
    // Groups must be maps; a bare string is not a variant group
    let err = VariantConfig::from_yaml_str("variant: btn-primary").unwrap_err();
    assert!(matches!(err, VariantError::Yaml(_)));
    assert!(err.to_string().contains("YAML parsing error"));
}

#[test]
fn test_missing_default_only_fails_in_strict_mode() {
    let config = VariantConfig::from_yaml_str("base: x\nvariant:\n  a: y\n").unwrap();

    assert_eq!(Variants::new(config.clone()).resolve(None), "x");
    match Variants::try_new(config) {
        Err(VariantError::MissingDefault { group }) => assert_eq!(group, "variant"),
        other => panic!("Expected MissingDefault, got {:?}", other),
    }
}
