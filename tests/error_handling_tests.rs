use std::fs;
use tempfile::TempDir;
use tailwind_catalog::catalog;
use tailwind_catalog::{try_responsive, CatalogConfig, CatalogError, CatalogManifest};

#[test]
fn test_helpful_message_for_unknown_utility() {
    let err = catalog::resolve("Typography.FontSize.HUGE").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("HUGE"), "message should name the utility: {}", msg);
    assert!(msg.contains("Typography.FontSize"), "message should name the category: {}", msg);
}

#[test]
fn test_helpful_message_for_unknown_breakpoint() {
    let msg = try_responsive("tablet", "flex").unwrap_err().to_string();
    assert!(msg.contains("tablet"));
    assert!(msg.contains("2xl"), "message should list valid prefixes: {}", msg);
}

#[test]
fn test_error_for_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.yaml");

    match CatalogConfig::from_file(&path) {
        Err(CatalogError::ConfigError { message }) => {
            assert!(message.contains("missing.yaml"), "{}", message);
        }
        other => panic!("expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_error_for_malformed_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.json");
    fs::write(&path, r#"{ "categories": { "include": "Layout" "#).unwrap();

    let err = CatalogConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse JSON config"), "{}", err);
}

#[test]
fn test_manifest_from_config_with_bad_category() {
    let mut config = CatalogConfig::default();
    config.categories.include.push("Colors.Primary".to_string());

    assert!(matches!(
        CatalogManifest::from_config(&config),
        Err(CatalogError::UnknownCategory(path)) if path == "Colors.Primary"
    ));
}
