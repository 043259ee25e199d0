//! Integration tests for loading normalizer configuration from disk

use std::fs;

use lotnorm::prelude::*;
use tempfile::TempDir;

#[test]
fn test_config_file_drives_extraction() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lotnorm.json");
    fs::write(
        &path,
        r#"{ "separators": { "prefix": "/", "extension": "_" }, "index_language": "en" }"#,
    )?;

    let config = NormalizerConfig::from_file(&path)?;
    let normalizer = TextNormalizer::new(config)?;

    let result = normalizer.extract_lot_numbers("Lot AB/100_C and AB-5");
    assert_eq!(result.identifiers, vec!["AB/100_C", "5"]);
    assert_eq!(normalizer.filter("The AB-5"), "ab5");
    Ok(())
}

#[test]
fn test_empty_config_file_uses_defaults() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.json");
    fs::write(&path, "{}")?;

    let config = NormalizerConfig::from_file(&path)?;
    assert_eq!(config, NormalizerConfig::default());
    Ok(())
}

#[test]
fn test_malformed_config_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.json");
    fs::write(&path, "separators = '-'").unwrap();

    let err = NormalizerConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, LotnormError::Json(_)));
}

#[test]
fn test_config_round_trips_through_json() -> Result<()> {
    let config = NormalizerConfig::new(SeparatorConfig::new("#", "/")).with_index_language("fr");
    let json = serde_json::to_string(&config)?;
    assert_eq!(NormalizerConfig::from_json_str(&json)?, config);
    Ok(())
}
