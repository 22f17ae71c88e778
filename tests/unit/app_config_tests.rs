/*!
 * Tests for application configuration
 */

use std::str::FromStr;

use linguaweave::app_config::{Config, ExecutorKind};

#[test]
fn test_defaultConfig_shouldUseGeminiAndEnglishSource() {
    let config = Config::default();
    assert_eq!(config.source_language, "English");
    assert_eq!(config.executor.kind, ExecutorKind::Gemini);
    assert_eq!(config.executor.model, "gemini-2.0-flash");
    assert_eq!(config.executor.timeout_secs, 60);
}

#[test]
fn test_defaultConfig_withoutApiKey_shouldFailValidation() {
    let config = Config::default();
    assert!(config.validate().is_err());
}

#[test]
fn test_geminiConfig_withApiKey_shouldPassValidation() {
    let mut config = Config::default();
    config.executor.api_key = "test-key".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_mockConfig_shouldNotRequireApiKey() {
    let mut config = Config::default();
    config.executor.kind = ExecutorKind::Mock;
    assert!(config.validate().is_ok());
}

#[test]
fn test_zeroTimeout_shouldFailValidation() {
    let mut config = Config::default();
    config.executor.kind = ExecutorKind::Mock;
    config.executor.timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_malformedEndpoint_shouldFailValidation() {
    let mut config = Config::default();
    config.executor.kind = ExecutorKind::Mock;
    config.executor.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_executorKind_shouldParseFromString() {
    assert_eq!(ExecutorKind::from_str("gemini").unwrap(), ExecutorKind::Gemini);
    assert_eq!(ExecutorKind::from_str("MOCK").unwrap(), ExecutorKind::Mock);
    assert!(ExecutorKind::from_str("openai").is_err());
}

#[test]
fn test_executorKind_displayNames() {
    assert_eq!(ExecutorKind::Gemini.to_string(), "gemini");
    assert_eq!(ExecutorKind::Gemini.display_name(), "Gemini");
}

#[test]
fn test_config_shouldRoundTripThroughFile() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.executor.kind = ExecutorKind::Mock;
    config.source_language = "German".to_string();
    config.save_to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.source_language, "German");
    assert_eq!(loaded.executor.kind, ExecutorKind::Mock);
}

#[test]
fn test_partialConfigFile_shouldFillDefaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("conf.json");
    std::fs::write(&path, r#"{"executor": {"type": "mock"}}"#).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.executor.kind, ExecutorKind::Mock);
    assert_eq!(config.source_language, "English");
    assert_eq!(config.executor.timeout_secs, 60);
}
