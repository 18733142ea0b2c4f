/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use vocab_drill::app_config::{Config, LogLevel, ProviderConfig, ProviderKind};
use vocab_drill::render::FlashcardType;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.source_language, "auto");
    assert_eq!(config.target_language, "en");
    assert_eq!(config.vocab_file_path, "~/org/vocabulary.org");
    assert_eq!(config.flashcard_file_path, "~/org/drill.org");
    assert_eq!(config.default_flashcard_type, FlashcardType::TwoSided);
    assert_eq!(config.translation.provider, ProviderKind::Google);
    assert_eq!(config.log_level, LogLevel::Info);

    let ollama_config = config.translation.get_provider_config(&ProviderKind::Ollama)
        .expect("Ollama provider config should exist");
    assert_eq!(ollama_config.timeout_secs, 120);
    assert!(!ollama_config.model.is_empty());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Invalid source language
    config.source_language = "xyz".to_string();
    assert!(config.validate().is_err());
    config.source_language = "ru".to_string();
    assert!(config.validate().is_ok());

    // Auto is only accepted as a source
    config.target_language = "auto".to_string();
    assert!(config.validate().is_err());
    config.target_language = "en".to_string();

    // Both stores in the same file
    config.flashcard_file_path = config.vocab_file_path.clone();
    assert!(config.validate().is_err());
    config.flashcard_file_path = "~/org/drill.org".to_string();

    // Empty store path
    config.vocab_file_path = " ".to_string();
    assert!(config.validate().is_err());
}

/// Partial config files fall back to defaults
#[test]
fn test_config_deserialize_withPartialJson_shouldFillDefaults() -> Result<()> {
    let json = r#"{
        "target_language": "de",
        "default_flashcard_type": "simple_original_first",
        "translation": { "provider": "ollama" }
    }"#;

    let config: Config = serde_json::from_str(json)?;

    assert_eq!(config.source_language, "auto");
    assert_eq!(config.target_language, "de");
    assert_eq!(config.default_flashcard_type, FlashcardType::SimpleOriginalFirst);
    assert_eq!(config.translation.provider, ProviderKind::Ollama);
    assert!(config.translation.available_providers.is_empty());
    assert_eq!(config.translation.get_endpoint(), "http://localhost:11434");
    assert_eq!(config.translation.get_timeout_secs(), 30);
    Ok(())
}

/// Provider settings are read from the active provider entry
#[test]
fn test_translationConfig_withCustomProvider_shouldUseItsSettings() {
    let mut config = Config::default();
    config.translation.provider = ProviderKind::Ollama;
    config.translation.available_providers = vec![ProviderConfig {
        provider_type: "ollama".to_string(),
        model: "mistral".to_string(),
        endpoint: "http://gpu-box:11434".to_string(),
        timeout_secs: 15,
    }];

    assert_eq!(config.translation.get_model(), "mistral");
    assert_eq!(config.translation.get_endpoint(), "http://gpu-box:11434");
    assert_eq!(config.translation.get_timeout_secs(), 15);
}

/// A missing config file is created with defaults, then loaded as is
#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf").join("config.json");

    let created = Config::load_or_create(&path)?;
    assert!(path.exists());
    assert_eq!(created.target_language, "en");

    let mut edited = created.clone();
    edited.target_language = "fr".to_string();
    edited.save(&path)?;

    let loaded = Config::load_or_create(&path)?;
    assert_eq!(loaded.target_language, "fr");
    Ok(())
}

/// An unparseable config file is an error
#[test]
fn test_loadOrCreate_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "config.json", "{ not json")?;

    assert!(Config::load_or_create(&path).is_err());
    Ok(())
}

/// Home-relative store paths are expanded
#[test]
fn test_storePaths_withTilde_shouldExpandHome() {
    let config = Config::default();

    if let Some(home) = dirs::home_dir() {
        assert_eq!(config.vocab_path(), home.join("org").join("vocabulary.org"));
        assert_eq!(config.flashcard_path(), home.join("org").join("drill.org"));
    }
}

/// Provider kinds parse case-insensitively
#[test]
fn test_providerKind_fromStr_shouldParseKnownNames() {
    assert_eq!("Google".parse::<ProviderKind>().unwrap(), ProviderKind::Google);
    assert_eq!("text".parse::<ProviderKind>().unwrap(), ProviderKind::Text);
    assert!("openai".parse::<ProviderKind>().is_err());
}
