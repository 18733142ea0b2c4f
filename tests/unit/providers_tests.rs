/*!
 * Tests for the provider implementations
 */

use anyhow::Result;
use vocab_drill::app_config::{ProviderKind, TranslationConfig};
use vocab_drill::providers::mock::MockProvider;
use vocab_drill::providers::text::{TextProvider, TextSource};
use vocab_drill::providers::{self, LookupRequest, TranslationProvider};
use vocab_drill::ProviderError;
use crate::common;

/// Reversing a request swaps its languages
#[test]
fn test_lookupRequest_reversed_shouldSwapLanguages() {
    let request = LookupRequest::new("hello", "ru", "en");
    let reversed = request.reversed();

    assert_eq!(reversed.source_language, "en");
    assert_eq!(reversed.target_language, "ru");
    assert_eq!(reversed.text, "hello");
}

/// An auto-detect source stays a source when reversed
#[test]
fn test_lookupRequest_reversed_withAutoSource_shouldKeepDetection() {
    let reversed = LookupRequest::new("hello", "auto", "en").reversed();

    assert_eq!(reversed.source_language, "auto");
    assert_eq!(reversed.target_language, "en");
}

/// Language codes are canonicalized, so an upper-case auto source still detects
#[test]
fn test_lookupRequest_reversed_withUpperCaseAutoSource_shouldKeepDetection() {
    let request = LookupRequest::new("hello", " AUTO ", "EN");
    let reversed = request.reversed();

    assert_eq!((request.source_language.as_str(), request.target_language.as_str()), ("auto", "en"));
    assert_eq!((reversed.source_language.as_str(), reversed.target_language.as_str()), ("auto", "en"));
}

/// Blank lookup text is rejected
#[test]
fn test_lookupRequest_requireText_withBlankText_shouldFail() {
    let result = LookupRequest::new("   ", "ru", "en").require_text().map(str::to_string);

    assert!(matches!(result, Err(ProviderError::InputUnavailable(_))));
}

/// The text provider returns the file content for both directions
#[tokio::test]
async fn test_textProvider_withFile_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "lookup.txt", "ru -> en\n\nпривет\n\nhello\n")?;
    let provider = TextProvider::new(TextSource::File(path));
    let request = LookupRequest::new("", "auto", "en");

    assert_eq!(provider.fetch(&request).await?, "ru -> en\n\nпривет\n\nhello\n");
    assert_eq!(provider.fetch_reverse(&request).await?, "ru -> en\n\nпривет\n\nhello\n");
    Ok(())
}

/// A missing lookup file is a provider failure
#[tokio::test]
async fn test_textProvider_withMissingFile_shouldFail() {
    let provider = TextProvider::new(TextSource::File("/nonexistent/lookup.txt".into()));

    let result = provider.fetch(&LookupRequest::new("", "auto", "en")).await;

    assert!(matches!(result, Err(ProviderError::InputUnavailable(_))));
}

/// A whitespace-only lookup file is a provider failure
#[tokio::test]
async fn test_textProvider_withBlankFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "lookup.txt", "\n\n  \n")?;
    let provider = TextProvider::new(TextSource::File(path));

    let result = provider.fetch(&LookupRequest::new("", "auto", "en")).await;

    assert!(matches!(result, Err(ProviderError::InputUnavailable(_))));
    Ok(())
}

/// '-' selects stdin
#[test]
fn test_textSource_parse_shouldRecognizeStdin() {
    assert_eq!(TextSource::parse("-"), TextSource::Stdin);
    assert_eq!(TextSource::parse("a.txt"), TextSource::File("a.txt".into()));
}

/// Mock behaviors produce the expected results
#[tokio::test]
async fn test_mockProvider_behaviors_shouldMatchConfiguration() {
    let request = LookupRequest::new("привет", "ru", "en");

    assert_eq!(MockProvider::working("raw").fetch(&request).await.unwrap(), "raw");
    assert!(matches!(
        MockProvider::failing().fetch(&request).await,
        Err(ProviderError::ConnectionError(_))
    ));
    assert!(matches!(
        MockProvider::empty().fetch(&request).await,
        Err(ProviderError::NoTranslation(_))
    ));
}

/// The factory picks the configured provider, or the text provider for explicit input
#[test]
fn test_fromConfig_shouldSelectProvider() {
    let mut config = TranslationConfig::default();
    assert_eq!(providers::from_config(&config, None).name(), "google");

    config.provider = ProviderKind::Ollama;
    assert_eq!(providers::from_config(&config, None).name(), "ollama");

    let forced = providers::from_config(&config, Some(TextSource::Stdin));
    assert_eq!(forced.name(), "text");
}

/// Live lookup against the public endpoint
#[tokio::test]
#[ignore]
async fn test_googleTranslate_withNetwork_shouldTranslate() {
    let config = TranslationConfig::default();
    let provider = providers::from_config(&config, None);

    let raw = provider.fetch(&LookupRequest::new("привет", "ru", "en")).await.unwrap();

    assert!(raw.starts_with("Russian -> English\n\nпривет\n\n"));
}
