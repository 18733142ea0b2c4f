/*!
 * Lookup providers.
 *
 * A provider turns a word or phrase into a raw block of text made of
 * blank-line separated segments: the languages involved, the original text,
 * the translation, and any number of extra segments (suggestions,
 * dictionary alternatives). The block is normalized by [`crate::record`].
 *
 * - Google: public web translation endpoint
 * - Ollama: local LLM server
 * - Text: a raw block read from a file or stdin
 * - Mock: deterministic test double
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::app_config::{ProviderKind, TranslationConfig};
use crate::errors::ProviderError;
use crate::language_utils::{self, AUTO_DETECT};

/// Which way a lookup runs relative to the configured languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupDirection {
    /// Source language to target language
    Forward,
    /// Target language back to source language
    Reverse,
}

/// What to look up and between which languages
///
/// Language codes are kept trimmed and lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Word or phrase to translate
    pub text: String,
    /// Source language code, `auto` to let the provider detect it
    pub source_language: String,
    /// Target language code
    pub target_language: String,
}

impl LookupRequest {
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        let source_language: String = source_language.into();
        let target_language: String = target_language.into();
        Self {
            text: text.into(),
            source_language: language_utils::canonical_code(&source_language),
            target_language: language_utils::canonical_code(&target_language),
        }
    }

    /// Same text with source and target swapped
    ///
    /// An `auto` source cannot become a target, so the reversed request
    /// detects its source and translates into the original target's language.
    pub fn reversed(&self) -> Self {
        let (source_language, target_language) = if language_utils::is_auto_detect(&self.source_language) {
            (AUTO_DETECT.to_string(), self.target_language.clone())
        } else {
            (self.target_language.clone(), self.source_language.clone())
        };

        Self {
            text: self.text.clone(),
            source_language,
            target_language,
        }
    }

    /// Trimmed text, or `InputUnavailable` when there is nothing to look up
    pub fn require_text(&self) -> Result<&str, ProviderError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(ProviderError::InputUnavailable("no text to look up".to_string()));
        }
        Ok(text)
    }
}

/// Common trait for all lookup providers
///
/// Both calls return the raw segment block or fail; no retries are made.
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Short provider name for logs
    fn name(&self) -> &str;

    /// Look up `request` in its own direction
    async fn fetch(&self, request: &LookupRequest) -> Result<String, ProviderError>;

    /// Look up `request` with the languages swapped
    async fn fetch_reverse(&self, request: &LookupRequest) -> Result<String, ProviderError> {
        self.fetch(&request.reversed()).await
    }
}

/// Build the provider selected in `config`
///
/// `input` forces the text provider regardless of the configured kind.
pub fn from_config(
    config: &TranslationConfig,
    input: Option<text::TextSource>,
) -> Box<dyn TranslationProvider> {
    if let Some(source) = input {
        return Box::new(text::TextProvider::new(source));
    }

    match config.provider {
        ProviderKind::Google => Box::new(google::GoogleTranslate::new(
            config.get_endpoint(),
            config.get_timeout_secs(),
        )),
        ProviderKind::Ollama => Box::new(ollama::Ollama::new(
            config.get_endpoint(),
            config.get_model(),
            config.get_timeout_secs(),
        )),
        ProviderKind::Text => Box::new(text::TextProvider::new(text::TextSource::Stdin)),
    }
}

pub mod google;
pub mod mock;
pub mod ollama;
pub mod text;
