use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

use crate::errors::ProviderError;
use crate::providers::{LookupRequest, TranslationProvider};

/// Where a raw lookup block comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// A file holding the block
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl TextSource {
    /// `-` selects stdin, anything else is a path
    pub fn parse(value: &str) -> Self {
        if value == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

/// Provider that reads an already formatted lookup block
///
/// The block carries its own direction, so forward and reverse lookups
/// return the same text.
#[derive(Debug)]
pub struct TextProvider {
    source: TextSource,
}

impl TextProvider {
    pub fn new(source: TextSource) -> Self {
        Self { source }
    }

    async fn read(&self) -> Result<String, ProviderError> {
        let raw = match &self.source {
            TextSource::File(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
                ProviderError::InputUnavailable(format!("{}: {}", path.display(), e))
            })?,
            TextSource::Stdin => {
                let mut buffer = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut buffer)
                    .await
                    .map_err(|e| ProviderError::InputUnavailable(format!("stdin: {}", e)))?;
                buffer
            }
        };

        if raw.trim().is_empty() {
            return Err(ProviderError::InputUnavailable("lookup text is empty".to_string()));
        }
        Ok(raw)
    }
}

#[async_trait]
impl TranslationProvider for TextProvider {
    fn name(&self) -> &str {
        "text"
    }

    async fn fetch(&self, _request: &LookupRequest) -> Result<String, ProviderError> {
        self.read().await
    }

    async fn fetch_reverse(&self, _request: &LookupRequest) -> Result<String, ProviderError> {
        self.read().await
    }
}
