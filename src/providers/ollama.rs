use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ProviderError;
use crate::language_utils;
use crate::providers::{LookupRequest, TranslationProvider};

/// Default Ollama server
pub const DEFAULT_OLLAMA_ENDPOINT: &str = "http://localhost:11434";

/// System prompt asking the model for the blank-line separated lookup layout
const LOOKUP_SYSTEM_PROMPT: &str = "You are a bilingual dictionary. Answer with plain text blocks separated by one empty line and nothing else:
1. the language pair as '<Source language> -> <Target language>'
2. the original text exactly as given
3. the best translation
4. optionally, alternative translations or a spelling suggestion.";

/// Ollama client for dictionary-style lookups
#[derive(Debug)]
pub struct Ollama {
    /// Base URL of the Ollama API
    base_url: String,
    /// Model name
    model: String,
    /// HTTP client for making requests
    client: Client,
}

/// Generate request for the Ollama API
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Model name to use for generation
    model: String,
    /// Prompt to generate from
    prompt: String,
    /// System message to guide the model
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    /// Additional model parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<GenerationOptions>,
    /// Whether to stream the response
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
}

/// Generation options for the Ollama API
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Generation response from the Ollama API
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Model name
    pub model: String,
    /// Generated text
    pub response: String,
    /// Whether the generation is complete
    pub done: bool,
}

impl GenerationRequest {
    /// Create a new non-streaming generation request
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            system: None,
            options: None,
            stream: Some(false),
        }
    }

    /// Set the system prompt
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.options = Some(GenerationOptions {
            temperature: Some(temperature),
        });
        self
    }
}

impl Ollama {
    /// Create a new client; an empty endpoint selects the local default
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, timeout_secs: u64) -> Self {
        let endpoint = endpoint.into();
        let base_url = if endpoint.is_empty() {
            DEFAULT_OLLAMA_ENDPOINT.to_string()
        } else if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint
        } else {
            format!("http://{}", endpoint)
        };

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .http1_only()
                .build()
                .unwrap_or_default(),
        }
    }

    /// Build the generation request for a lookup
    pub fn lookup_request(&self, request: &LookupRequest) -> Result<GenerationRequest, ProviderError> {
        let text = request.require_text()?;
        let source = if language_utils::is_auto_detect(&request.source_language) {
            "the detected language".to_string()
        } else {
            language_utils::display_name(&request.source_language)
        };
        let prompt = format!(
            "Translate from {} to {}:\n{}",
            source,
            language_utils::display_name(&request.target_language),
            text
        );

        Ok(GenerationRequest::new(&self.model, prompt)
            .system(LOOKUP_SYSTEM_PROMPT)
            .temperature(0.1))
    }

    /// Send a generation request
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, ProviderError> {
        let url = format!("{}/api/generate", self.base_url);

        let response = self.client.post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(format!("Failed to reach Ollama at {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Ollama API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response.json::<GenerationResponse>().await
            .map_err(|e| ProviderError::ParseError(format!("Failed to parse Ollama response: {}", e)))
    }
}

#[async_trait]
impl TranslationProvider for Ollama {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn fetch(&self, request: &LookupRequest) -> Result<String, ProviderError> {
        let generation = self.lookup_request(request)?;
        let response = self.generate(&generation).await?;

        let raw = response.response.trim();
        if raw.is_empty() {
            return Err(ProviderError::NoTranslation(request.text.trim().to_string()));
        }
        Ok(raw.to_string())
    }
}
