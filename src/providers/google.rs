use log::error;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::language_utils;
use crate::providers::{LookupRequest, TranslationProvider};
use crate::record::SEGMENT_SEPARATOR;

/// Default public endpoint
pub const DEFAULT_GOOGLE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Client for the public Google translate endpoint
#[derive(Debug)]
pub struct GoogleTranslate {
    /// HTTP client for lookups
    client: Client,
    /// Endpoint URL
    endpoint: String,
}

impl GoogleTranslate {
    /// Create a new client; an empty endpoint selects the public one
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        let endpoint = endpoint.into();
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: if endpoint.is_empty() {
                DEFAULT_GOOGLE_ENDPOINT.to_string()
            } else {
                endpoint
            },
        }
    }

    /// Lookup URL for `request`
    pub fn build_url(&self, request: &LookupRequest) -> Result<Url, ProviderError> {
        let text = request.require_text()?;
        Url::parse_with_params(
            &self.endpoint,
            &[
                ("client", "gtx"),
                ("sl", request.source_language.as_str()),
                ("tl", request.target_language.as_str()),
                ("hl", "en"),
                ("dt", "t"),
                ("dt", "bd"),
                ("dt", "qca"),
                ("ie", "UTF-8"),
                ("oe", "UTF-8"),
                ("q", text),
            ],
        )
        .map_err(|e| ProviderError::RequestFailed(format!("Invalid endpoint {}: {}", self.endpoint, e)))
    }

    /// Turn the endpoint's JSON array into the raw segment block
    ///
    /// Layout: language line, original text, translation, then an optional
    /// spelling suggestion and one segment per dictionary part of speech.
    pub fn format_response(request: &LookupRequest, body: &Value) -> Result<String, ProviderError> {
        let sentences = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::ParseError("missing sentence list".to_string()))?;

        let translation: String = sentences
            .iter()
            .filter_map(|sentence| sentence.get(0).and_then(Value::as_str))
            .collect();
        let translation = translation.trim();

        if translation.is_empty() {
            return Err(ProviderError::NoTranslation(request.text.trim().to_string()));
        }

        let detected = body.get(2).and_then(Value::as_str);
        let source = match detected {
            Some(code) if language_utils::is_auto_detect(&request.source_language) => code,
            _ => request.source_language.as_str(),
        };

        let mut segments = vec![
            format!(
                "{} -> {}",
                language_utils::display_name(source),
                language_utils::display_name(&request.target_language)
            ),
            request.text.trim().to_string(),
            translation.to_string(),
        ];

        if let Some(suggestion) = body
            .get(7)
            .and_then(|spelling| spelling.get(1))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
        {
            segments.push(format!("Did you mean: {}", suggestion));
        }

        if let Some(dictionary) = body.get(1).and_then(Value::as_array) {
            for entry in dictionary {
                let part_of_speech = entry.get(0).and_then(Value::as_str).unwrap_or_default();
                let terms: Vec<&str> = entry
                    .get(1)
                    .and_then(Value::as_array)
                    .map(|terms| terms.iter().filter_map(Value::as_str).collect())
                    .unwrap_or_default();
                if terms.is_empty() {
                    continue;
                }
                if part_of_speech.is_empty() {
                    segments.push(terms.join(", "));
                } else {
                    segments.push(format!("{}: {}", part_of_speech, terms.join(", ")));
                }
            }
        }

        Ok(segments.join(SEGMENT_SEPARATOR))
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslate {
    fn name(&self) -> &str {
        "google"
    }

    async fn fetch(&self, request: &LookupRequest) -> Result<String, ProviderError> {
        let url = self.build_url(request)?;

        let response = self.client.get(url)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Google translate error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let body = response.json::<Value>().await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Self::format_response(request, &body)
    }
}
