/*!
 * Mock provider implementation for testing.
 *
 * - `MockProvider::working(raw)` - Always returns the given raw block
 * - `MockProvider::failing()` - Always fails with a connection error
 * - `MockProvider::empty()` - Answers without a translation
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::providers::{LookupRequest, TranslationProvider};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with this raw block
    Working(String),
    /// Always fails with an error
    Failing,
    /// Service answers but finds nothing
    Empty,
}

/// Mock provider for testing lookup behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of fetches made
    request_count: Arc<AtomicUsize>,
    /// Last request received
    last_request: Mutex<Option<LookupRequest>>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            last_request: Mutex::new(None),
        }
    }

    /// Create a working mock provider returning `raw`
    pub fn working(raw: impl Into<String>) -> Self {
        Self::new(MockBehavior::Working(raw.into()))
    }

    /// Create a working mock provider whose block is `segments` joined by blank lines
    pub fn with_segments(segments: &[&str]) -> Self {
        Self::working(segments.join("\n\n"))
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that finds no translation
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Number of fetches made so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Last request received, if any
    pub fn last_request(&self) -> Option<LookupRequest> {
        self.last_request.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, request: &LookupRequest) -> Result<String, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(request.clone());
        }

        match &self.behavior {
            MockBehavior::Working(raw) => Ok(raw.clone()),
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Mock provider configured to fail".to_string(),
            )),
            MockBehavior::Empty => Err(ProviderError::NoTranslation(request.text.clone())),
        }
    }
}
