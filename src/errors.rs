/*!
 * Error types for the vocab-drill application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while looking up a translation
///
/// Any of these aborts a save before either store is touched.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making a lookup request fails
    #[error("Lookup request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing a lookup response fails
    #[error("Failed to parse lookup response: {0}")]
    ParseError(String),

    /// Error returned by the remote service itself
    #[error("Service responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the service
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The service answered but produced no translation
    #[error("No translation found for '{0}'")]
    NoTranslation(String),

    /// The text to look up (or the raw lookup buffer) is missing
    #[error("Lookup input unavailable: {0}")]
    InputUnavailable(String),
}

/// Errors raised while reading or mutating a store file
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying file operation failed
    #[error("Store I/O error on {path}: {message}")]
    Io {
        /// Store file path
        path: String,
        /// Description of the failure
        message: String,
    },
}

impl StoreError {
    pub(crate) fn io(path: &std::path::Path, error: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a translation provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from a store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Invalid or inconsistent configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
