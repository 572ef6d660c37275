//! Error types for the portfolio renderer

use thiserror::Error;

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading content or preparing a page
#[derive(Error, Debug)]
pub enum Error {
    /// The content document could not be fetched
    #[error("Failed to load content: {0}")]
    LoadError(String),

    /// The server answered with a non-success status
    #[error("Échec récupération {status} ({url})")]
    HttpStatus { status: u16, url: String },

    /// Network error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The body was not valid JSON
    #[error("Invalid JSON in content document: {0}")]
    ParseError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ParseError(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::ConfigError(format!("invalid URL: {}", err))
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::NetworkError(err.to_string())
    }
}
