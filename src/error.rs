// src/error.rs

//! Unified error handling for the slash command.

use thiserror::Error;

/// Result type alias for kym operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed (includes gzip decompression)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed or returned a non-2xx status
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Response body was not valid UTF-8
    #[error("Decode error: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// The user agent catalog held no records
    #[error("User agent catalog is empty")]
    EmptyCatalog,

    /// A result image had no `data-src` attribute
    #[error("Result image is missing its data-src attribute")]
    MissingDataSrc,

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
