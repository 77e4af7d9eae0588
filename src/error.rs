// src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A required setting is missing or empty. Raised before any network traffic.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Login endpoint answered with a non-success status.
    #[error("Login failed (HTTP {status})")]
    Authentication { status: u16 },

    /// The page no longer has the structure the extractor expects.
    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
