//! Error types for prt7-decoder.

use thiserror::Error;

/// Main error type for all decoder operations.
#[derive(Debug, Error)]
pub enum DecoderError {
    /// I/O error during link/stdin operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (session report only).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Protocol error (oversized line, invalid link state, etc.).
    #[error("Protocol error: {0}")]
    Protocol(String),
}

/// Result type alias using DecoderError.
pub type Result<T> = std::result::Result<T, DecoderError>;
