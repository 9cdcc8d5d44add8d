//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while reading an input document
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The document is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but does not have the expected top-level shape
    #[error("Invalid document: {0}")]
    InvalidFormat(String),
}
