//! Error types for the HTTP parser.

use thiserror::Error;

/// Errors that can occur during HTTP request parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// The byte stream lacks the CRLF-delimited structure of an HTTP request.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// A header line has no `": "` separator. Only raised in strict mode.
    #[error("Invalid header line: {0}")]
    InvalidHeaderLine(String),

    /// A parameter pair has no `=` separator. Only raised in strict mode.
    #[error("Invalid parameter pair: {0}")]
    InvalidParamPair(String),

    /// Error parsing JSON.
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}
