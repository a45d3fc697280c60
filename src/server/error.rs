//! Error types for the HTTP server.

use thiserror::Error;

use crate::parser::Error as ParserError;

/// Errors that can occur while serving a connection.
///
/// Each of these is contained to the connection it happened on: the task
/// logs it and ends, and the process keeps accepting.
#[derive(Debug, Error)]
pub enum Error {
    /// Error parsing an HTTP request.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// I/O error on the listening socket or a connection.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The connection did not send its request within the read timeout.
    #[error("Timed out waiting for request data")]
    Timeout,

    /// The request filled the whole read buffer and may be truncated.
    #[error("Request exceeds the read buffer capacity of {limit} bytes")]
    PayloadTooLarge {
        /// The configured read buffer size.
        limit: usize,
    },

    /// A handler's own failure signal.
    #[error("Handler error: {0}")]
    HandlerError(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
