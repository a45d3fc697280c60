//! HTTP response types and serialization.

use std::collections::HashMap;

use serde::Serialize;

use crate::server::error::Error;

/// Represents an HTTP response produced by a handler.
///
/// Headers that are not set are omitted from the wire format, never
/// defaulted: no `Server` or `Content-Length` header is injected. The
/// connection closing after the write is what signals completion to the
/// client.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code
    pub status: u16,
    /// The HTTP headers
    pub headers: HashMap<String, String>,
    /// The response body
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response with the given status code, no headers, and an
    /// empty body.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// The canned response for an unmatched route.
    pub fn not_found() -> Self {
        Self::new(404).with_body("Not found")
    }

    /// Set the response body.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Add or replace a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the content type.
    pub fn with_content_type(self, content_type: impl Into<String>) -> Self {
        self.with_header("Content-Type", content_type)
    }

    /// Set the response body to a JSON-serialized value.
    pub fn with_json<T: Serialize>(self, value: &T) -> Result<Self, Error> {
        let json = serde_json::to_vec(value)?;
        Ok(self
            .with_content_type("application/json")
            .with_body(json))
    }

    /// Convert the response to the exact bytes written to the connection.
    ///
    /// The status line carries the literal reason phrase `OK` whatever the
    /// status code. After the headers and the blank line, the body is
    /// followed by one trailing CRLF. Header order follows the map's
    /// iteration order and is not guaranteed across runs.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        // Add the status line
        let status_line = format!("HTTP/1.1 {status} OK\r\n", status = self.status);
        bytes.extend_from_slice(status_line.as_bytes());

        // Add the headers
        for (name, value) in &self.headers {
            let header_line = format!("{name}: {value}\r\n");
            bytes.extend_from_slice(header_line.as_bytes());
        }

        // Add the empty line that separates headers from body
        bytes.extend_from_slice(b"\r\n");

        // Add the body and its trailing CRLF
        bytes.extend_from_slice(&self.body);
        bytes.extend_from_slice(b"\r\n");

        bytes
    }
}
