//! HTTP request parsing and representation.

use std::collections::HashMap;
use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::parser::error::Error;
use crate::parser::method::Method;
use crate::parser::params::append_url_encoded;

/// Controls how the parser treats malformed header lines and parameter pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Header lines without `": "` and parameter pairs without `=` are
    /// silently skipped.
    #[default]
    Lenient,
    /// The same inputs are rejected with an error.
    Strict,
}

/// Represents a parsed HTTP request.
///
/// Constructed once per connection by [`parse_request`] and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request-target's path component, with any query string removed
    pub path: String,
    /// Decoded parameters from the query string and, for URL-encoded form
    /// bodies, the body; on key collision the body value wins
    pub params: HashMap<String, String>,
    /// The HTTP headers, names kept with the case they arrived in; the last
    /// occurrence of a repeated name wins
    pub headers: HashMap<String, String>,
    /// The raw bytes after the header block, as text
    pub body: String,
}

impl Request {
    /// Get a header value by its exact name, case as received.
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Check if a header exists under its exact name.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    /// Get a decoded query or form parameter value.
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Check if a query or form parameter exists.
    pub fn has_param(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Check if the request carries a JSON body.
    pub fn is_json(&self) -> bool {
        self.get_header("Content-Type")
            .is_some_and(|ct| ct.starts_with("application/json"))
    }

    /// Parse the request body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let value = serde_json::from_str(&self.body)?;
        Ok(value)
    }
}

/// Parse an HTTP request from a byte slice, in lenient mode.
///
/// # Examples
///
/// ```
/// use minihttp_rs::parse_request;
///
/// let request_bytes = b"GET /search?q=rust HTTP/1.1\r\nHost: example.com\r\n\r\n";
/// let request = parse_request(request_bytes).unwrap();
///
/// assert_eq!(request.method.as_str(), "GET");
/// assert_eq!(request.path, "/search");
/// assert_eq!(request.get_param("q"), Some("rust"));
/// assert_eq!(request.get_header("Host"), Some("example.com"));
/// ```
pub fn parse_request(input: &[u8]) -> Result<Request, Error> {
    parse_request_with(input, ParseMode::Lenient)
}

/// Parse an HTTP request from a byte slice with an explicit [`ParseMode`].
///
/// The input is interpreted as text and cut at the first CRLF into the start
/// line and the remainder; a buffer without any CRLF is malformed. The start
/// line must carry at least a method and a request-target. A third token, the
/// protocol version, is ignored and accepted missing, which is laxer than
/// RFC 7230 requires.
pub fn parse_request_with(input: &[u8], mode: ParseMode) -> Result<Request, Error> {
    let text = String::from_utf8_lossy(input);

    let (start_line, rest) = match text.split_once("\r\n") {
        Some(cut) => cut,
        None => {
            return Err(Error::MalformedRequest(
                "no CRLF-terminated start line".to_string(),
            ))
        }
    };

    let mut tokens = start_line.split(' ');
    let method_token = tokens.next().unwrap_or_default();
    let target = match tokens.next() {
        Some(target) => target,
        None => {
            return Err(Error::MalformedRequest(format!(
                "start line {start_line:?} is missing a request-target"
            )))
        }
    };
    let method = Method::from_str(method_token)?;

    let (path, query_string) = match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    };

    // Without a blank line the whole remainder is body, not headers.
    let (header_block, body) = match rest.split_once("\r\n\r\n") {
        Some(cut) => cut,
        None => ("", rest),
    };

    let headers = parse_headers(header_block, mode)?;

    let mut params = HashMap::new();
    if let Some(query) = query_string {
        append_url_encoded(&mut params, query, mode)?;
    }

    // Body parameters are decoded after the query string, so on a key
    // collision the body value wins.
    if headers.get("Content-Type").map(String::as_str) == Some("application/x-www-form-urlencoded") {
        let encoded = body.split_once("\r\n").map_or(body, |(first, _)| first);
        append_url_encoded(&mut params, encoded, mode)?;
    }

    Ok(Request {
        method,
        path: path.to_string(),
        params,
        headers,
        body: body.to_string(),
    })
}

fn parse_headers(header_block: &str, mode: ParseMode) -> Result<HashMap<String, String>, Error> {
    let mut headers = HashMap::new();
    for line in header_block.split("\r\n") {
        match line.split_once(": ") {
            Some((name, value)) => {
                headers.insert(name.to_string(), value.to_string());
            }
            None => {
                // Blank lines inside the header block are tolerated in both
                // modes.
                if mode == ParseMode::Strict && !line.is_empty() {
                    return Err(Error::InvalidHeaderLine(line.to_string()));
                }
            }
        }
    }

    Ok(headers)
}
