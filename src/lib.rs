//! A minimal HTTP/1.1 server built directly on raw TCP sockets.
//!
//! This library reads an HTTP request from an accepted connection in a single
//! fixed-size chunk, parses the byte stream into a structured request,
//! dispatches it to a handler registered for the exact (method, path) pair,
//! and serializes the handler's response back onto the socket. No pre-built
//! HTTP library is involved.
//!
//! # Features
//!
//! - Parse HTTP requests from byte slices: start line, headers, body, and
//!   decoded query and form parameters
//! - Open method set: any non-empty token routes, with constants for the
//!   common methods
//! - Exact-match route table with async handlers, built before serving and
//!   read-only afterwards
//! - Lenient parsing by default with an opt-in strict mode
//! - Per-connection isolation: a failed, slow, or oversized request only ever
//!   ends its own connection
//!
//! # Examples
//!
//! ## Parsing a request
//!
//! ```
//! use minihttp_rs::parse_request;
//!
//! let request_bytes = b"GET /search?q=rust HTTP/1.1\r\nHost: example.com\r\n\r\n";
//!
//! match parse_request(request_bytes) {
//!     Ok(request) => {
//!         println!("Method: {}", request.method);
//!         println!("Path: {}", request.path);
//!         println!("q: {:?}", request.get_param("q"));
//!     },
//!     Err(err) => {
//!         println!("Error parsing request: {err}");
//!     }
//! }
//! ```
//!
//! ## Error handling
//!
//! ```
//! use minihttp_rs::{parse_request, ParserError};
//!
//! let invalid_request = b"no carriage returns anywhere";
//!
//! match parse_request(invalid_request) {
//!     Ok(_) => println!("Request parsed successfully"),
//!     Err(ParserError::MalformedRequest(reason)) => println!("Malformed request: {reason}"),
//!     Err(err) => println!("Other error: {err}"),
//! }
//! ```
//!
//! ## Running a server
//!
//! ```no_run
//! use minihttp_rs::{HttpServer, Method, Response, Router, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut router = Router::new();
//!     router.register(Method::GET, "/", |_req| async {
//!         Ok(Response::new(200)
//!             .with_content_type("text/plain")
//!             .with_body("Hello, World!"))
//!     });
//!
//!     let server = HttpServer::new(ServerConfig::default(), router);
//!     server.start().await?;
//!     Ok(())
//! }
//! ```
//!
//! See the `demos` directory for complete programs, including a form-decoding
//! echo service and a static file server.

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{parse_request, parse_request_with, Error as ParserError, Method, ParseMode, Request};
pub use server::{Error as ServerError, HttpServer, Response, Router, ServerConfig};
