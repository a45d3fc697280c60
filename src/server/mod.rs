//! HTTP server implementation for minihttp-rs.
//!
//! This module provides a simple HTTP server that reads one request per
//! connection from the raw socket, dispatches it through a route table, and
//! writes the serialized response back before closing the connection.

mod response;
mod config;
mod error;
mod router;
mod http_server;

// Re-export public items
pub use response::Response;
pub use config::ServerConfig;
pub use error::Error;
pub use router::{HandlerFn, HandlerFuture, Router};
pub use http_server::HttpServer;
