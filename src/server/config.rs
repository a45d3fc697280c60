//! Server configuration.

use std::net::SocketAddr;
use std::time::Duration;

use crate::parser::ParseMode;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The maximum number of concurrent connections.
    pub max_connections: usize,
    /// The read buffer size. A request must fit in a single read of this
    /// size; one that fills the buffer completely is rejected.
    pub read_buffer_size: usize,
    /// How long a connection may take to send its request.
    pub read_timeout: Duration,
    /// How the parser treats malformed header and parameter lines.
    pub parse_mode: ParseMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8080".parse().unwrap(),
            max_connections: 1024,
            read_buffer_size: 8192,
            read_timeout: Duration::from_secs(30),
            parse_mode: ParseMode::Lenient,
        }
    }
}
