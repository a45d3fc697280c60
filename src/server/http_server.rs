//! HTTP server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;
use tokio::time;

use crate::parser::parse_request_with;
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::response::Response;
use crate::server::router::Router;

/// An HTTP server.
///
/// One listening socket, one concurrent task per accepted connection, and
/// exactly one request served per connection before it closes. The route
/// table is taken fully populated at construction time and never changes
/// while the server runs.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    /// The route table, shared read-only across connection tasks.
    pub router: Arc<Router>,
}

impl HttpServer {
    /// Create a new HTTP server from a configuration and a populated route
    /// table.
    pub fn new(config: ServerConfig, router: Router) -> Self {
        Self {
            config,
            router: Arc::new(router),
        }
    }

    /// Log the registered endpoints.
    fn display_server_info(&self) {
        info!("Registered endpoints:");
        for (method, path) in self.router.routes() {
            info!("  {method} {path}");
        }
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server listening on http://{addr}", addr = self.config.addr);
        Ok(listener)
    }

    /// Set up a Ctrl+C handler for graceful shutdown.
    fn setup_ctrl_c_handler(shutdown_tx: Arc<mpsc::Sender<()>>, tasks: &mut JoinSet<()>) {
        // Spawn a task to handle Ctrl+C
        tasks.spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C, initiating graceful shutdown");
                    let _ = shutdown_tx.send(()).await;
                }
                Err(e) => {
                    error!("Error setting up Ctrl+C handler: {e}");
                }
            }
        });
    }

    /// Hand an accepted connection to its own task.
    async fn handle_new_connection(
        &self,
        mut socket: tokio::net::TcpStream,
        addr: SocketAddr,
        semaphore: Arc<Semaphore>,
        tasks: &mut JoinSet<()>,
    ) {
        // Try to acquire a permit from the semaphore
        let permit = match semaphore.try_acquire_owned() {
            Ok(permit) => permit,
            Err(_) => {
                warn!("Connection limit reached, rejecting connection from {addr}");
                let response = Response::new(503)
                    .with_content_type("text/plain")
                    .with_body("Server is at capacity, please try again later");
                let _ = socket.write_all(&response.to_bytes()).await;
                return;
            }
        };

        let router = self.router.clone();
        let config = self.config.clone();

        // Spawn a task to handle the connection
        tasks.spawn(async move {
            // The permit is dropped when the task completes, releasing the
            // semaphore slot
            let _permit = permit;

            if let Err(e) = Self::handle_connection(&mut socket, router, &config).await {
                error!("Error handling connection from {addr}: {e}");
            }
        });
    }

    /// Handle accept-loop errors. Returns true if the loop should stop.
    async fn handle_accept_error(e: std::io::Error) -> bool {
        error!("Error accepting connection: {e}");

        if e.kind() == std::io::ErrorKind::BrokenPipe {
            error!("Critical error accepting connection, shutting down");
            return true;
        }

        // For other errors, wait a bit before retrying
        time::sleep(time::Duration::from_millis(100)).await;
        false
    }

    /// Perform graceful shutdown.
    async fn perform_shutdown(tasks: &mut JoinSet<()>) {
        // Wait for all tasks to complete (with timeout)
        info!("Waiting for {len} active connections to complete...", len = tasks.len());
        let shutdown_timeout = time::Duration::from_secs(30);
        let _ = time::timeout(shutdown_timeout, async {
            while let Some(res) = tasks.join_next().await {
                if let Err(e) = res {
                    error!("Task failed during shutdown: {e}");
                }
            }
        })
        .await;

        info!("Server shutdown complete");
    }

    /// Start the server and listen for incoming connections.
    pub async fn start(&self) -> Result<(), Error> {
        // Display the registered endpoints
        self.display_server_info();

        // Set up the TCP listener
        let listener = self.setup_listener().await?;

        // Create a semaphore to limit concurrent connections
        let semaphore = Arc::new(Semaphore::new(self.config.max_connections));

        // Create a channel for shutdown signaling
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let shutdown_tx = Arc::new(shutdown_tx);

        // Use JoinSet to keep track of all spawned tasks
        let mut tasks = JoinSet::new();

        // Set up a Ctrl+C handler for graceful shutdown
        Self::setup_ctrl_c_handler(shutdown_tx.clone(), &mut tasks);

        loop {
            tokio::select! {
                // Check for shutdown signal
                _ = shutdown_rx.recv() => {
                    info!("Shutting down server...");
                    break;
                }

                // Accept new connections
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => {
                            self.handle_new_connection(socket, addr, semaphore.clone(), &mut tasks).await;
                        }
                        Err(e) => {
                            if Self::handle_accept_error(e).await {
                                break;
                            }
                        }
                    }
                }
            }
        }

        // Perform graceful shutdown
        Self::perform_shutdown(&mut tasks).await;

        Ok(())
    }

    /// Serve exactly one request on an accepted connection.
    ///
    /// Reads a single fixed-size chunk, parses it, dispatches it through the
    /// route table, and writes the serialized response. A request that cannot
    /// be parsed, times out, overflows the read buffer, or whose handler
    /// fails receives no response bytes at all; the error is returned for the
    /// caller to log and the connection simply closes.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        router: Arc<Router>,
        config: &ServerConfig,
    ) -> Result<(), Error> {
        let mut buf = vec![0; config.read_buffer_size];

        // Read one chunk from the socket, bounded by the read timeout
        let n = match time::timeout(config.read_timeout, socket.read(&mut buf)).await {
            Ok(read_result) => read_result?,
            Err(_) => return Err(Error::Timeout),
        };
        if n == 0 {
            return Ok(()); // Connection closed
        }
        // A read that fills the whole buffer is indistinguishable from a
        // truncated request
        if n == buf.len() {
            return Err(Error::PayloadTooLarge { limit: buf.len() });
        }

        // Parse the HTTP request
        let request = parse_request_with(&buf[..n], config.parse_mode)?;
        info!(
            "Received request: {method} {path}",
            method = request.method,
            path = request.path
        );

        // Dispatch it and send the response
        let response = router.dispatch(request).await?;
        socket.write_all(&response.to_bytes()).await?;

        Ok(())
    }
}
