//! Route registration and dispatch.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use log::warn;

use crate::parser::{Method, Request};
use crate::server::error::Error;
use crate::server::response::Response;

/// Type alias for a boxed future that resolves to a handler's result.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<Response, Error>> + Send>>;

/// Type alias for a handler function that takes a Request and returns a HandlerFuture.
pub type HandlerFn = Arc<dyn Fn(Request) -> HandlerFuture + Send + Sync>;

/// A table of registered routes.
///
/// The table is populated before the server starts serving and is read-only
/// afterwards, so connection tasks share it without locking.
#[derive(Default)]
pub struct Router {
    routes: HashMap<(Method, String), HandlerFn>,
}

impl Router {
    /// Create an empty route table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for the exact (method, path) pair.
    ///
    /// Registering the same pair twice replaces the earlier handler and logs
    /// a warning; the table never holds two entries for one key.
    pub fn register<F, Fut>(&mut self, method: Method, path: impl Into<String>, handler: F)
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response, Error>> + Send + 'static,
    {
        let path = path.into();
        let handler: HandlerFn = Arc::new(move |req: Request| -> HandlerFuture {
            Box::pin(handler(req))
        });

        if self
            .routes
            .insert((method.clone(), path.clone()), handler)
            .is_some()
        {
            warn!("Handler for route {method} {path} is already defined, replacing it");
        }
    }

    /// Look up the handler registered for the exact (method, path) pair.
    ///
    /// Matching is case-sensitive string equality on both components; no
    /// wildcards, no trailing-slash normalization.
    pub fn lookup(&self, method: &Method, path: &str) -> Option<&HandlerFn> {
        self.routes.get(&(method.clone(), path.to_string()))
    }

    /// Resolve a request to its handler and invoke it.
    ///
    /// An unmatched (method, path) pair yields the canned 404 response.
    /// Handler failures are not caught here; they end the connection they
    /// belong to.
    pub async fn dispatch(&self, request: Request) -> Result<Response, Error> {
        match self.lookup(&request.method, &request.path) {
            Some(handler) => handler(request).await,
            None => Ok(Response::not_found()),
        }
    }

    /// Iterate over the registered (method, path) pairs.
    pub fn routes(&self) -> impl Iterator<Item = (&Method, &str)> {
        self.routes
            .iter()
            .map(|((method, path), _)| (method, path.as_str()))
    }

    /// The number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
