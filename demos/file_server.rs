//! Serves a small static site, with the file I/O living entirely in the
//! handlers. The `/info` route reports the parsed request back as JSON.

use std::collections::HashMap;

use log::warn;
use minihttp_rs::{HttpServer, Method, Request, Response, Router, ServerConfig, ServerError};
use serde::Serialize;

#[derive(Serialize)]
struct RequestInfo {
    method: String,
    path: String,
    params: HashMap<String, String>,
    headers: HashMap<String, String>,
}

async fn serve_file(req: Request) -> Result<Response, ServerError> {
    // Only registered paths reach this handler, so the request path maps
    // directly onto the www directory
    let filename = if req.path == "/" {
        "www/index.html".to_string()
    } else {
        format!("www{path}", path = req.path)
    };

    match tokio::fs::read(&filename).await {
        Ok(content) => Ok(Response::new(200)
            .with_content_type("text/html; charset=utf-8")
            .with_body(content)),
        Err(e) => {
            warn!("Reading {filename} failed: {e}");
            Ok(Response::new(404).with_body("Not found"))
        }
    }
}

async fn info_handler(req: Request) -> Result<Response, ServerError> {
    let info = RequestInfo {
        method: req.method.to_string(),
        path: req.path.clone(),
        params: req.params.clone(),
        headers: req.headers.clone(),
    };

    Response::new(200).with_json(&info)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut router = Router::new();
    router.register(Method::GET, "/", serve_file);
    router.register(Method::GET, "/index.html", serve_file);
    router.register(Method::GET, "/info", info_handler);

    let config = ServerConfig {
        addr: "127.0.0.1:3000".parse()?,
        ..ServerConfig::default()
    };

    let server = HttpServer::new(config, router);
    server.start().await?;

    Ok(())
}
