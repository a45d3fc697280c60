//! A basic HTTP server demonstrating routing and query parameters.

use log::info;
use minihttp_rs::{HttpServer, Method, Response, Router, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    let host = "127.0.0.1";
    let port = "3000";

    // The route table is fully populated before the server starts
    let mut router = Router::new();

    router.register(Method::GET, "/", |_req| async {
        Ok(Response::new(200)
            .with_content_type("text/plain")
            .with_body("Hello, World!"))
    });

    router.register(Method::GET, "/hello", |req| async move {
        let name = req.get_param("name").unwrap_or("World").to_string();

        Ok(Response::new(200)
            .with_content_type("text/plain")
            .with_body(format!("Hello, {name}!")))
    });

    let config = ServerConfig {
        addr: format!("{host}:{port}").parse()?,
        ..ServerConfig::default()
    };

    info!("Starting server on http://{host}:{port}");
    let server = HttpServer::new(config, router);
    server.start().await?;

    Ok(())
}
