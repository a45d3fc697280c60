//! Echoes the decoded parameters of a URL-encoded form post.
//!
//! Try it with:
//!
//! ```text
//! curl -d 'name=Alice+Smith&city=Z%C3%BCrich' \
//!     -H 'Content-Type: application/x-www-form-urlencoded' \
//!     http://127.0.0.1:3000/submit
//! ```

use std::collections::BTreeMap;

use minihttp_rs::{HttpServer, Method, Response, Router, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut router = Router::new();

    router.register(Method::GET, "/submit", |_req| async {
        Ok(Response::new(200)
            .with_content_type("text/html; charset=utf-8")
            .with_body(concat!(
                "<form method=\"post\" action=\"/submit\">",
                "<input name=\"name\" placeholder=\"name\">",
                "<button>send</button>",
                "</form>",
            )))
    });

    router.register(Method::POST, "/submit", |req| async move {
        // Sorted for a stable display order
        let params: BTreeMap<_, _> = req.params.iter().collect();

        let mut body = String::new();
        for (key, value) in params {
            body.push_str(key);
            body.push_str(" = ");
            body.push_str(value);
            body.push('\n');
        }

        Ok(Response::new(200)
            .with_content_type("text/plain; charset=utf-8")
            .with_body(body))
    });

    let config = ServerConfig {
        addr: "127.0.0.1:3000".parse()?,
        ..ServerConfig::default()
    };

    let server = HttpServer::new(config, router);
    server.start().await?;

    Ok(())
}
