//! Request logging middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs the start and the duration of every request.
///
/// Installed outermost, so it also covers requests rejected by the
/// authentication or rate limiting stages. Never alters the request or the
/// response.
///
/// # Example Logs
///
/// ```text
/// INFO hello_gateway::api::middleware::access_log: Started GET /hello
/// INFO hello_gateway::api::middleware::access_log: Completed in 152.3µs status=200
/// ```
pub async fn layer(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_string();

    tracing::info!("Started {} {}", method, path);

    let response = next.run(req).await;

    tracing::info!(
        status = response.status().as_u16(),
        "Completed in {:?}",
        start.elapsed()
    );

    response
}
