//! Terminal handler of the request pipeline.

/// Body returned to fully admitted requests.
pub const HELLO_MESSAGE: &str = "Hello from HelloHandler!";

/// Answers a request that passed authentication and rate limiting.
///
/// # Endpoint
///
/// `ANY /hello`
///
/// # Response Codes
///
/// - **200 OK**: plain text [`HELLO_MESSAGE`]
pub async fn hello_handler() -> &'static str {
    HELLO_MESSAGE
}
