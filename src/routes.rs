//! Router configuration and middleware composition.
//!
//! # Route Structure
//!
//! - `ANY /hello` - Greeting, returned only to authenticated, non-throttled clients
//!
//! # Middleware
//!
//! Composed once, in this order (outermost first):
//!
//! 1. **Access log** - start/duration logging
//! 2. **Authentication** - `X-API-Key` must equal the configured secret
//! 3. **Rate limiting** - one admitted request per client per cooldown window
//!
//! Requests to unknown paths bypass the pipeline and get a plain `404`.

use crate::api::handlers::hello_handler;
use crate::api::middleware::{access_log, auth, rate_limit};
use crate::state::AppState;
use axum::routing::any;
use axum::{Router, middleware};
use tower::{Layer, ServiceBuilder};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Path of the single endpoint.
pub const HELLO_PATH: &str = "/hello";

/// Builds the pipeline router: the terminal handler behind every middleware stage.
///
/// `ServiceBuilder` applies layers top to bottom, so the first stage listed
/// is the outermost one.
pub fn pipeline_router(state: AppState) -> Router {
    let pipeline = ServiceBuilder::new()
        .layer(middleware::from_fn(access_log::layer))
        .layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(middleware::from_fn_with_state(state.clone(), rate_limit::layer));

    Router::new()
        .route(HELLO_PATH, any(hello_handler))
        .route_layer(pipeline)
        .with_state(state)
}

/// Constructs the application router with trailing slash normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(pipeline_router(state))
}
