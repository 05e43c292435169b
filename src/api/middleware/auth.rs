//! API key authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::application::services::API_KEY_HEADER;
use crate::{error::AppError, state::AppState};

/// Authenticates requests using the static key in the `X-API-Key` header.
///
/// # Header Format
///
/// ```text
/// X-API-Key: <secret>
/// ```
///
/// The header name is matched case-insensitively, the value exactly.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing or does not match.
/// Later stages (rate limiting, the handler) are not run.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Err(err) = st.auth_service.authenticate(req.headers()) {
        tracing::warn!(
            method = %req.method(),
            path = %req.uri().path(),
            key_present = req.headers().contains_key(&API_KEY_HEADER),
            "Authentication failed"
        );
        metrics::counter!("pipeline_rejected_total", "reason" => "unauthorized").increment(1);
        return Err(err);
    }

    Ok(next.run(req).await)
}
