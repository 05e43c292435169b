//! Per-client rate limiting middleware.

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;

use crate::domain::Admission;
use crate::utils::client_ip::resolve_client_ip;
use crate::{error::AppError, state::AppState};

/// Admits at most one request per client every cooldown window (5 seconds by default).
///
/// # Key Extraction
///
/// The client is identified by `X-Real-IP`, then the first `X-Forwarded-For`
/// entry, then the socket peer address without its port. See
/// [`resolve_client_ip`] for the exact rules.
///
/// # Errors
///
/// Returns `429 Too Many Requests` with a `Retry-After` header when the client's
/// previous admitted request is younger than the cooldown.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let remote_addr = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string());

    let client_id = resolve_client_ip(req.headers(), remote_addr.as_deref());

    match st.rate_limiter.admit(&client_id) {
        Admission::Admitted => {
            metrics::counter!("pipeline_admitted_total").increment(1);
            Ok(next.run(req).await)
        }
        Admission::Rejected { retry_after } => {
            tracing::warn!(client = %client_id, ?retry_after, "Rate limit exceeded");
            metrics::counter!("pipeline_rejected_total", "reason" => "rate_limited").increment(1);
            Err(AppError::rate_limited(
                "Too many requests. Please wait.",
                retry_after,
            ))
        }
    }
}
