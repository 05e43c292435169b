//! Authentication service for the static API key.

use axum::http::{HeaderMap, HeaderName};
use serde_json::json;

use crate::error::AppError;

/// Header carrying the shared secret.
///
/// `HeaderMap` lookups are case-insensitive, so `X-API-Key`, `x-api-key` and
/// `X-Api-Key` all resolve to this header.
pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// Service for authenticating requests with a single static shared secret.
///
/// The presented key is compared verbatim with the configured one. There is
/// no hashing, rotation or constant-time comparison.
pub struct AuthService {
    api_key: String,
}

impl AuthService {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Authenticates a request by its `X-API-Key` header.
    ///
    /// Every failure produces the same error, so the response does not reveal
    /// whether the header was present.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if:
    /// - the header is missing
    /// - the header value is not visible ASCII
    /// - the value differs from the configured key (case-sensitive)
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<(), AppError> {
        let matches = headers
            .get(&API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|presented| presented == self.api_key);

        if !matches {
            return Err(AppError::unauthorized("Unauthorized", json!({})));
        }

        Ok(())
    }
}
