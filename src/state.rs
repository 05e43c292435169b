use std::sync::Arc;

use crate::application::services::{AuthService, RateLimitService};
use crate::config::Config;
use crate::domain::repositories::ClientRecordRepository;
use crate::infrastructure::persistence::InMemoryClientRecordRepository;

/// Components shared by every request passing through the pipeline.
///
/// The rate limiter owns the only cross-request mutable state; it is created
/// once here and injected, never reached through a global.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub rate_limiter: Arc<RateLimitService>,
}

impl AppState {
    pub fn new(auth_service: Arc<AuthService>, rate_limiter: Arc<RateLimitService>) -> Self {
        Self {
            auth_service,
            rate_limiter,
        }
    }

    /// Builds the state with in-memory client records.
    pub fn from_config(config: &Config) -> Self {
        let records: Arc<dyn ClientRecordRepository> =
            Arc::new(InMemoryClientRecordRepository::new());

        Self::new(
            Arc::new(AuthService::new(config.api_key.clone())),
            Arc::new(RateLimitService::new(records, config.cooldown())),
        )
    }
}
