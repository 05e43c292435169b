//! Application layer services implementing the pipeline's admission rules.
//!
//! Services consume repository traits and provide a small API for the HTTP
//! middleware.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Static API key authentication
//! - [`services::rate_limit_service::RateLimitService`] - Per-client cooldown admission
//! - [`eviction_worker`] - Periodic cleanup of idle client records

pub mod eviction_worker;
pub mod services;
