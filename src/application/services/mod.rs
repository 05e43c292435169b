//! Business logic services for the application layer.

pub mod auth_service;
pub mod rate_limit_service;

pub use auth_service::{API_KEY_HEADER, AuthService};
pub use rate_limit_service::RateLimitService;
