//! HTTP layer: the terminal handler and the middleware wrapping it.
//!
//! # Modules
//!
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Logging, authentication and rate limiting stages

pub mod handlers;
pub mod middleware;
