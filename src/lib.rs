//! # Hello Gateway
//!
//! A minimal HTTP request pipeline built with Axum: a fixed chain of
//! middleware (logging, API key authentication, per-client rate limiting)
//! wrapping a single greeting endpoint.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Admission outcome and repository traits
//! - **Application Layer** ([`application`]) - Authentication and rate limiting services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory client record storage
//! - **API Layer** ([`api`]) - Terminal handler and middleware stages
//!
//! ## Request Flow
//!
//! ```text
//! access_log → auth → rate_limit → hello_handler
//! ```
//!
//! Each stage either passes the request on or answers it: `401` for a bad
//! `X-API-Key`, `429` for a client seen less than one cooldown ago.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -H 'X-API-Key: secret123' http://localhost:8080/hello
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;
