//! Domain layer: admission model and repository interfaces.
//!
//! # Architecture
//!
//! - [`admission`] - Outcome of a rate-limit check
//! - [`repositories`] - Storage trait for per-client records
//!
//! The domain layer has no dependencies on the HTTP or infrastructure layers.

pub mod admission;
pub mod repositories;

pub use admission::Admission;
