//! Infrastructure layer implementing the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Storage for per-client rate-limit records

pub mod persistence;
