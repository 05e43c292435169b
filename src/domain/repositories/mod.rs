//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for state the pipeline keeps between requests.
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`ClientRecordRepository`] - Last admitted request per client identifier

pub mod client_record_repository;

pub use client_record_repository::ClientRecordRepository;

#[cfg(test)]
pub use client_record_repository::MockClientRecordRepository;
