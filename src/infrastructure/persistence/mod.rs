//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryClientRecordRepository`] - Mutex-guarded per-client rate-limit records

pub mod memory_client_record_repository;

pub use memory_client_record_repository::InMemoryClientRecordRepository;
