//! Utility functions for request handling.
//!
//! - [`client_ip`] - Client identifier resolution from trust headers and peer address

pub mod client_ip;
