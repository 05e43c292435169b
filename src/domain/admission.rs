//! Outcome of a rate-limit admission check.

use std::time::Duration;

/// Result of asking the rate limiter whether a client may proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The request was admitted and its timestamp recorded.
    Admitted,
    /// The client's previous admitted request is still inside the cooldown window.
    Rejected {
        /// Time left until the client would be admitted again.
        retry_after: Duration,
    },
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted)
    }
}
