//! Per-client admission control under a fixed cooldown window.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::domain::Admission;
use crate::domain::repositories::ClientRecordRepository;

/// Admits at most one request per client identifier in every cooldown window.
///
/// The window is measured from the last *admitted* request; rejected requests
/// do not extend it.
pub struct RateLimitService {
    repository: Arc<dyn ClientRecordRepository>,
    cooldown: Duration,
}

impl RateLimitService {
    /// Creates a new rate limiter.
    ///
    /// # Arguments
    ///
    /// - `repository` - storage for last-admitted timestamps, shared by all requests
    /// - `cooldown` - minimum spacing between two admitted requests of one client
    pub fn new(repository: Arc<dyn ClientRecordRepository>, cooldown: Duration) -> Self {
        Self {
            repository,
            cooldown,
        }
    }

    /// Decides whether `client_id` may proceed now.
    pub fn admit(&self, client_id: &str) -> Admission {
        self.admit_at(client_id, Instant::now())
    }

    /// Decides whether `client_id` may proceed at `now`.
    ///
    /// The check and the timestamp update happen in one repository call, so
    /// concurrent requests from one client cannot both slip into a window.
    pub fn admit_at(&self, client_id: &str, now: Instant) -> Admission {
        match self.repository.record_if_idle(client_id, now, self.cooldown) {
            None => Admission::Admitted,
            Some(last) => Admission::Rejected {
                retry_after: self
                    .cooldown
                    .saturating_sub(now.saturating_duration_since(last)),
            },
        }
    }

    /// Drops records whose cooldown has already elapsed.
    ///
    /// Such records can no longer cause a rejection, so eviction never
    /// changes an admission decision.
    pub fn evict_idle(&self) -> usize {
        self.repository.evict_idle(Instant::now(), self.cooldown)
    }

    pub fn tracked_clients(&self) -> usize {
        self.repository.tracked_clients()
    }
}
