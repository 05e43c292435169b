//! Repository trait for per-client rate-limit records.

use std::time::Duration;
use tokio::time::Instant;

/// Storage for the timestamp of each client's last admitted request.
///
/// Shared by every in-flight request, so implementations must be safe to call
/// concurrently. The check and the update of [`record_if_idle`] form a single
/// atomic step: two concurrent callers for the same client can never both be
/// admitted inside one cooldown window.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryClientRecordRepository`] - mutex-guarded map
/// - Test mocks available with `cfg(test)`
///
/// [`record_if_idle`]: ClientRecordRepository::record_if_idle
#[cfg_attr(test, mockall::automock)]
pub trait ClientRecordRepository: Send + Sync {
    /// Records `now` as the last admitted request of `client_id`, unless the
    /// previous record is less than `cooldown` old.
    ///
    /// # Returns
    ///
    /// - `None` if the client was idle (or unknown) and `now` was recorded
    /// - `Some(last)` with the existing timestamp if the client is still cooling down
    fn record_if_idle(&self, client_id: &str, now: Instant, cooldown: Duration) -> Option<Instant>;

    /// Removes every record that is at least `cooldown` old at `now`.
    ///
    /// Returns the number of removed records.
    fn evict_idle(&self, now: Instant, cooldown: Duration) -> usize;

    /// Number of clients currently tracked.
    fn tracked_clients(&self) -> usize;
}
