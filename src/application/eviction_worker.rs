//! Background removal of idle rate-limit records.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};

use crate::application::services::RateLimitService;

pub const MIN_EVICTION_PERIOD: Duration = Duration::from_secs(1);

/// Periodically evicts client records whose cooldown has elapsed.
///
/// Without it the record map grows with every distinct client for the
/// lifetime of the process. Runs until the task is aborted or the runtime
/// shuts down. Periods shorter than [`MIN_EVICTION_PERIOD`] are raised to it.
pub async fn run_eviction_worker(rate_limiter: Arc<RateLimitService>, every: Duration) {
    // `time::interval` panics on a zero period.
    let every = every.max(MIN_EVICTION_PERIOD);
    let mut interval = time::interval(every);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // The first tick completes immediately; nothing can be idle yet.
    interval.tick().await;

    loop {
        interval.tick().await;

        let evicted = rate_limiter.evict_idle();
        if evicted > 0 {
            tracing::debug!(
                evicted,
                remaining = rate_limiter.tracked_clients(),
                "Evicted idle rate limit records"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::InMemoryClientRecordRepository;

    #[tokio::test(start_paused = true)]
    async fn test_worker_evicts_after_cooldown() {
        let limiter = Arc::new(RateLimitService::new(
            Arc::new(InMemoryClientRecordRepository::new()),
            Duration::from_secs(5),
        ));

        assert!(limiter.admit("10.0.0.1").is_admitted());
        assert_eq!(limiter.tracked_clients(), 1);

        let worker = tokio::spawn(run_eviction_worker(limiter.clone(), Duration::from_secs(10)));

        time::sleep(Duration::from_secs(11)).await;
        assert_eq!(limiter.tracked_clients(), 0);

        worker.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_worker_keeps_cooling_down_clients() {
        let limiter = Arc::new(RateLimitService::new(
            Arc::new(InMemoryClientRecordRepository::new()),
            Duration::from_secs(30),
        ));

        let worker = tokio::spawn(run_eviction_worker(limiter.clone(), Duration::from_secs(10)));

        assert!(limiter.admit("10.0.0.1").is_admitted());
        time::sleep(Duration::from_secs(11)).await;

        assert_eq!(limiter.tracked_clients(), 1);
        assert!(!limiter.admit("10.0.0.1").is_admitted());

        worker.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_is_raised_to_minimum() {
        let limiter = Arc::new(RateLimitService::new(
            Arc::new(InMemoryClientRecordRepository::new()),
            Duration::from_secs(1),
        ));

        assert!(limiter.admit("10.0.0.1").is_admitted());

        let worker = tokio::spawn(run_eviction_worker(limiter.clone(), Duration::ZERO));

        time::sleep(Duration::from_millis(2_500)).await;
        assert!(!worker.is_finished(), "worker must not panic on a zero period");
        assert_eq!(limiter.tracked_clients(), 0);

        worker.abort();
    }
}
