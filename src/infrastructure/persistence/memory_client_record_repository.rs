//! In-memory implementation of the client record repository.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

use crate::domain::repositories::ClientRecordRepository;

/// Process-local client records guarded by a single mutex.
///
/// The lock is held only for one map lookup plus one insert, or one `retain`
/// pass during eviction. Records are lost on restart.
#[derive(Default)]
pub struct InMemoryClientRecordRepository {
    records: Mutex<HashMap<String, Instant>>,
}

impl InMemoryClientRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave the map half-updated:
    // every critical section is a single lookup/insert or retain.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Instant>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ClientRecordRepository for InMemoryClientRecordRepository {
    fn record_if_idle(&self, client_id: &str, now: Instant, cooldown: Duration) -> Option<Instant> {
        let mut records = self.lock();

        if let Some(&last) = records.get(client_id)
            && now.saturating_duration_since(last) < cooldown
        {
            return Some(last);
        }

        records.insert(client_id.to_string(), now);
        None
    }

    fn evict_idle(&self, now: Instant, cooldown: Duration) -> usize {
        let mut records = self.lock();
        let before = records.len();
        records.retain(|_, last| now.saturating_duration_since(*last) < cooldown);
        before - records.len()
    }

    fn tracked_clients(&self) -> usize {
        self.lock().len()
    }
}
