use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use tracing::debug;

use wellness_model::Destination;

use crate::error::Result;
use crate::loader::{DataPaths, load_destinations};

/// How long a loaded dataset is served before the next access reloads it.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// TTL-memoized destination loader.
///
/// The dataset is immutable after load, so cached copies are handed out as
/// shared slices and concurrent readers need no locking of their own. Two
/// sessions racing on an expired entry may both reload; the loser's copy is
/// simply dropped — duplicate loads are cheaper than coordinating them.
#[derive(Debug)]
pub struct DestinationStore {
    paths: DataPaths,
    ttl: Duration,
    slot: Mutex<Option<CacheEntry>>,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    loaded_at: Instant,
    data: Arc<[Destination]>,
}

impl DestinationStore {
    pub fn new(paths: DataPaths) -> Self {
        Self::with_ttl(paths, DEFAULT_CACHE_TTL)
    }

    pub fn with_ttl(paths: DataPaths, ttl: Duration) -> Self {
        Self {
            paths,
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Serve the cached dataset, reloading when the entry is absent or
    /// older than the TTL.
    pub fn get(&self) -> Result<Arc<[Destination]>> {
        if let Some(entry) = self.fresh_entry() {
            return Ok(entry);
        }
        // Load outside the lock: a slow read must not block readers that
        // can still be served, and a racing duplicate load is acceptable.
        let data: Arc<[Destination]> = load_destinations(&self.paths)?.into();
        let mut slot = self.lock_slot();
        *slot = Some(CacheEntry {
            loaded_at: Instant::now(),
            data: Arc::clone(&data),
        });
        debug!(count = data.len(), "destination cache refreshed");
        Ok(data)
    }

    /// Drop the cached entry; the next access reloads.
    pub fn invalidate(&self) {
        *self.lock_slot() = None;
    }

    fn fresh_entry(&self) -> Option<Arc<[Destination]>> {
        let slot = self.lock_slot();
        slot.as_ref()
            .filter(|entry| entry.loaded_at.elapsed() < self.ttl)
            .map(|entry| Arc::clone(&entry.data))
    }

    fn lock_slot(&self) -> std::sync::MutexGuard<'_, Option<CacheEntry>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
