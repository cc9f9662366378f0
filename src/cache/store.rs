//! Cache Store Module
//!
//! Thread-safe TTL cache shared by every request handler.
//!
//! Expiry is lazy: a stale entry stays in the map until it is overwritten or
//! the cache is cleared. There is no sweeper and no capacity bound, which is
//! fine for the handful of provider/parameter keys this service produces. A
//! large or caller-controlled keyspace would need a capacity limit.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use crate::cache::{CacheEntry, Clock, SystemClock};

// == TTL Cache ==
/// In-memory key/value cache whose reads miss once an entry is older than
/// the configured timeout.
///
/// One `RwLock` guards the whole map: reads run in parallel, `set` and
/// `clear` are exclusive. No operation blocks on I/O or awaits.
#[derive(Debug)]
pub struct TtlCache<V, C = SystemClock> {
    /// Maximum age of a fresh entry
    timeout: Duration,
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    /// Time source used to stamp and age entries
    clock: C,
}

impl<V: Clone> TtlCache<V, SystemClock> {
    // == Constructor ==
    /// Creates an empty cache using the system clock.
    ///
    /// # Arguments
    /// * `timeout` - Maximum age of an entry; `Duration::ZERO` makes every read miss
    pub fn new(timeout: Duration) -> Self {
        Self::with_clock(timeout, SystemClock)
    }
}

impl<V: Clone, C: Clock> TtlCache<V, C> {
    /// Creates an empty cache driven by the given clock.
    pub fn with_clock(timeout: Duration, clock: C) -> Self {
        Self {
            timeout,
            entries: RwLock::new(HashMap::new()),
            clock,
        }
    }

    // == Get ==
    /// Returns a clone of the value stored under `key` if it is still fresh.
    ///
    /// Absent and stale keys both return `None`. A stale entry is left in
    /// place.
    pub fn get(&self, key: &str) -> Option<V> {
        let entries = self.read();
        let entry = entries.get(key)?;

        if entry.is_stale(self.timeout, self.clock.now()) {
            return None;
        }

        Some(entry.value.clone())
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry and its
    /// timestamp.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let mut entries = self.write();
        let entry = CacheEntry::new(value, self.clock.now());
        entries.insert(key.into(), entry);
    }

    // == Clear ==
    /// Discards every entry and returns how many were removed.
    ///
    /// The count and the removal happen under one write lock, so an entry
    /// set concurrently is either counted here or left in the cache.
    pub fn clear(&self) -> usize {
        let mut entries = self.write();
        std::mem::take(&mut *entries).len()
    }

    // == Timeout ==
    /// Returns the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // == Length ==
    /// Returns the number of stored entries, fresh or stale.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Writers only ever swap whole entries, so a poisoned map is still
    // consistent and safe to keep using.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
