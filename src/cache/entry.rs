//! Cache Entry Module
//!
//! Defines a stored payload together with the instant it was written.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached payload and its insertion time.
///
/// Entries are replaced wholesale on every write and never mutated in place.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored payload, opaque to the cache
    pub value: V,
    /// When the payload was written
    pub inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with `inserted_at`.
    pub fn new(value: V, inserted_at: Instant) -> Self {
        Self { value, inserted_at }
    }

    // == Age ==
    /// Returns how long ago the entry was written, saturating at zero.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.inserted_at)
    }

    // == Is Stale ==
    /// Checks whether the entry has outlived `timeout`.
    ///
    /// Boundary condition: the comparison is strict, so an entry whose age is
    /// exactly `timeout` is still fresh. A zero timeout disables caching and
    /// every entry is stale.
    pub fn is_stale(&self, timeout: Duration, now: Instant) -> bool {
        timeout.is_zero() || self.age(now) > timeout
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_millis(100);

    #[test]
    fn test_entry_fresh_when_new() {
        let now = Instant::now();
        let entry = CacheEntry::new("value", now);

        assert_eq!(entry.age(now), Duration::ZERO);
        assert!(!entry.is_stale(TIMEOUT, now));
    }

    #[test]
    fn test_entry_fresh_at_exact_timeout() {
        let now = Instant::now();
        let entry = CacheEntry::new("value", now);

        assert!(!entry.is_stale(TIMEOUT, now + TIMEOUT));
    }

    #[test]
    fn test_entry_stale_just_past_timeout() {
        let now = Instant::now();
        let entry = CacheEntry::new("value", now);

        assert!(entry.is_stale(TIMEOUT, now + TIMEOUT + Duration::from_nanos(1)));
    }

    #[test]
    fn test_zero_timeout_always_stale() {
        let now = Instant::now();
        let entry = CacheEntry::new("value", now);

        assert!(entry.is_stale(Duration::ZERO, now));
    }

    #[test]
    fn test_age_saturates_for_earlier_instant() {
        let now = Instant::now();
        let entry = CacheEntry::new("value", now + Duration::from_secs(1));

        assert_eq!(entry.age(now), Duration::ZERO);
    }
}
