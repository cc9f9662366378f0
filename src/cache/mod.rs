//! Cache Module
//!
//! Provides the in-memory TTL cache placed in front of every upstream call.

mod clock;
mod entry;
mod store;


// Re-export public types
pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub use clock::ManualClock;
pub use entry::CacheEntry;
pub use store::TtlCache;

// == Public Constants ==
/// Timeout used when none is configured (30 minutes)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30 * 60;
