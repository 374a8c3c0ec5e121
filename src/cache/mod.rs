//! Cache Module
//!
//! Bounded in-memory response cache with TTL expiration and FIFO eviction.

use std::time::Duration;

mod entry;
mod fifo;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use fifo::FifoTracker;
pub use stats::CacheStats;
pub use store::{CacheLookup, SimpleCache};

// == Public Constants ==
/// Default maximum number of cached responses
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Default lifetime of a cached response (5 minutes)
pub const DEFAULT_TTL: Duration = Duration::from_millis(300_000);
