//! Cache Store Module
//!
//! Bounded response cache combining HashMap storage with FIFO eviction and
//! read-triggered TTL expiry.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, FifoTracker, DEFAULT_MAX_ENTRIES, DEFAULT_TTL};
use crate::config::Config;

// == Cache Lookup ==
/// Outcome of consulting the cache for a key.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    /// A live entry was found
    Hit(Value),
    /// Nothing usable is stored under the key
    Miss,
}

impl CacheLookup {
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheLookup::Hit(_))
    }

    /// Converts into the value of a hit, discarding a miss.
    pub fn into_value(self) -> Option<Value> {
        match self {
            CacheLookup::Hit(value) => Some(value),
            CacheLookup::Miss => None,
        }
    }
}

// == Simple Cache ==
/// Bounded, time-expiring store for API response payloads.
///
/// Every entry shares the same TTL. Expiry is only noticed when the exact key
/// is read; expired entries keep occupying capacity until then, or until the
/// FIFO policy evicts them on an unrelated insert.
#[derive(Debug)]
pub struct SimpleCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Insertion order tracker
    order: FifoTracker,
    /// Lookup statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Lifetime applied to every entry
    ttl: Duration,
}

impl SimpleCache {
    // == Constructor ==
    /// Creates a new cache with the given capacity and TTL.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries the cache can hold
    /// * `ttl` - Lifetime applied uniformly to every entry
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            order: FifoTracker::new(),
            stats: CacheStats::new(),
            max_entries,
            ttl,
        }
    }

    /// Creates a cache sized from the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cache_max_entries, config.cache_ttl())
    }

    // == Set ==
    /// Stores a payload under `key`.
    ///
    /// Overwriting an existing key refreshes its timestamp but keeps its
    /// position in the eviction queue and never triggers an eviction. Inserting
    /// a new key while at capacity first evicts the oldest-inserted entry.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();

        if let Some(entry) = self.entries.get_mut(&key) {
            *entry = CacheEntry::new(value);
            debug!(key = %key, "Cache entry refreshed");
            return;
        }

        if self.max_entries == 0 {
            return;
        }

        if self.entries.len() >= self.max_entries {
            if let Some(evicted_key) = self.order.evict_oldest() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
                debug!(key = %evicted_key, "Cache entry evicted");
            }
        }

        self.entries.insert(key.clone(), CacheEntry::new(value));
        self.order.track(&key);
        self.stats.set_total_entries(self.entries.len());
        debug!(key = %key, "Cache entry stored");
    }

    // == Get ==
    /// Retrieves a live payload by key.
    ///
    /// An entry found past its TTL is deleted as a side effect and reported as
    /// absent.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(self.ttl),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.order.remove(key);
            self.stats.record_expiration();
            self.stats.set_total_entries(self.entries.len());
            debug!(key = %key, "Cache entry expired on read");
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Lookup ==
    /// Same as [`SimpleCache::get`], as a tagged result.
    pub fn lookup(&mut self, key: &str) -> CacheLookup {
        match self.get(key) {
            Some(value) => CacheLookup::Hit(value),
            None => CacheLookup::Miss,
        }
    }

    // == Remove ==
    /// Removes an entry by key, returning whether anything was stored.
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.order.remove(key);
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Clear ==
    /// Removes all entries unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Number of physically present entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for SimpleCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES, DEFAULT_TTL)
    }
}
