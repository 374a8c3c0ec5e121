//! Cache Entry Module
//!
//! Defines the structure for individual cached responses.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;

// == Cache Entry ==
/// A cached response payload together with the time it was written.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored response payload
    pub value: Value,
    /// Wall-clock time at which the entry was written
    pub stored_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Value) -> Self {
        Self {
            value,
            stored_at: Utc::now(),
        }
    }

    // == Age ==
    /// Milliseconds elapsed between `stored_at` and `now`.
    ///
    /// A clock that moved backwards yields zero rather than a negative age.
    pub fn age_ms_at(&self, now: DateTime<Utc>) -> u64 {
        now.signed_duration_since(self.stored_at)
            .num_milliseconds()
            .max(0) as u64
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl` as of `now`.
    ///
    /// Boundary condition: an entry whose age equals the TTL exactly is still
    /// valid; it expires only once the age strictly exceeds the TTL.
    pub fn is_expired_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        u128::from(self.age_ms_at(now)) > ttl.as_millis()
    }

    /// Checks whether the entry has outlived `ttl` as of the current time.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.is_expired_at(Utc::now(), ttl)
    }
}
