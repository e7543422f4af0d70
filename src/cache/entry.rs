//! Cache Entry Module
//!
//! Defines the structure for individual cached search results with TTL support.

use chrono::{DateTime, Duration, Utc};

use crate::models::SearchResults;

// == Cache Entry ==
/// A cached search result with its expiry metadata.
///
/// Owned exclusively by the cache store; the stored results are never
/// mutated after insertion, only replaced wholesale by an overwrite.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored search results
    pub results: SearchResults,
    /// When the results were cached
    pub cached_at: DateTime<Utc>,
    /// When the entry stops being eligible to be returned
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_seconds` from now.
    pub fn new(results: SearchResults, ttl_seconds: u64) -> Self {
        let now = Utc::now();
        Self {
            results,
            cached_at: now,
            expires_at: now + Duration::seconds(ttl_seconds as i64),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired when the current time is
    /// greater than or equal to the expiration time, so once the TTL has
    /// fully elapsed the entry is immediately ineligible.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
