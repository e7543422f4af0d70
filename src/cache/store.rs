//! Cache Store Module
//!
//! In-memory store mapping search queries to cached results with TTL expiration.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats};
use crate::models::{SearchQuery, SearchResults};

// == Search Cache ==
/// In-memory cache of search results keyed by the full query.
///
/// The `SearchQuery` value itself is the key, so two queries share an entry
/// only when both `term` and `limit` match exactly. Expired entries are
/// removed lazily on access; `sweep_expired` purges the rest in bulk.
#[derive(Debug)]
pub struct SearchCache {
    /// Query-to-results storage
    entries: HashMap<SearchQuery, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL in seconds applied to every inserted entry
    ttl_seconds: u64,
}

impl SearchCache {
    // == Constructor ==
    /// Creates a new SearchCache whose entries live for `ttl_seconds`.
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl_seconds,
        }
    }

    // == Get ==
    /// Retrieves the cached results for a query, if a live entry exists.
    ///
    /// An expired entry is treated as absent: it is removed on the spot and
    /// the lookup counts as a miss, so callers can never observe stale data.
    pub fn get(&mut self, query: &SearchQuery) -> Option<SearchResults> {
        if let Some(entry) = self.entries.get(query) {
            if entry.is_expired() {
                self.entries.remove(query);
                self.stats.record_expiration();
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                return None;
            }

            self.stats.record_hit();
            return Some(entry.results.clone());
        }

        self.stats.record_miss();
        None
    }

    // == Insert ==
    /// Stores results for a query under the cache TTL.
    ///
    /// If the query was already cached, the entry is replaced and its TTL
    /// restarts from now.
    pub fn insert(&mut self, query: SearchQuery, results: SearchResults) {
        let entry = CacheEntry::new(results, self.ttl_seconds);
        self.entries.insert(query, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Sweep Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed. Correctness never depends on
    /// this running: `get` enforces expiry itself. This only bounds memory
    /// held by entries nobody asks for again.
    pub fn sweep_expired(&mut self) -> usize {
        let expired: Vec<SearchQuery> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(query, _)| query.clone())
            .collect();

        let count = expired.len();

        for query in expired {
            self.entries.remove(&query);
            self.stats.record_expiration();
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
