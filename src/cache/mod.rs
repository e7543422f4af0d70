//! Cache Module
//!
//! Provides in-memory caching of search results with TTL expiration.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::SearchCache;
