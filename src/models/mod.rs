//! Domain models for the search client
//!
//! Defines the search parameters sent upstream and the normalized shape
//! the catalog response is decoded into.

pub mod album;
pub mod query;

// Re-export commonly used types
pub use album::{Album, SearchResults};
pub use query::SearchQuery;
