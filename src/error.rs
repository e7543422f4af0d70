//! Error types for the search client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Search Error Enum ==
/// Unified error type for the search client.
///
/// Only two failure kinds exist: the upstream request itself failed, or the
/// request succeeded but the body could not be decoded. The display strings
/// are the caller-facing messages; the underlying cause travels as `source`
/// so callers never have to match on message text.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Transport-level failure (connection refused, DNS, timeout)
    #[error("Failed to fetch data")]
    FetchFailed(#[source] reqwest::Error),

    /// Transport succeeded but the body was not the expected JSON shape
    #[error("Failed to parse JSON")]
    ParseFailed(#[source] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the search client.
pub type Result<T> = std::result::Result<T, SearchError>;
