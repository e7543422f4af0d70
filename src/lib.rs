//! Tunesearch - A caching search client for the iTunes album catalog API
//!
//! Forwards album searches to the catalog search endpoint, normalizes the
//! JSON response, and caches results in memory with TTL expiration.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod tasks;

pub use cache::SearchCache;
pub use client::CatalogClient;
pub use config::Config;
pub use error::{Result, SearchError};
pub use models::{Album, SearchQuery, SearchResults};
pub use service::SearchService;
pub use tasks::spawn_sweep_task;
