//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;

/// Default catalog search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://itunes.apple.com/search";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the catalog search endpoint
    pub endpoint: String,
    /// TTL in seconds for cached search results
    pub search_ttl: u64,
    /// Background sweep task interval in seconds
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SEARCH_ENDPOINT` - Catalog search base URL (default: iTunes search API)
    /// - `SEARCH_TTL` - Result TTL in seconds (default: 300)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds (default: 600)
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var("SEARCH_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            search_ttl: env::var("SEARCH_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(600),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            search_ttl: 300,
            sweep_interval: 600,
        }
    }
}
