//! Search service
//!
//! Composes the cache store and the catalog client: lookups are answered
//! from the cache while an entry is live, otherwise one upstream fetch runs
//! and its result is stored. Failures are returned to the caller and never
//! cached, so the next identical call retries the upstream.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::SearchCache;
use crate::client::CatalogClient;
use crate::config::Config;
use crate::error::Result;
use crate::models::{SearchQuery, SearchResults};

/// Cache-backed search over the catalog API.
///
/// The cache is an injected dependency shared behind `Arc<RwLock>`; whoever
/// constructs the service owns its lifetime (and may hand a clone of the
/// handle to [`crate::tasks::spawn_sweep_task`]). Concurrent identical
/// misses are not coalesced: both may fetch, and the later insert wins.
#[derive(Clone)]
pub struct SearchService {
    /// Thread-safe results cache
    pub cache: Arc<RwLock<SearchCache>>,
    client: CatalogClient,
}

impl SearchService {
    /// Creates a new SearchService from a cache store and a catalog client.
    pub fn new(cache: SearchCache, client: CatalogClient) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            client,
        }
    }

    /// Creates a new SearchService from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            SearchCache::new(config.search_ttl),
            CatalogClient::with_endpoint(config.endpoint.clone()),
        )
    }

    /// Searches the catalog for albums matching `term`, capped at `limit`.
    ///
    /// `limit` is textual and forwarded unvalidated. Returns the cached
    /// results when a live entry exists for this exact `(term, limit)` pair,
    /// with no network call; otherwise fetches, caches on success (an empty
    /// result set is a success), and returns. On fetch or parse failure the
    /// error is returned and nothing is stored.
    pub async fn search(
        &self,
        term: impl Into<String>,
        limit: impl Into<String>,
    ) -> Result<SearchResults> {
        self.lookup_or_fetch(SearchQuery::new(term, limit)).await
    }

    /// Cache-then-fetch for one query.
    async fn lookup_or_fetch(&self, query: SearchQuery) -> Result<SearchResults> {
        // Lock scope ends before the network call; the cache is never held
        // across the upstream round trip.
        {
            let mut cache = self.cache.write().await;
            if let Some(results) = cache.get(&query) {
                debug!(term = %query.term, "Cache hit");
                return Ok(results);
            }
        }

        let results = self.client.search(&query).await?;

        let mut cache = self.cache.write().await;
        cache.insert(query, results.clone());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Album;

    fn sample_results() -> SearchResults {
        SearchResults {
            albums: vec![Album {
                artist_name: "Dio".to_string(),
                album_title: "Holy Diver".to_string(),
                url: "https://example.com/holy-diver".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn test_service_returns_seeded_cache_entry_without_network() {
        // Client points at an unroutable endpoint; a hit must not touch it
        let service = SearchService::new(
            SearchCache::new(300),
            CatalogClient::with_endpoint("http://127.0.0.1:1/search"),
        );

        {
            let mut cache = service.cache.write().await;
            cache.insert(SearchQuery::new("dio", "5"), sample_results());
        }

        let results = service.search("dio", "5").await.expect("hit should succeed");
        assert_eq!(results, sample_results());
    }

    #[tokio::test]
    async fn test_service_miss_surfaces_fetch_error() {
        let service = SearchService::new(
            SearchCache::new(300),
            CatalogClient::with_endpoint("http://127.0.0.1:1/search"),
        );

        let err = service.search("dio", "5").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch data");

        // Nothing was cached for the failed query
        let cache = service.cache.read().await;
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_service_from_config() {
        let config = Config::default();
        let service = SearchService::from_config(&config);

        let cache = service.cache.read().await;
        assert!(cache.is_empty());
    }
}
