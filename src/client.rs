//! Catalog API client
//!
//! Issues the upstream search request and decodes the response into the
//! normalized `SearchResults` shape. Stateless: caching lives elsewhere.

use reqwest::Client;
use tracing::debug;

use crate::config::DEFAULT_ENDPOINT;
use crate::error::{Result, SearchError};
use crate::models::{SearchQuery, SearchResults};

/// Fixed query parameters sent with every search.
const MEDIA: &str = "music";
const ENTITY: &str = "album";

/// Client for the catalog search endpoint.
///
/// One synchronous round trip per call: no retries, no auth, no timeout
/// beyond the transport default. The response status is never inspected;
/// only an outright request error counts as a transport failure, so a non-2xx
/// body that fails to decode surfaces as a parse failure instead.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    endpoint: String,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient {
    /// Creates a new client pointed at the default catalog endpoint.
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Creates a new client pointed at a custom endpoint base URL.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Performs one catalog search.
    ///
    /// Builds `GET <endpoint>?term=..&media=music&entity=album&limit=..`,
    /// sends it, and decodes the body. The limit is forwarded as text without
    /// validation. Reading the body to completion releases the connection on
    /// every path after a successful send, whatever the decode outcome.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResults> {
        let request = self.build_request(query).map_err(SearchError::FetchFailed)?;

        debug!(url = %request.url(), term = %query.term, "Querying catalog API");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(SearchError::FetchFailed)?;
        let body = response.text().await.map_err(SearchError::FetchFailed)?;

        serde_json::from_str(&body).map_err(SearchError::ParseFailed)
    }

    /// Builds the search request with the four query parameters URL-encoded.
    fn build_request(&self, query: &SearchQuery) -> reqwest::Result<reqwest::Request> {
        self.http
            .get(&self.endpoint)
            .query(&[
                ("term", query.term.as_str()),
                ("media", MEDIA),
                ("entity", ENTITY),
                ("limit", query.limit.as_str()),
            ])
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn request_params(client: &CatalogClient, query: &SearchQuery) -> HashMap<String, String> {
        let request = client.build_request(query).unwrap();
        request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_request_carries_all_four_parameters() {
        let client = CatalogClient::new();
        let params = request_params(&client, &SearchQuery::new("dio", "5"));

        assert_eq!(params["term"], "dio");
        assert_eq!(params["media"], "music");
        assert_eq!(params["entity"], "album");
        assert_eq!(params["limit"], "5");
    }

    #[test]
    fn test_request_encodes_term() {
        let client = CatalogClient::new();
        let query = SearchQuery::new("black sabbath & friends", "10");

        let request = client.build_request(&query).unwrap();
        let raw = request.url().query().unwrap();
        assert!(!raw.contains(' '), "raw query must be URL-encoded: {}", raw);
        assert!(!raw.contains("& "), "ampersand must not leak into the query: {}", raw);

        // Round-trips back to the original term after decoding
        let params = request_params(&client, &query);
        assert_eq!(params["term"], "black sabbath & friends");
    }

    #[test]
    fn test_request_forwards_limit_unvalidated() {
        let client = CatalogClient::new();
        let params = request_params(&client, &SearchQuery::new("dio", "not-a-number"));

        assert_eq!(params["limit"], "not-a-number");
    }

    #[test]
    fn test_request_targets_configured_endpoint() {
        let client = CatalogClient::with_endpoint("http://localhost:9999/search");
        let request = client.build_request(&SearchQuery::new("dio", "5")).unwrap();

        assert_eq!(request.url().host_str(), Some("localhost"));
        assert_eq!(request.url().path(), "/search");
    }

    #[test]
    fn test_default_endpoint() {
        let client = CatalogClient::new();
        let request = client.build_request(&SearchQuery::new("dio", "5")).unwrap();

        assert!(request
            .url()
            .as_str()
            .starts_with("https://itunes.apple.com/search?"));
    }
}
