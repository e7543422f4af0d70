//! Search query parameters
//!
//! The `(term, limit)` pair that identifies one upstream search. It doubles
//! as the cache key, so identity is the exact pair of both fields.

/// Parameters for a single album search.
///
/// `limit` is carried as text and forwarded to the upstream verbatim; the
/// catalog owns rejection of non-numeric values. Used directly as the cache
/// key: being a two-field value rather than a joined string means terms
/// containing any delimiter can never collide with another `(term, limit)`
/// pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    /// The search term, sent raw (URL encoding happens at request build time)
    pub term: String,
    /// Maximum number of results, as unvalidated text
    pub limit: String,
}

impl SearchQuery {
    /// Creates a new SearchQuery from a term and a textual limit.
    pub fn new(term: impl Into<String>, limit: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            limit: limit.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_query_equality() {
        let a = SearchQuery::new("dio", "5");
        let b = SearchQuery::new("dio", "5");
        assert_eq!(a, b);
    }

    #[test]
    fn test_query_distinguishes_term_and_limit() {
        assert_ne!(SearchQuery::new("dio", "5"), SearchQuery::new("dio", "10"));
        assert_ne!(SearchQuery::new("dio", "5"), SearchQuery::new("rainbow", "5"));
    }

    #[test]
    fn test_query_no_concatenation_collision() {
        // A joined-string key would conflate these two
        let a = SearchQuery::new("a-b", "c");
        let b = SearchQuery::new("a", "b-c");
        assert_ne!(a, b);

        let mut map = HashMap::new();
        map.insert(a, 1);
        map.insert(b, 2);
        assert_eq!(map.len(), 2);
    }
}
