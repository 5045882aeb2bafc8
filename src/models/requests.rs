//! Request DTOs for the gateway API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

/// Upper bound for list requests forwarded upstream
pub const MAX_COUNT: u32 = 1000;

/// Query parameters for list endpoints (`GET /api/blocks`, `GET /api/transactions`)
///
/// # Fields
/// - `count`: how many items to request from the upstream (default 100)
#[derive(Debug, Clone, Deserialize)]
pub struct CountQuery {
    /// Number of items to fetch
    #[serde(default)]
    pub count: Option<u32>,
}

impl CountQuery {
    /// Returns the effective count, applying the default.
    pub fn effective_count(&self) -> u32 {
        self.count.unwrap_or(100)
    }

    /// Validates the query.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.effective_count() > MAX_COUNT {
            return Some(format!("count exceeds maximum of {}", MAX_COUNT));
        }
        None
    }
}

/// Query parameters for the search endpoint (`GET /api/search`)
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    /// The search pattern (block hash, transaction hash, validator id, ...)
    #[serde(default)]
    pub q: String,
}

impl SearchQuery {
    /// Validates the query.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.q.trim().is_empty() {
            return Some("search pattern cannot be empty".to_string());
        }
        if self.q.len() > 256 {
            return Some("search pattern exceeds maximum length of 256 characters".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_query_default() {
        let query: CountQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.effective_count(), 100);
        assert!(query.validate().is_none());
    }

    #[test]
    fn test_count_query_explicit() {
        let query: CountQuery = serde_json::from_str(r#"{"count": 25}"#).unwrap();
        assert_eq!(query.effective_count(), 25);
    }

    #[test]
    fn test_count_query_over_limit() {
        let query = CountQuery { count: Some(5000) };
        assert!(query.validate().is_some());
    }

    #[test]
    fn test_search_query_empty_pattern() {
        let query = SearchQuery { q: "   ".to_string() };
        assert!(query.validate().is_some());
    }

    #[test]
    fn test_search_query_too_long() {
        let query = SearchQuery {
            q: "x".repeat(257),
        };
        assert!(query.validate().is_some());
    }

    #[test]
    fn test_search_query_valid() {
        let query = SearchQuery {
            q: "abc123".to_string(),
        };
        assert!(query.validate().is_none());
    }
}
