//! Configuration for the search client.
//!
//! # Example
//!
//! ```
//! use redisearch_client::ClientConfig;
//!
//! // Minimal config (uses defaults)
//! let config = ClientConfig::default();
//! assert_eq!(config.default_document_score, "1.0");
//!
//! // Full config
//! let config = ClientConfig {
//!     redis_url: Some("redis://localhost:6379".into()),
//!     index_prefix: Some("myapp:".into()),
//!     ..Default::default()
//! };
//! ```

use serde::Deserialize;

/// Configuration for [`SearchClient`](crate::SearchClient).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientConfig {
    /// Redis connection string (e.g., "redis://localhost:6379")
    #[serde(default)]
    pub redis_url: Option<String>,

    /// Prepended to every index name and suggestion key sent on the wire
    #[serde(default)]
    pub index_prefix: Option<String>,

    /// FT.ADD / FT.ADDHASH score when the caller gives none
    #[serde(default = "default_score")]
    pub default_document_score: String,

    /// FT.SUGADD score when the caller gives none
    #[serde(default = "default_score")]
    pub default_suggestion_score: String,
}

fn default_score() -> String { "1.0".to_string() }

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            redis_url: None,
            index_prefix: None,
            default_document_score: default_score(),
            default_suggestion_score: default_score(),
        }
    }
}

impl ClientConfig {
    /// Apply `index_prefix` to an index name or suggestion key.
    #[must_use]
    pub fn prefixed(&self, name: &str) -> String {
        match self.index_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => format!("{}{}", prefix, name),
            _ => name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.redis_url, None);
        assert_eq!(config.default_document_score, "1.0");
        assert_eq!(config.default_suggestion_score, "1.0");
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"redis_url": "redis://cache:6379", "default_suggestion_score": "0.5"}"#)
                .unwrap();
        assert_eq!(config.redis_url.as_deref(), Some("redis://cache:6379"));
        assert_eq!(config.default_document_score, "1.0");
        assert_eq!(config.default_suggestion_score, "0.5");
    }

    #[test]
    fn test_prefixed() {
        let mut config = ClientConfig::default();
        assert_eq!(config.prefixed("books"), "books");

        config.index_prefix = Some("app:".into());
        assert_eq!(config.prefixed("books"), "app:books");

        config.index_prefix = Some(String::new());
        assert_eq!(config.prefixed("books"), "books");
    }
}
