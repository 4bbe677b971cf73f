// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The engine rejected the command. Carries its error text verbatim.
    #[error("{0}")]
    Protocol(String),
    #[error("transport error: {0}")]
    Transport(String),
}

/// Raw reply value: nested arrays of strings, integers and nil.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reply {
    Nil,
    Integer(i64),
    Text(String),
    Array(Vec<Reply>),
}

impl Reply {
    /// Text or integer rendered as a string. Nil and arrays are not scalars.
    #[must_use]
    pub fn as_scalar(&self) -> Option<String> {
        match self {
            Reply::Text(text) => Some(text.clone()),
            Reply::Integer(n) => Some(n.to_string()),
            Reply::Nil | Reply::Array(_) => None,
        }
    }

    /// Integer, or text that parses as one.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Reply::Integer(n) => Some(*n),
            Reply::Text(text) => text.parse().ok(),
            Reply::Nil | Reply::Array(_) => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Reply]> {
        match self {
            Reply::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for Reply {
    fn from(text: &str) -> Self {
        Reply::Text(text.to_string())
    }
}

impl From<String> for Reply {
    fn from(text: String) -> Self {
        Reply::Text(text)
    }
}

impl From<i64> for Reply {
    fn from(n: i64) -> Self {
        Reply::Integer(n)
    }
}

impl<T: Into<Reply>> From<Vec<T>> for Reply {
    fn from(items: Vec<T>) -> Self {
        Reply::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Reply>> From<Option<T>> for Reply {
    fn from(value: Option<T>) -> Self {
        value.map_or(Reply::Nil, Into::into)
    }
}

/// Command transport. Owns connections; never interpreted by the codec.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue one command. `tokens[0]` is the command name.
    async fn execute(&self, tokens: &[String]) -> Result<Reply, TransportError>;

    /// Issue several commands, one result per command in input order.
    /// Default implementation falls back to sequential executes.
    async fn execute_batch(&self, commands: &[Vec<String>]) -> Vec<Result<Reply, TransportError>> {
        let mut results = Vec::with_capacity(commands.len());
        for tokens in commands {
            results.push(self.execute(tokens).await);
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Reply::from("abc").as_scalar().as_deref(), Some("abc"));
        assert_eq!(Reply::from(42).as_scalar().as_deref(), Some("42"));
        assert_eq!(Reply::Nil.as_scalar(), None);
        assert_eq!(Reply::from(vec!["a"]).as_scalar(), None);
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(Reply::Integer(7).as_integer(), Some(7));
        assert_eq!(Reply::from("12").as_integer(), Some(12));
        assert_eq!(Reply::from("1.5").as_integer(), None);
        assert_eq!(Reply::Nil.as_integer(), None);
    }

    #[test]
    fn test_nested_from() {
        let reply = Reply::from(vec![Reply::from(1), Reply::from(vec!["a", "b"]), Reply::Nil]);
        assert_eq!(
            reply,
            Reply::Array(vec![
                Reply::Integer(1),
                Reply::Array(vec![Reply::Text("a".into()), Reply::Text("b".into())]),
                Reply::Nil,
            ])
        );
        assert_eq!(Reply::from(None::<&str>), Reply::Nil);
    }

    #[test]
    fn test_protocol_error_is_verbatim() {
        let err = TransportError::Protocol("Document already exists".into());
        assert_eq!(err.to_string(), "Document already exists");
    }
}
