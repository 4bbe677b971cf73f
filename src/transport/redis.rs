// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Redis transport.
//!
//! Sends raw FT.* commands over a multiplexed [`ConnectionManager`] and
//! lowers the RESP reply into a [`Reply`]:
//!
//! ```text
//! nil                      → Reply::Nil
//! integer / boolean        → Reply::Integer
//! bulk / simple / verbatim → Reply::Text   (OK → "OK")
//! double                   → Reply::Text
//! array / set / map        → Reply::Array  (map flattened to k, v, k, v)
//! ```
//!
//! Server error replies become [`TransportError::Protocol`] with the
//! engine's text; everything else (IO, parse) is [`TransportError::Transport`].
//! Batches go out as one pipeline, one result per command.
//! Reconnection is left to the connection manager. Nothing here retries.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{pipe, Client, RedisError, Value};
use tracing::debug;

use crate::config::ClientConfig;

use super::traits::{Reply, Transport, TransportError};

pub struct RedisTransport {
    connection: ConnectionManager,
}

impl RedisTransport {
    /// Connect to `connection_string` (e.g. "redis://localhost:6379").
    pub async fn connect(connection_string: &str) -> Result<Self, TransportError> {
        let client = Client::open(connection_string).map_err(|e| TransportError::Transport(e.to_string()))?;
        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| TransportError::Transport(e.to_string()))?;

        debug!(url = %connection_string, "Redis transport connected");
        Ok(Self { connection })
    }

    /// Connect using `redis_url` from the config.
    pub async fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        let url = config
            .redis_url
            .as_deref()
            .ok_or_else(|| TransportError::Transport("redis_url not configured".into()))?;
        Self::connect(url).await
    }

    /// Get a clone of the connection manager (for sharing with other Redis users)
    pub fn connection(&self) -> ConnectionManager {
        self.connection.clone()
    }
}

impl From<RedisError> for TransportError {
    fn from(err: RedisError) -> Self {
        match (err.code(), err.detail()) {
            (Some(code), Some(detail)) => TransportError::Protocol(format!("{} {}", code, detail)),
            (Some(code), None) => TransportError::Protocol(code.to_string()),
            _ => TransportError::Transport(err.to_string()),
        }
    }
}

impl TryFrom<Value> for Reply {
    type Error = TransportError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Nil => Ok(Reply::Nil),
            Value::Int(n) => Ok(Reply::Integer(n)),
            Value::Boolean(b) => Ok(Reply::Integer(i64::from(b))),
            Value::BulkString(bytes) => Ok(Reply::Text(String::from_utf8_lossy(&bytes).into_owned())),
            Value::SimpleString(text) => Ok(Reply::Text(text)),
            Value::VerbatimString { text, .. } => Ok(Reply::Text(text)),
            Value::Okay => Ok(Reply::Text("OK".to_string())),
            Value::Double(d) => Ok(Reply::Text(d.to_string())),
            Value::Array(items) | Value::Set(items) => items
                .into_iter()
                .map(Reply::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Reply::Array),
            Value::Map(pairs) => {
                let mut flat = Vec::with_capacity(pairs.len() * 2);
                for (key, value) in pairs {
                    flat.push(Reply::try_from(key)?);
                    flat.push(Reply::try_from(value)?);
                }
                Ok(Reply::Array(flat))
            }
            Value::ServerError(err) => Err(RedisError::from(err).into()),
            other => Err(TransportError::Transport(format!(
                "unsupported reply type: {:?}",
                other
            ))),
        }
    }
}

#[async_trait]
impl Transport for RedisTransport {
    async fn execute(&self, tokens: &[String]) -> Result<Reply, TransportError> {
        let (name, args) = tokens
            .split_first()
            .ok_or_else(|| TransportError::Transport("empty command".into()))?;

        let mut command = redis::cmd(name);
        for arg in args {
            command.arg(arg);
        }

        let mut conn = self.connection.clone();
        let value: Value = command.query_async(&mut conn).await?;
        Reply::try_from(value)
    }

    /// One pipelined round trip. Engine errors stay attached to the command
    /// that caused them; a connection failure fails every command.
    async fn execute_batch(&self, commands: &[Vec<String>]) -> Vec<Result<Reply, TransportError>> {
        let mut pipeline = pipe();
        pipeline.ignore_errors();
        let mut queued = 0;
        for tokens in commands {
            if let Some((name, args)) = tokens.split_first() {
                let command = pipeline.cmd(name);
                for arg in args {
                    command.arg(arg);
                }
                queued += 1;
            }
        }

        let values = if queued == 0 {
            Ok(Vec::new())
        } else {
            let mut conn = self.connection.clone();
            pipeline
                .query_async::<Vec<Value>>(&mut conn)
                .await
                .map_err(TransportError::from)
                .and_then(|values| {
                    if values.len() == queued {
                        Ok(values)
                    } else {
                        Err(TransportError::Transport(format!(
                            "pipeline returned {} replies for {} commands",
                            values.len(),
                            queued
                        )))
                    }
                })
        };
        debug!(commands = commands.len(), ok = values.is_ok(), "Pipeline executed");

        let mut values = values.map(Vec::into_iter);

        commands
            .iter()
            .map(|tokens| {
                if tokens.is_empty() {
                    return Err(TransportError::Transport("empty command".into()));
                }
                match values.as_mut() {
                    Ok(replies) => replies
                        .next()
                        .ok_or_else(|| TransportError::Transport("missing pipeline reply".into()))
                        .and_then(Reply::try_from),
                    Err(e) => Err(e.clone()),
                }
            })
            .collect()
    }
}
