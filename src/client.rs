// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Search client
//!
//! One method per FT.* command. Each assembles the command name, its
//! positional tokens and the [`ArgumentBuilder`] output, hands them to the
//! [`Transport`], and decodes the reply with the matching [`ReplyParser`]
//! entry point.
//!
//! ```text
//! search(index, query, options)
//!       │
//!       ├─→ options.to_configuration()
//!       ├─→ ["FT.SEARCH", index, query] + ArgumentBuilder::build(Search, config)
//!       ├─→ Transport::execute ──→ Err(TransportError) returned as-is
//!       └─→ ReplyParser::search(reply, config)
//! ```
//!
//! Nothing is retried. Engine errors reach the caller with their original text.

use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::metrics::{self, LatencyTimer};
use crate::search::{
    AddOptions, AggregateOptions, ArgumentBuilder, CodecError, Configuration, CreateOptions,
    IndexSchema, InfoValue, OperationKind, Record, ReplyParser, SearchOptions, SearchResults,
    Suggestion, SuggestAddOptions, SuggestGetOptions, ToConfiguration,
};
use crate::transport::{RedisTransport, Reply, Transport, TransportError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// A document for FT.ADD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub fields: Vec<(String, String)>,
}

impl Document {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
}

fn status_of(err: &TransportError) -> &'static str {
    match err {
        TransportError::Protocol(_) => "protocol_error",
        TransportError::Transport(_) => "transport_error",
    }
}

fn unexpected(command: &'static str, expected: &str, reply: &Reply) -> ClientError {
    warn!(command, expected, reply = ?reply, "Unexpected reply");
    metrics::record_decode_error(command);
    ClientError::Codec(CodecError::MalformedReply(format!(
        "{}: expected {}, got {:?}",
        command, expected, reply
    )))
}

fn expect_ok(command: &'static str, reply: &Reply) -> Result<(), ClientError> {
    match reply {
        Reply::Text(text) if text == "OK" => Ok(()),
        other => Err(unexpected(command, "OK", other)),
    }
}

fn expect_integer(command: &'static str, reply: &Reply) -> Result<i64, ClientError> {
    reply
        .as_integer()
        .ok_or_else(|| unexpected(command, "an integer", reply))
}

/// RediSearch client over any [`Transport`].
pub struct SearchClient<T: Transport> {
    transport: Arc<T>,
    config: ClientConfig,
}

impl<T: Transport> Clone for SearchClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            config: self.config.clone(),
        }
    }
}

impl SearchClient<RedisTransport> {
    /// Connect to `config.redis_url`.
    pub async fn connect(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = RedisTransport::from_config(&config).await?;
        Ok(Self::new(transport, config))
    }
}

impl<T: Transport> SearchClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self::with_shared(Arc::new(transport), config)
    }

    /// Build on a transport shared with other users.
    pub fn with_shared(transport: Arc<T>, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Index lifecycle
    // ═══════════════════════════════════════════════════════════════════════════

    /// FT.CREATE. The schema must have at least one field.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use redisearch_client::{ClientConfig, SearchClient};
    /// # use redisearch_client::search::{CreateOptions, IndexSchema};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = SearchClient::connect(ClientConfig {
    ///     redis_url: Some("redis://localhost:6379".into()),
    ///     ..Default::default()
    /// })
    /// .await?;
    ///
    /// let schema = IndexSchema::new()
    ///     .text_weighted("title", 5.0)
    ///     .text("body")
    ///     .numeric_sortable("year");
    ///
    /// client.create("books", &schema, &CreateOptions::new().no_offsets()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(
        &self,
        index: &str,
        schema: &IndexSchema,
        options: &CreateOptions,
    ) -> Result<(), ClientError> {
        if schema.is_empty() {
            return Err(ClientError::InvalidArgument(format!(
                "schema for index '{}' has no fields",
                index
            )));
        }

        let index_name = self.config.prefixed(index);
        let mut args = vec![index_name.clone()];
        args.extend(ArgumentBuilder::build_options(options));
        args.extend(schema.to_args());

        let reply = self.call("FT.CREATE", args).await?;
        expect_ok("FT.CREATE", &reply)?;
        info!(index = %index_name, fields = schema.fields.len(), "Search index created");
        Ok(())
    }

    /// FT.DROP. With `keep_docs` the indexed documents stay in Redis.
    pub async fn drop(&self, index: &str, keep_docs: bool) -> Result<(), ClientError> {
        let index_name = self.config.prefixed(index);
        let mut args = vec![index_name.clone()];
        if keep_docs {
            args.push("KEEPDOCS".to_string());
        }

        let reply = self.call("FT.DROP", args).await?;
        expect_ok("FT.DROP", &reply)?;
        info!(index = %index_name, keep_docs, "Search index dropped");
        Ok(())
    }

    /// FT.INFO
    pub async fn info(&self, index: &str) -> Result<BTreeMap<String, InfoValue>, ClientError> {
        let reply = self.call("FT.INFO", vec![self.config.prefixed(index)]).await?;
        Ok(ReplyParser::info(&reply)?)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Documents
    // ═══════════════════════════════════════════════════════════════════════════

    fn add_args(&self, index: &str, document: &Document, options: &AddOptions) -> Vec<String> {
        let score = options
            .score
            .clone()
            .unwrap_or_else(|| self.config.default_document_score.clone());

        let mut args = vec![self.config.prefixed(index), document.id.clone(), score];
        args.extend(ArgumentBuilder::build_options(options));
        args.push("FIELDS".to_string());
        for (name, value) in &document.fields {
            args.push(name.clone());
            args.push(value.clone());
        }
        args
    }

    /// FT.ADD
    pub async fn add(&self, index: &str, document: &Document, options: &AddOptions) -> Result<(), ClientError> {
        let reply = self.call("FT.ADD", self.add_args(index, document, options)).await?;
        expect_ok("FT.ADD", &reply)
    }

    /// FT.ADD for each document, sent through [`Transport::execute_batch`]
    /// (one pipeline on [`RedisTransport`]).
    ///
    /// One result per document in input order; a rejected document does not
    /// stop the others.
    pub async fn add_multi(
        &self,
        index: &str,
        documents: &[Document],
        options: &AddOptions,
    ) -> Vec<Result<(), ClientError>> {
        let commands: Vec<Vec<String>> = documents
            .iter()
            .map(|document| {
                let mut tokens = vec!["FT.ADD".to_string()];
                tokens.extend(self.add_args(index, document, options));
                tokens
            })
            .collect();

        debug!(command = "FT.ADD", documents = documents.len(), "Sending batch");
        let _timer = LatencyTimer::new("FT.ADD");
        self.transport
            .execute_batch(&commands)
            .await
            .into_iter()
            .map(|result| match result {
                Ok(reply) => {
                    metrics::record_command("FT.ADD", "success");
                    expect_ok("FT.ADD", &reply)
                }
                Err(e) => {
                    metrics::record_command("FT.ADD", status_of(&e));
                    Err(e.into())
                }
            })
            .collect()
    }

    /// FT.ADDHASH: index an existing Redis hash under `id`.
    pub async fn add_hash(&self, index: &str, id: &str, options: &AddOptions) -> Result<(), ClientError> {
        let score = options
            .score
            .clone()
            .unwrap_or_else(|| self.config.default_document_score.clone());

        let mut args = vec![self.config.prefixed(index), id.to_string(), score];
        args.extend(ArgumentBuilder::build_options(options));

        let reply = self.call("FT.ADDHASH", args).await?;
        expect_ok("FT.ADDHASH", &reply)
    }

    /// FT.GET. `None` when the document does not exist.
    pub async fn get(&self, index: &str, id: &str) -> Result<Option<Record>, ClientError> {
        let reply = self
            .call("FT.GET", vec![self.config.prefixed(index), id.to_string()])
            .await?;
        Ok(ReplyParser::member(&reply, id)?)
    }

    /// FT.MGET. One entry per id, `None` for missing documents.
    pub async fn mget<S: AsRef<str>>(&self, index: &str, ids: &[S]) -> Result<Vec<Option<Record>>, ClientError> {
        let mut args = vec![self.config.prefixed(index)];
        args.extend(ids.iter().map(|id| id.as_ref().to_string()));

        let reply = self.call("FT.MGET", args).await?;
        Ok(ReplyParser::members(&reply, ids)?)
    }

    /// FT.DEL. With `delete_document` the underlying hash is removed too.
    /// Returns whether the document was in the index.
    pub async fn del(&self, index: &str, id: &str, delete_document: bool) -> Result<bool, ClientError> {
        let mut args = vec![self.config.prefixed(index), id.to_string()];
        if delete_document {
            args.push("DD".to_string());
        }

        let reply = self.call("FT.DEL", args).await?;
        Ok(expect_integer("FT.DEL", &reply)? == 1)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════════════

    /// FT.SEARCH
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use redisearch_client::{SearchClient, transport::RedisTransport};
    /// # use redisearch_client::search::SearchOptions;
    /// # async fn example(client: &SearchClient<RedisTransport>) -> Result<(), Box<dyn std::error::Error>> {
    /// let options = SearchOptions::new().with_scores().limit(0, 10);
    /// for record in client.search("books", "@title:rust", &options).await? {
    ///     println!("{} ({:?}): {:?}", record.id(), record.score(), record.get("title"));
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, index: &str, query: &str, options: &SearchOptions) -> Result<Vec<Record>, ClientError> {
        self.search_with(index, query, &options.to_configuration()).await
    }

    /// FT.SEARCH with a dynamic configuration
    pub async fn search_with(
        &self,
        index: &str,
        query: &str,
        config: &Configuration,
    ) -> Result<Vec<Record>, ClientError> {
        Ok(self.search_results(index, query, config).await?.records)
    }

    /// FT.SEARCH, keeping the engine's total match count
    pub async fn search_count(
        &self,
        index: &str,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResults, ClientError> {
        self.search_results(index, query, &options.to_configuration()).await
    }

    async fn search_results(
        &self,
        index: &str,
        query: &str,
        config: &Configuration,
    ) -> Result<SearchResults, ClientError> {
        let mut args = vec![self.config.prefixed(index), query.to_string()];
        args.extend(ArgumentBuilder::build(OperationKind::Search, config));

        let reply = self.call("FT.SEARCH", args).await?;
        let results = ReplyParser::search_results(&reply, config)?;
        metrics::record_search_results(results.records.len());
        Ok(results)
    }

    /// FT.AGGREGATE. The reply is returned undecoded.
    pub async fn aggregate(
        &self,
        index: &str,
        query: &str,
        options: &AggregateOptions,
    ) -> Result<Reply, ClientError> {
        let mut args = vec![self.config.prefixed(index), query.to_string()];
        args.extend(ArgumentBuilder::build_options(options));
        self.call("FT.AGGREGATE", args).await
    }

    /// FT.EXPLAIN: the engine's execution plan for `query`
    pub async fn explain(&self, index: &str, query: &str) -> Result<String, ClientError> {
        let reply = self
            .call("FT.EXPLAIN", vec![self.config.prefixed(index), query.to_string()])
            .await?;
        reply
            .as_scalar()
            .ok_or_else(|| unexpected("FT.EXPLAIN", "a string", &reply))
    }

    /// FT.TAGVALS: distinct values of a TAG field
    pub async fn tag_vals(&self, index: &str, field: &str) -> Result<Vec<String>, ClientError> {
        let reply = self
            .call("FT.TAGVALS", vec![self.config.prefixed(index), field.to_string()])
            .await?;
        let items = reply
            .as_array()
            .ok_or_else(|| unexpected("FT.TAGVALS", "an array", &reply))?;
        items
            .iter()
            .map(|item| {
                item.as_scalar()
                    .ok_or_else(|| unexpected("FT.TAGVALS", "a string", item))
            })
            .collect()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Suggestions
    // ═══════════════════════════════════════════════════════════════════════════

    /// FT.SUGADD. Returns the dictionary size after the add.
    pub async fn suggestion_add(
        &self,
        key: &str,
        string: &str,
        options: &SuggestAddOptions,
    ) -> Result<i64, ClientError> {
        let score = options
            .score
            .clone()
            .unwrap_or_else(|| self.config.default_suggestion_score.clone());

        let mut args = vec![self.config.prefixed(key), string.to_string(), score];
        args.extend(ArgumentBuilder::build_options(options));

        let reply = self.call("FT.SUGADD", args).await?;
        expect_integer("FT.SUGADD", &reply)
    }

    /// FT.SUGGET
    pub async fn suggestion_get(
        &self,
        key: &str,
        prefix: &str,
        options: &SuggestGetOptions,
    ) -> Result<Vec<Suggestion>, ClientError> {
        let config = options.to_configuration();
        let mut args = vec![self.config.prefixed(key), prefix.to_string()];
        args.extend(ArgumentBuilder::build(OperationKind::SuggestGet, &config));

        let reply = self.call("FT.SUGGET", args).await?;
        Ok(ReplyParser::suggestions(&reply, &config)?)
    }

    /// FT.SUGDEL. Returns whether the string was in the dictionary.
    pub async fn suggestion_delete(&self, key: &str, string: &str) -> Result<bool, ClientError> {
        let reply = self
            .call("FT.SUGDEL", vec![self.config.prefixed(key), string.to_string()])
            .await?;
        Ok(expect_integer("FT.SUGDEL", &reply)? == 1)
    }

    /// FT.SUGLEN
    pub async fn suggestion_length(&self, key: &str) -> Result<i64, ClientError> {
        let reply = self.call("FT.SUGLEN", vec![self.config.prefixed(key)]).await?;
        expect_integer("FT.SUGLEN", &reply)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Internal helpers
    // ═══════════════════════════════════════════════════════════════════════════

    async fn call(&self, command: &'static str, args: Vec<String>) -> Result<Reply, ClientError> {
        let mut tokens = Vec::with_capacity(args.len() + 1);
        tokens.push(command.to_string());
        tokens.extend(args);

        debug!(command, args = tokens.len() - 1, "Sending command");
        let _timer = LatencyTimer::new(command);

        match self.transport.execute(&tokens).await {
            Ok(reply) => {
                metrics::record_command(command, "success");
                Ok(reply)
            }
            Err(e) => {
                debug!(command, error = %e, "Command failed");
                metrics::record_command(command, status_of(&e));
                Err(e.into())
            }
        }
    }
}
