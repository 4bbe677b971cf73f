// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! # RediSearch Client
//!
//! A typed client for the RediSearch 1.x command family (FT.CREATE, FT.ADD,
//! FT.SEARCH, FT.SUGGET, ...).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        SearchClient                         │
//! │  • One async method per FT.* command                       │
//! │  • Index prefix + default scores from ClientConfig         │
//! └─────────────────────────────────────────────────────────────┘
//!            │ encode                          ▲ decode
//!            ▼                                 │
//! ┌──────────────────────────┐   ┌──────────────────────────────┐
//! │     ArgumentBuilder      │   │         ReplyParser          │
//! │  • flags, then params    │   │  • pair_fields / member      │
//! │  • declared order        │   │  • search (chunk dispatch)   │
//! └──────────────────────────┘   │  • info / suggestions        │
//!            │                   └──────────────────────────────┘
//!            ▼                                 ▲
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Transport (trait)                       │
//! │  • RedisTransport: ConnectionManager, RESP → Reply         │
//! │  • ScriptedTransport: queued replies for tests             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use redisearch_client::{ClientConfig, Document, SearchClient};
//! use redisearch_client::search::{AddOptions, CreateOptions, IndexSchema, SearchOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig {
//!         redis_url: Some("redis://localhost:6379".into()),
//!         ..Default::default()
//!     };
//!     let client = SearchClient::connect(config).await?;
//!
//!     let schema = IndexSchema::new().text("title").tag("genres");
//!     client.create("books", &schema, &CreateOptions::new()).await?;
//!
//!     let dune = Document::new("book:1")
//!         .field("title", "Dune")
//!         .field("genres", "scifi,classic");
//!     client.add("books", &dune, &AddOptions::new()).await?;
//!
//!     for record in client.search("books", "dune", &SearchOptions::new()).await? {
//!         println!("{}: {:?}", record.id(), record.get("title"));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`]: [`SearchClient`] and its error type
//! - [`search`]: option tables, [`ArgumentBuilder`](search::ArgumentBuilder), [`ReplyParser`](search::ReplyParser)
//! - [`transport`]: the [`Transport`] seam and its Redis / scripted implementations
//! - [`config`]: [`ClientConfig`]
//! - [`metrics`]: command counters and latency histograms

pub mod client;
pub mod config;
pub mod metrics;
pub mod search;
pub mod transport;

pub use client::{ClientError, Document, SearchClient};
pub use config::ClientConfig;
pub use metrics::LatencyTimer;
pub use search::{CodecError, Configuration, OperationKind, Record, SearchResults};
pub use transport::{RedisTransport, Reply, ScriptedTransport, Transport, TransportError};
