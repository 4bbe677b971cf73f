// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Search Codec
//!
//! Encoding of FT.* command options and decoding of their replies.
//!
//! # Architecture
//!
//! ```text
//! SearchOptions / Configuration
//!     ↓
//!     ArgumentBuilder → [NOCONTENT, LIMIT, 0, 10, ...]
//!                                │
//!                           Transport (FT.SEARCH idx query ...)
//!                                │
//!     ReplyParser ← [count, id, fields, ...]  (same Configuration)
//!     ↓
//! Vec<Record>
//! ```
//!
//! Both halves are pure functions over their inputs. They hold no state and
//! can be called from any number of tasks at once.

mod arg_builder;
mod error;
mod options;
mod reply_parser;
mod schema;

pub use arg_builder::ArgumentBuilder;
pub use error::CodecError;
pub use options::{
    AddOptions, AggregateOptions, Configuration, CreateOptions, GeoUnit, OperationKind, OptionValue,
    SearchOptions, SortOrder, SuggestAddOptions, SuggestGetOptions, ToConfiguration,
};
pub use reply_parser::{InfoValue, Record, ReplyChunk, ReplyParser, SearchResults, Suggestion};
pub use schema::{FieldType, IndexSchema, SchemaField};
