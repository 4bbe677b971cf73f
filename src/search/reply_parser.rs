// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Reply Parser
//!
//! Reshapes raw FT.* replies into [`Record`]s and maps.
//!
//! # FT.SEARCH reply layout
//!
//! ```text
//! [count, id, score?, fields?, id, score?, fields?, ...]
//!
//! options                   per-hit elements      chunk size
//! (none)                    id fields             2
//! WITHSCORES                id score fields       3
//! NOCONTENT                 id                    1
//! NOCONTENT WITHSCORES      id score              2
//! ```
//!
//! The reply carries no type markers, so the chunk size comes from the
//! request options and each chunk is then classified by shape into a
//! [`ReplyChunk`]. The two 2-element layouts differ only in the type of the
//! second element: a field list or a plain score.
//!
//! Any shape that fits none of the layouts is a [`CodecError::MalformedReply`].
//! Nothing is silently dropped or defaulted, including the trailing element
//! of an odd-length field list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::metrics;
use crate::transport::Reply;

use super::error::CodecError;
use super::options::Configuration;

/// One parsed document: field name → value, plus `id` and optionally `score`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Record holding only an id
    pub fn new(id: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("id".to_string(), id.into());
        Self { fields }
    }

    /// `id` is inserted last so it wins over a document field of the same name.
    fn from_fields(mut fields: BTreeMap<String, String>, id: &str) -> Self {
        fields.insert("id".to_string(), id.to_string());
        Self { fields }
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        self.get("id").unwrap_or_default()
    }

    #[must_use]
    pub fn score(&self) -> Option<&str> {
        self.get("score")
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    #[must_use]
    pub fn into_fields(self) -> BTreeMap<String, String> {
        self.fields
    }
}

/// Search results with the engine's total match count.
///
/// `total` counts every match, not just the page in `records`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub total: i64,
    pub records: Vec<Record>,
}

/// One FT.SEARCH hit, classified by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyChunk<'a> {
    /// `[id, score, fields]`. `None` when the engine returned nil for a missing document.
    ContentWithScore {
        id: String,
        score: String,
        fields: Option<&'a [Reply]>,
    },
    /// `[id, fields]`. `None` when the engine returned nil for a missing document.
    ContentOnly {
        id: String,
        fields: Option<&'a [Reply]>,
    },
    /// `[id, score]`
    ScoreOnly { id: String, score: String },
    /// `[id]`
    IdOnly { id: String },
}

impl<'a> ReplyChunk<'a> {
    pub fn classify(chunk: &'a [Reply]) -> Result<Self, CodecError> {
        match chunk {
            [id, score, Reply::Array(fields)] => Ok(ReplyChunk::ContentWithScore {
                id: scalar(id, "search", "document id")?,
                score: scalar(score, "search", "score")?,
                fields: Some(fields.as_slice()),
            }),
            [id, score, Reply::Nil] => Ok(ReplyChunk::ContentWithScore {
                id: scalar(id, "search", "document id")?,
                score: scalar(score, "search", "score")?,
                fields: None,
            }),
            [id, Reply::Array(fields)] => Ok(ReplyChunk::ContentOnly {
                id: scalar(id, "search", "document id")?,
                fields: Some(fields.as_slice()),
            }),
            [id, Reply::Nil] => Ok(ReplyChunk::ContentOnly {
                id: scalar(id, "search", "document id")?,
                fields: None,
            }),
            [id, score] => Ok(ReplyChunk::ScoreOnly {
                id: scalar(id, "search", "document id")?,
                score: scalar(score, "search", "score")?,
            }),
            [id] => Ok(ReplyChunk::IdOnly {
                id: scalar(id, "search", "document id")?,
            }),
            _ => Err(malformed(
                "search",
                format!("no result layout matches a {}-element chunk", chunk.len()),
            )),
        }
    }

    /// Render the chunk. `None` only for a missing document.
    pub fn into_record(self) -> Result<Option<Record>, CodecError> {
        match self {
            ReplyChunk::ContentWithScore { id, score, fields: Some(fields) } => {
                let record = Record::from_fields(string_fields(fields)?, &id);
                Ok(Some(record.with_field("score", score)))
            }
            ReplyChunk::ContentOnly { id, fields: Some(fields) } => {
                Ok(Some(Record::from_fields(string_fields(fields)?, &id)))
            }
            ReplyChunk::ContentWithScore { fields: None, .. } | ReplyChunk::ContentOnly { fields: None, .. } => {
                Ok(None)
            }
            ReplyChunk::ScoreOnly { id, score } => Ok(Some(Record::new(id).with_field("score", score))),
            ReplyChunk::IdOnly { id } => Ok(Some(Record::new(id))),
        }
    }
}

/// FT.INFO value. Only `gc_stats` is paired one level down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InfoValue {
    Value(Reply),
    Map(BTreeMap<String, Reply>),
}

impl InfoValue {
    #[must_use]
    pub fn as_scalar(&self) -> Option<String> {
        match self {
            InfoValue::Value(reply) => reply.as_scalar(),
            InfoValue::Map(_) => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&BTreeMap<String, Reply>> {
        match self {
            InfoValue::Map(map) => Some(map),
            InfoValue::Value(_) => None,
        }
    }
}

/// One FT.SUGGET entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub string: String,
    pub score: Option<String>,
    pub payload: Option<String>,
}

fn malformed(entry: &'static str, detail: impl Into<String>) -> CodecError {
    let detail = detail.into();
    warn!(entry, detail = %detail, "Malformed reply");
    metrics::record_decode_error(entry);
    CodecError::MalformedReply(format!("{}: {}", entry, detail))
}

fn scalar(value: &Reply, entry: &'static str, what: &str) -> Result<String, CodecError> {
    value
        .as_scalar()
        .ok_or_else(|| malformed(entry, format!("{} is not a string: {:?}", what, value)))
}

fn string_fields(sequence: &[Reply]) -> Result<BTreeMap<String, String>, CodecError> {
    ReplyParser::pair_fields(sequence)?
        .into_iter()
        .map(|(name, value)| -> Result<(String, String), CodecError> {
            let value = scalar(&value, "pair_fields", &format!("value of field '{}'", name))?;
            Ok((name, value))
        })
        .collect()
}

/// Reply-to-structure decoder
pub struct ReplyParser;

impl ReplyParser {
    /// Pair a flat `[name, value, name, value, ...]` list. Later names win.
    pub fn pair_fields(sequence: &[Reply]) -> Result<BTreeMap<String, Reply>, CodecError> {
        if sequence.len() % 2 != 0 {
            return Err(malformed(
                "pair_fields",
                format!("odd-length field list ({} elements)", sequence.len()),
            ));
        }

        let mut fields = BTreeMap::new();
        for pair in sequence.chunks_exact(2) {
            let name = scalar(&pair[0], "pair_fields", "field name")?;
            fields.insert(name, pair[1].clone());
        }
        Ok(fields)
    }

    /// Field list of one document, or `None` for nil (missing document).
    pub fn member(fields: &Reply, id: &str) -> Result<Option<Record>, CodecError> {
        match fields {
            Reply::Nil => Ok(None),
            Reply::Array(items) => Ok(Some(Record::from_fields(string_fields(items)?, id))),
            other => Err(malformed(
                "member",
                format!("expected a field list or nil, got {:?}", other),
            )),
        }
    }

    /// FT.MGET: one entry per requested id, in request order.
    pub fn members<S: AsRef<str>>(reply: &Reply, ids: &[S]) -> Result<Vec<Option<Record>>, CodecError> {
        let items = reply
            .as_array()
            .ok_or_else(|| malformed("mget", "expected an array"))?;
        if items.len() != ids.len() {
            return Err(malformed(
                "mget",
                format!("{} entries for {} ids", items.len(), ids.len()),
            ));
        }

        items
            .iter()
            .zip(ids)
            .map(|(fields, id)| Self::member(fields, id.as_ref()))
            .collect()
    }

    /// Elements per hit for the given FT.SEARCH options.
    #[must_use]
    pub fn chunk_size(config: &Configuration) -> usize {
        let mut size = 2;
        if config.is_set("withscores") {
            size += 1;
        }
        if config.is_set("nocontent") {
            size -= 1;
        }
        size
    }

    /// FT.SEARCH: the hits, count discarded.
    pub fn search(reply: &Reply, config: &Configuration) -> Result<Vec<Record>, CodecError> {
        Self::search_results(reply, config).map(|results| results.records)
    }

    /// FT.SEARCH: the hits plus total match count.
    pub fn search_results(reply: &Reply, config: &Configuration) -> Result<SearchResults, CodecError> {
        let items = reply
            .as_array()
            .ok_or_else(|| malformed("search", "expected an array"))?;
        let (count, hits) = items
            .split_first()
            .ok_or_else(|| malformed("search", "missing document count"))?;
        let total = count
            .as_integer()
            .ok_or_else(|| malformed("search", format!("document count is not an integer: {:?}", count)))?;

        let size = Self::chunk_size(config);
        if hits.len() % size != 0 {
            return Err(malformed(
                "search",
                format!("{} elements do not split into chunks of {}", hits.len(), size),
            ));
        }

        let mut records = Vec::with_capacity(hits.len() / size);
        for chunk in hits.chunks_exact(size) {
            if let Some(record) = ReplyChunk::classify(chunk)?.into_record()? {
                records.push(record);
            }
        }

        Ok(SearchResults { total, records })
    }

    /// FT.INFO
    pub fn info(reply: &Reply) -> Result<BTreeMap<String, InfoValue>, CodecError> {
        let items = reply
            .as_array()
            .ok_or_else(|| malformed("info", "expected an array"))?;

        Self::pair_fields(items)?
            .into_iter()
            .map(|(name, value)| -> Result<(String, InfoValue), CodecError> {
                let value = match value {
                    Reply::Array(nested) if name == "gc_stats" => {
                        InfoValue::Map(Self::pair_fields(&nested)?)
                    }
                    other => InfoValue::Value(other),
                };
                Ok((name, value))
            })
            .collect()
    }

    /// FT.SUGGET: `[string, score?, payload?, ...]`, sized by WITHSCORES / WITHPAYLOADS.
    pub fn suggestions(reply: &Reply, config: &Configuration) -> Result<Vec<Suggestion>, CodecError> {
        let items = match reply {
            Reply::Nil => return Ok(Vec::new()),
            Reply::Array(items) => items,
            other => {
                return Err(malformed(
                    "suggestions",
                    format!("expected an array, got {:?}", other),
                ))
            }
        };

        let with_scores = config.is_set("withscores");
        let with_payloads = config.is_set("withpayloads");
        let size = 1 + usize::from(with_scores) + usize::from(with_payloads);
        if items.len() % size != 0 {
            return Err(malformed(
                "suggestions",
                format!("{} elements do not split into chunks of {}", items.len(), size),
            ));
        }

        items
            .chunks_exact(size)
            .map(|chunk| -> Result<Suggestion, CodecError> {
                let string = scalar(&chunk[0], "suggestions", "suggestion")?;
                let score = if with_scores {
                    Some(scalar(&chunk[1], "suggestions", "score")?)
                } else {
                    None
                };
                // Payload is always last; nil means none was stored
                let payload = match &chunk[size - 1] {
                    _ if !with_payloads => None,
                    Reply::Nil => None,
                    other => Some(scalar(other, "suggestions", "payload")?),
                };

                Ok(Suggestion { string, score, payload })
            })
            .collect()
    }
}
