// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Command options
//!
//! Every FT.* command that takes options is one [`OperationKind`]. Each kind
//! has a fixed, ordered table of boolean flags and list-valued params:
//!
//! ```text
//! kind           flags                                              params
//! create_index   nooffsets nofreqs nohl nofields                    stopwords
//! add_document   nosave replace partial                             language
//! search         nocontent inorder nostopwords withscores verbatim  return limit infields inkeys slop
//!                                                                   filter geofilter language expander
//!                                                                   scorer sortby
//! aggregate      -                                                  groupby sortby apply limit
//! suggest_add    incr                                               payload
//! suggest_get    withscores withpayloads fuzzy                      max
//! ```
//!
//! Callers either fill a dynamic [`Configuration`] or use the typed option
//! structs ([`SearchOptions`], [`AddOptions`], ...), which lower into one.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CodecError;

const CREATE_INDEX_FLAGS: &[&str] = &["nooffsets", "nofreqs", "nohl", "nofields"];
const CREATE_INDEX_PARAMS: &[&str] = &["stopwords"];

const ADD_DOCUMENT_FLAGS: &[&str] = &["nosave", "replace", "partial"];
const ADD_DOCUMENT_PARAMS: &[&str] = &["language"];

const SEARCH_FLAGS: &[&str] = &["nocontent", "inorder", "nostopwords", "withscores", "verbatim"];
const SEARCH_PARAMS: &[&str] = &[
    "return", "limit", "infields", "inkeys", "slop", "filter", "geofilter", "language", "expander",
    "scorer", "sortby",
];

const AGGREGATE_FLAGS: &[&str] = &[];
const AGGREGATE_PARAMS: &[&str] = &["groupby", "sortby", "apply", "limit"];

const SUGGEST_ADD_FLAGS: &[&str] = &["incr"];
const SUGGEST_ADD_PARAMS: &[&str] = &["payload"];

const SUGGEST_GET_FLAGS: &[&str] = &["withscores", "withpayloads", "fuzzy"];
const SUGGEST_GET_PARAMS: &[&str] = &["max"];

/// Commands whose options go through the argument builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// FT.CREATE
    CreateIndex,
    /// FT.ADD / FT.ADDHASH
    AddDocument,
    /// FT.SEARCH
    Search,
    /// FT.AGGREGATE
    Aggregate,
    /// FT.SUGADD
    SuggestAdd,
    /// FT.SUGGET
    SuggestGet,
}

impl OperationKind {
    pub const ALL: [OperationKind; 6] = [
        OperationKind::CreateIndex,
        OperationKind::AddDocument,
        OperationKind::Search,
        OperationKind::Aggregate,
        OperationKind::SuggestAdd,
        OperationKind::SuggestGet,
    ];

    /// Recognized flag names, in emission order.
    #[must_use]
    pub fn flags(self) -> &'static [&'static str] {
        match self {
            OperationKind::CreateIndex => CREATE_INDEX_FLAGS,
            OperationKind::AddDocument => ADD_DOCUMENT_FLAGS,
            OperationKind::Search => SEARCH_FLAGS,
            OperationKind::Aggregate => AGGREGATE_FLAGS,
            OperationKind::SuggestAdd => SUGGEST_ADD_FLAGS,
            OperationKind::SuggestGet => SUGGEST_GET_FLAGS,
        }
    }

    /// Recognized param names, in emission order.
    #[must_use]
    pub fn params(self) -> &'static [&'static str] {
        match self {
            OperationKind::CreateIndex => CREATE_INDEX_PARAMS,
            OperationKind::AddDocument => ADD_DOCUMENT_PARAMS,
            OperationKind::Search => SEARCH_PARAMS,
            OperationKind::Aggregate => AGGREGATE_PARAMS,
            OperationKind::SuggestAdd => SUGGEST_ADD_PARAMS,
            OperationKind::SuggestGet => SUGGEST_GET_PARAMS,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::CreateIndex => "create_index",
            OperationKind::AddDocument => "add_document",
            OperationKind::Search => "search",
            OperationKind::Aggregate => "aggregate",
            OperationKind::SuggestAdd => "suggest_add",
            OperationKind::SuggestGet => "suggest_get",
        }
    }

    /// Whether `name` is a flag or param of this kind (case-insensitive).
    #[must_use]
    pub fn recognizes(self, name: &str) -> bool {
        self.flags()
            .iter()
            .chain(self.params())
            .any(|known| known.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CodecError::InvalidOperation(s.to_string()))
    }
}

/// Value of one configuration entry.
///
/// Flags are truthy only for `Flag(true)`. A `Params` value is always
/// truthy, matching how a list-valued option reads as "set".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Params(Vec<String>),
}

impl OptionValue {
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Flag(set) => *set,
            OptionValue::Params(_) => true,
        }
    }

    /// Value tokens emitted after a param name. Flags carry none.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        match self {
            OptionValue::Flag(_) => &[],
            OptionValue::Params(values) => values,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(set: bool) -> Self {
        OptionValue::Flag(set)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(values: Vec<String>) -> Self {
        OptionValue::Params(values)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(values: Vec<&str>) -> Self {
        OptionValue::Params(values.into_iter().map(String::from).collect())
    }
}

/// Per-call option bag: option name → value.
///
/// Names are stored lower-case. Keys the target operation does not
/// recognize are kept but never emitted, so one configuration can be
/// shared across commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, OptionValue>", into = "HashMap<String, OptionValue>")]
pub struct Configuration {
    options: HashMap<String, OptionValue>,
}

impl From<HashMap<String, OptionValue>> for Configuration {
    fn from(options: HashMap<String, OptionValue>) -> Self {
        options.into_iter().collect()
    }
}

impl From<Configuration> for HashMap<String, OptionValue> {
    fn from(config: Configuration) -> Self {
        config.options
    }
}

impl Configuration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a boolean flag
    #[must_use]
    pub fn flag(mut self, name: impl AsRef<str>, set: bool) -> Self {
        self.insert(name, set);
        self
    }

    /// Set a list-valued param
    #[must_use]
    pub fn param<I, S>(mut self, name: impl AsRef<str>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        self.insert(name, values);
        self
    }

    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<OptionValue>) -> Option<OptionValue> {
        self.options
            .insert(name.as_ref().to_ascii_lowercase(), value.into())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(&name.to_ascii_lowercase())
    }

    /// True when `name` is present with a truthy value.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(OptionValue::is_truthy)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Recover the configuration that produced `tokens` for `kind`.
    ///
    /// Leading tokens naming a flag are flags; after that every token naming
    /// a param opens a new param and everything else is a value of the
    /// current one. A value spelled like a param name of the same kind is
    /// therefore read as that param.
    pub fn from_tokens<S: AsRef<str>>(kind: OperationKind, tokens: &[S]) -> Result<Self, CodecError> {
        let mut config = Configuration::new();
        let mut rest = tokens.iter().map(AsRef::<str>::as_ref).peekable();

        while let Some(token) = rest.peek() {
            match kind.flags().iter().find(|flag| token.eq_ignore_ascii_case(flag)) {
                Some(flag) => {
                    config.insert(flag, true);
                    rest.next();
                }
                None => break,
            }
        }

        let mut current: Option<(&str, Vec<String>)> = None;
        for token in rest {
            if let Some(param) = kind.params().iter().find(|param| token.eq_ignore_ascii_case(param)) {
                if let Some((name, values)) = current.take() {
                    config.insert(name, values);
                }
                current = Some((*param, Vec::new()));
            } else if let Some((_, values)) = current.as_mut() {
                values.push(token.to_string());
            } else {
                return Err(CodecError::UnrecognizedToken {
                    operation: kind.to_string(),
                    token: token.to_string(),
                });
            }
        }
        if let Some((name, values)) = current {
            config.insert(name, values);
        }

        Ok(config)
    }
}

impl<K: AsRef<str>, V: Into<OptionValue>> FromIterator<(K, V)> for Configuration {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut config = Configuration::new();
        for (name, value) in iter {
            config.insert(name, value);
        }
        config
    }
}

/// Typed options that lower into a [`Configuration`] for one operation kind.
pub trait ToConfiguration {
    const KIND: OperationKind;

    fn to_configuration(&self) -> Configuration;
}

fn put_flag(config: &mut Configuration, name: &str, value: Option<bool>) {
    if let Some(set) = value {
        config.insert(name, set);
    }
}

fn put_param(config: &mut Configuration, name: &str, value: &Option<Vec<String>>) {
    if let Some(values) = value {
        config.insert(name, values.clone());
    }
}

/// `[n, items...]`, the protocol's counted-list form.
fn counted<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let items: Vec<String> = items.into_iter().map(Into::into).collect();
    let mut out = Vec::with_capacity(items.len() + 1);
    out.push(items.len().to_string());
    out.extend(items);
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

/// Radius unit for GEOFILTER
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoUnit {
    Meters,
    Kilometers,
    Miles,
    Feet,
}

impl fmt::Display for GeoUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoUnit::Meters => write!(f, "m"),
            GeoUnit::Kilometers => write!(f, "km"),
            GeoUnit::Miles => write!(f, "mi"),
            GeoUnit::Feet => write!(f, "ft"),
        }
    }
}

/// FT.CREATE options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateOptions {
    pub nooffsets: Option<bool>,
    pub nofreqs: Option<bool>,
    pub nohl: Option<bool>,
    pub nofields: Option<bool>,
    pub stopwords: Option<Vec<String>>,
}

impl CreateOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn no_offsets(mut self) -> Self {
        self.nooffsets = Some(true);
        self
    }

    #[must_use]
    pub fn no_freqs(mut self) -> Self {
        self.nofreqs = Some(true);
        self
    }

    #[must_use]
    pub fn no_highlight(mut self) -> Self {
        self.nohl = Some(true);
        self
    }

    #[must_use]
    pub fn no_fields(mut self) -> Self {
        self.nofields = Some(true);
        self
    }

    /// Custom stopword list: `STOPWORDS n w...`. An empty list disables stopwords.
    #[must_use]
    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = Some(counted(words));
        self
    }
}

impl ToConfiguration for CreateOptions {
    const KIND: OperationKind = OperationKind::CreateIndex;

    fn to_configuration(&self) -> Configuration {
        let mut config = Configuration::new();
        put_flag(&mut config, "nooffsets", self.nooffsets);
        put_flag(&mut config, "nofreqs", self.nofreqs);
        put_flag(&mut config, "nohl", self.nohl);
        put_flag(&mut config, "nofields", self.nofields);
        put_param(&mut config, "stopwords", &self.stopwords);
        config
    }
}

/// FT.ADD / FT.ADDHASH options.
///
/// `score` is positional on the wire and never goes through the builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddOptions {
    pub score: Option<String>,
    pub nosave: Option<bool>,
    pub replace: Option<bool>,
    pub partial: Option<bool>,
    pub language: Option<Vec<String>>,
}

impl AddOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document score, 0.0 to 1.0
    #[must_use]
    pub fn score(mut self, score: f64) -> Self {
        self.score = Some(score.to_string());
        self
    }

    #[must_use]
    pub fn no_save(mut self) -> Self {
        self.nosave = Some(true);
        self
    }

    #[must_use]
    pub fn replace(mut self) -> Self {
        self.replace = Some(true);
        self
    }

    /// Partial update. Only meaningful together with [`AddOptions::replace`].
    #[must_use]
    pub fn partial(mut self) -> Self {
        self.partial = Some(true);
        self
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(vec![language.into()]);
        self
    }
}

impl ToConfiguration for AddOptions {
    const KIND: OperationKind = OperationKind::AddDocument;

    fn to_configuration(&self) -> Configuration {
        let mut config = Configuration::new();
        put_flag(&mut config, "nosave", self.nosave);
        put_flag(&mut config, "replace", self.replace);
        put_flag(&mut config, "partial", self.partial);
        put_param(&mut config, "language", &self.language);
        config
    }
}

/// FT.SEARCH options.
///
/// ```rust
/// use redisearch_client::search::{SearchOptions, SortOrder};
///
/// let options = SearchOptions::new()
///     .with_scores()
///     .return_fields(["title"])
///     .sort_by("year", SortOrder::Desc)
///     .limit(0, 20);
/// assert_eq!(options.limit, Some(vec!["0".to_string(), "20".to_string()]));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    pub nocontent: Option<bool>,
    pub inorder: Option<bool>,
    pub nostopwords: Option<bool>,
    pub withscores: Option<bool>,
    pub verbatim: Option<bool>,
    pub return_fields: Option<Vec<String>>,
    pub limit: Option<Vec<String>>,
    pub infields: Option<Vec<String>>,
    pub inkeys: Option<Vec<String>>,
    pub slop: Option<Vec<String>>,
    pub filter: Option<Vec<String>>,
    pub geofilter: Option<Vec<String>>,
    pub language: Option<Vec<String>>,
    pub expander: Option<Vec<String>>,
    pub scorer: Option<Vec<String>>,
    pub sortby: Option<Vec<String>>,
}

impl SearchOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return ids only
    #[must_use]
    pub fn no_content(mut self) -> Self {
        self.nocontent = Some(true);
        self
    }

    #[must_use]
    pub fn in_order(mut self) -> Self {
        self.inorder = Some(true);
        self
    }

    #[must_use]
    pub fn no_stopwords(mut self) -> Self {
        self.nostopwords = Some(true);
        self
    }

    /// Include the relevance score of each hit
    #[must_use]
    pub fn with_scores(mut self) -> Self {
        self.withscores = Some(true);
        self
    }

    /// Disable stemming
    #[must_use]
    pub fn verbatim(mut self) -> Self {
        self.verbatim = Some(true);
        self
    }

    /// `RETURN n field...`
    ///
    /// An empty list is `RETURN 0`, which the engine answers with ids only,
    /// so it also sets NOCONTENT to keep the reply decodable.
    #[must_use]
    pub fn return_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = counted(fields);
        if tokens.len() == 1 {
            self.nocontent = Some(true);
        }
        self.return_fields = Some(tokens);
        self
    }

    /// `LIMIT offset num`
    #[must_use]
    pub fn limit(mut self, offset: usize, num: usize) -> Self {
        self.limit = Some(vec![offset.to_string(), num.to_string()]);
        self
    }

    /// `INFIELDS n field...`
    #[must_use]
    pub fn in_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.infields = Some(counted(fields));
        self
    }

    /// `INKEYS n key...`
    #[must_use]
    pub fn in_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inkeys = Some(counted(keys));
        self
    }

    #[must_use]
    pub fn slop(mut self, slop: u32) -> Self {
        self.slop = Some(vec![slop.to_string()]);
        self
    }

    /// Numeric filter. Bounds are passed through, so `-inf`, `+inf` and
    /// exclusive `(5` forms work.
    #[must_use]
    pub fn filter(
        mut self,
        field: impl Into<String>,
        min: impl Into<String>,
        max: impl Into<String>,
    ) -> Self {
        self.filter = Some(vec![field.into(), min.into(), max.into()]);
        self
    }

    #[must_use]
    pub fn geo_filter(
        mut self,
        field: impl Into<String>,
        lon: f64,
        lat: f64,
        radius: f64,
        unit: GeoUnit,
    ) -> Self {
        self.geofilter = Some(vec![
            field.into(),
            lon.to_string(),
            lat.to_string(),
            radius.to_string(),
            unit.to_string(),
        ]);
        self
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(vec![language.into()]);
        self
    }

    #[must_use]
    pub fn expander(mut self, expander: impl Into<String>) -> Self {
        self.expander = Some(vec![expander.into()]);
        self
    }

    #[must_use]
    pub fn scorer(mut self, scorer: impl Into<String>) -> Self {
        self.scorer = Some(vec![scorer.into()]);
        self
    }

    #[must_use]
    pub fn sort_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sortby = Some(vec![field.into(), order.to_string()]);
        self
    }
}

impl ToConfiguration for SearchOptions {
    const KIND: OperationKind = OperationKind::Search;

    fn to_configuration(&self) -> Configuration {
        let mut config = Configuration::new();
        put_flag(&mut config, "nocontent", self.nocontent);
        put_flag(&mut config, "inorder", self.inorder);
        put_flag(&mut config, "nostopwords", self.nostopwords);
        put_flag(&mut config, "withscores", self.withscores);
        put_flag(&mut config, "verbatim", self.verbatim);
        put_param(&mut config, "return", &self.return_fields);
        put_param(&mut config, "limit", &self.limit);
        put_param(&mut config, "infields", &self.infields);
        put_param(&mut config, "inkeys", &self.inkeys);
        put_param(&mut config, "slop", &self.slop);
        put_param(&mut config, "filter", &self.filter);
        put_param(&mut config, "geofilter", &self.geofilter);
        put_param(&mut config, "language", &self.language);
        put_param(&mut config, "expander", &self.expander);
        put_param(&mut config, "scorer", &self.scorer);
        put_param(&mut config, "sortby", &self.sortby);
        config
    }
}

/// FT.AGGREGATE options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateOptions {
    pub groupby: Option<Vec<String>>,
    pub sortby: Option<Vec<String>>,
    pub apply: Option<Vec<String>>,
    pub limit: Option<Vec<String>>,
}

impl AggregateOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `GROUPBY n @prop...`. Follow with [`AggregateOptions::reduce`].
    #[must_use]
    pub fn group_by<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groupby = Some(counted(properties));
        self
    }

    /// Append `REDUCE func n arg... [AS alias]` to the current GROUPBY.
    #[must_use]
    pub fn reduce<I, S>(mut self, function: impl Into<String>, args: I, alias: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let group = self.groupby.get_or_insert_with(|| vec!["0".to_string()]);
        group.push("REDUCE".to_string());
        group.push(function.into());
        group.extend(counted(args));
        if let Some(alias) = alias {
            group.push("AS".to_string());
            group.push(alias.to_string());
        }
        self
    }

    /// `SORTBY n @prop ASC|DESC ...`
    #[must_use]
    pub fn sort_by(mut self, properties: &[(&str, SortOrder)]) -> Self {
        let tokens = properties
            .iter()
            .flat_map(|(property, order)| [property.to_string(), order.to_string()]);
        self.sortby = Some(counted(tokens));
        self
    }

    /// `APPLY expr AS alias`
    #[must_use]
    pub fn apply(mut self, expression: impl Into<String>, alias: impl Into<String>) -> Self {
        self.apply = Some(vec![expression.into(), "AS".to_string(), alias.into()]);
        self
    }

    #[must_use]
    pub fn limit(mut self, offset: usize, num: usize) -> Self {
        self.limit = Some(vec![offset.to_string(), num.to_string()]);
        self
    }
}

impl ToConfiguration for AggregateOptions {
    const KIND: OperationKind = OperationKind::Aggregate;

    fn to_configuration(&self) -> Configuration {
        let mut config = Configuration::new();
        put_param(&mut config, "groupby", &self.groupby);
        put_param(&mut config, "sortby", &self.sortby);
        put_param(&mut config, "apply", &self.apply);
        put_param(&mut config, "limit", &self.limit);
        config
    }
}

/// FT.SUGADD options. `score` is positional, like [`AddOptions::score`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestAddOptions {
    pub score: Option<String>,
    pub incr: Option<bool>,
    pub payload: Option<Vec<String>>,
}

impl SuggestAddOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn score(mut self, score: f64) -> Self {
        self.score = Some(score.to_string());
        self
    }

    /// Add to the existing score instead of replacing it
    #[must_use]
    pub fn incr(mut self) -> Self {
        self.incr = Some(true);
        self
    }

    #[must_use]
    pub fn payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(vec![payload.into()]);
        self
    }
}

impl ToConfiguration for SuggestAddOptions {
    const KIND: OperationKind = OperationKind::SuggestAdd;

    fn to_configuration(&self) -> Configuration {
        let mut config = Configuration::new();
        put_flag(&mut config, "incr", self.incr);
        put_param(&mut config, "payload", &self.payload);
        config
    }
}

/// FT.SUGGET options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestGetOptions {
    pub withscores: Option<bool>,
    pub withpayloads: Option<bool>,
    pub fuzzy: Option<bool>,
    pub max: Option<Vec<String>>,
}

impl SuggestGetOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scores(mut self) -> Self {
        self.withscores = Some(true);
        self
    }

    #[must_use]
    pub fn with_payloads(mut self) -> Self {
        self.withpayloads = Some(true);
        self
    }

    #[must_use]
    pub fn fuzzy(mut self) -> Self {
        self.fuzzy = Some(true);
        self
    }

    #[must_use]
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(vec![max.to_string()]);
        self
    }
}

impl ToConfiguration for SuggestGetOptions {
    const KIND: OperationKind = OperationKind::SuggestGet;

    fn to_configuration(&self) -> Configuration {
        let mut config = Configuration::new();
        put_flag(&mut config, "withscores", self.withscores);
        put_flag(&mut config, "withpayloads", self.withpayloads);
        put_flag(&mut config, "fuzzy", self.fuzzy);
        put_param(&mut config, "max", &self.max);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_kind_from_str() {
        assert_eq!("search".parse::<OperationKind>().unwrap(), OperationKind::Search);
        assert_eq!("SUGGEST_GET".parse::<OperationKind>().unwrap(), OperationKind::SuggestGet);
        assert_eq!(
            "explain".parse::<OperationKind>(),
            Err(CodecError::InvalidOperation("explain".into()))
        );
    }

    #[test]
    fn test_tables_have_no_duplicates() {
        for kind in OperationKind::ALL {
            let mut names: Vec<&str> = kind.flags().iter().chain(kind.params()).copied().collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "duplicate option name in {kind}");
        }
    }

    #[test]
    fn test_recognizes() {
        assert!(OperationKind::Search.recognizes("WITHSCORES"));
        assert!(OperationKind::Search.recognizes("sortby"));
        assert!(!OperationKind::Search.recognizes("incr"));
        assert!(!OperationKind::Aggregate.recognizes("withscores"));
    }

    #[test]
    fn test_configuration_lowercases_names() {
        let config = Configuration::new().flag("WithScores", true);
        assert!(config.is_set("withscores"));
        assert!(config.is_set("WITHSCORES"));
    }

    #[test]
    fn test_false_and_missing_are_unset() {
        let config = Configuration::new().flag("nocontent", false);
        assert!(!config.is_set("nocontent"));
        assert!(!config.is_set("verbatim"));
    }

    #[test]
    fn test_params_are_truthy() {
        let config = Configuration::new().param("limit", ["0", "10"]);
        assert!(config.is_set("limit"));
        assert_eq!(config.get("limit").unwrap().tokens(), ["0", "10"]);
    }

    #[test]
    fn test_from_iterator() {
        let config: Configuration = [
            ("withscores", OptionValue::Flag(true)),
            ("limit", OptionValue::from(vec!["0", "5"])),
        ]
        .into_iter()
        .collect();
        assert_eq!(config.len(), 2);
        assert!(config.is_set("withscores"));
    }

    #[test]
    fn test_configuration_from_json() {
        let config: Configuration = serde_json::from_str(
            r#"{"NOCONTENT": true, "verbatim": false, "limit": ["0", "10"]}"#,
        )
        .unwrap();
        assert!(config.is_set("nocontent"));
        assert!(!config.is_set("verbatim"));
        assert_eq!(config.get("limit"), Some(&OptionValue::Params(vec!["0".into(), "10".into()])));

        let json = serde_json::to_value(&config).unwrap();
        let back: Configuration = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_from_tokens() {
        let tokens = ["NOCONTENT", "WITHSCORES", "LIMIT", "0", "10", "SORTBY", "year", "DESC"];
        let config = Configuration::from_tokens(OperationKind::Search, &tokens).unwrap();
        let expected = Configuration::new()
            .flag("nocontent", true)
            .flag("withscores", true)
            .param("limit", ["0", "10"])
            .param("sortby", ["year", "DESC"]);
        assert_eq!(config, expected);
    }

    #[test]
    fn test_from_tokens_rejects_stray_value() {
        let err = Configuration::from_tokens(OperationKind::Search, &["0", "LIMIT"]).unwrap_err();
        assert_eq!(
            err,
            CodecError::UnrecognizedToken {
                operation: "search".into(),
                token: "0".into()
            }
        );
    }

    #[test]
    fn test_search_options_lowering() {
        let config = SearchOptions::new()
            .no_content()
            .return_fields(["title", "body"])
            .filter("year", "2000", "+inf")
            .to_configuration();

        assert!(config.is_set("nocontent"));
        assert!(!config.is_set("withscores"));
        assert_eq!(config.get("return").unwrap().tokens(), ["2", "title", "body"]);
        assert_eq!(config.get("filter").unwrap().tokens(), ["year", "2000", "+inf"]);
    }

    #[test]
    fn test_empty_return_fields_implies_nocontent() {
        let config = SearchOptions::new().return_fields(Vec::<String>::new()).to_configuration();
        assert!(config.is_set("nocontent"));
        assert_eq!(config.get("return").unwrap().tokens(), ["0"]);

        let config = SearchOptions::new().return_fields(["title"]).to_configuration();
        assert!(!config.is_set("nocontent"));
    }

    #[test]
    fn test_explicit_false_lowers_to_false() {
        let options = SearchOptions {
            withscores: Some(false),
            ..Default::default()
        };
        let config = options.to_configuration();
        assert_eq!(config.get("withscores"), Some(&OptionValue::Flag(false)));
        assert!(!config.is_set("withscores"));
    }

    #[test]
    fn test_geo_filter_tokens() {
        let config = SearchOptions::new()
            .geo_filter("location", -0.1, 51.5, 10.0, GeoUnit::Kilometers)
            .to_configuration();
        assert_eq!(
            config.get("geofilter").unwrap().tokens(),
            ["location", "-0.1", "51.5", "10", "km"]
        );
    }

    #[test]
    fn test_aggregate_group_by_with_reducers() {
        let options = AggregateOptions::new()
            .group_by(["@author"])
            .reduce("COUNT", Vec::<String>::new(), Some("books"))
            .reduce("AVG", ["@year"], None)
            .sort_by(&[("@books", SortOrder::Desc)])
            .apply("upper(@author)", "name");

        assert_eq!(
            options.groupby.unwrap(),
            ["1", "@author", "REDUCE", "COUNT", "0", "AS", "books", "REDUCE", "AVG", "1", "@year"]
        );
        assert_eq!(options.sortby.unwrap(), ["2", "@books", "DESC"]);
        assert_eq!(options.apply.unwrap(), ["upper(@author)", "AS", "name"]);
    }

    #[test]
    fn test_create_stopwords_counted() {
        let options = CreateOptions::new().stopwords(["a", "the"]);
        assert_eq!(options.stopwords.unwrap(), ["2", "a", "the"]);

        let disabled = CreateOptions::new().stopwords(Vec::<String>::new());
        assert_eq!(disabled.stopwords.unwrap(), ["0"]);
    }

    #[test]
    fn test_add_options_score_is_not_an_option() {
        let options = AddOptions::new().score(0.5).replace().language("german");
        let config = options.to_configuration();
        assert_eq!(options.score.as_deref(), Some("0.5"));
        assert!(config.get("score").is_none());
        assert!(config.is_set("replace"));
        assert_eq!(config.get("language").unwrap().tokens(), ["german"]);
    }

    #[test]
    fn test_suggest_options_lowering() {
        let add = SuggestAddOptions::new().incr().payload("p1").to_configuration();
        assert!(add.is_set("incr"));
        assert_eq!(add.get("payload").unwrap().tokens(), ["p1"]);

        let get = SuggestGetOptions::new().fuzzy().max(3).to_configuration();
        assert!(get.is_set("fuzzy"));
        assert_eq!(get.get("max").unwrap().tokens(), ["3"]);
    }
}
