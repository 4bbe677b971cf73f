// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Argument Builder
//!
//! Expands a [`Configuration`] into the option tokens of one FT.* command.
//!
//! ```text
//! FT.SEARCH idx "hello"  NOCONTENT WITHSCORES  LIMIT 0 10 SORTBY year DESC
//!                        └──── flags ───────┘  └────────── params ───────┘
//! ```
//!
//! Flags come first, then params, each in the kind's declared order. The
//! configuration's own iteration order never leaks into the output.

use super::error::CodecError;
use super::options::{Configuration, OperationKind, OptionValue, ToConfiguration};

/// Option-to-token encoder
pub struct ArgumentBuilder;

impl ArgumentBuilder {
    /// Build the option tokens for `kind`.
    ///
    /// Unrecognized keys are ignored. Param values are passed through
    /// untouched; the engine validates them. A param holding a flag value
    /// has nothing to send and is skipped.
    pub fn build(kind: OperationKind, config: &Configuration) -> Vec<String> {
        let mut tokens = Vec::new();

        for flag in kind.flags() {
            if config.is_set(flag) {
                tokens.push(flag.to_ascii_uppercase());
            }
        }

        for param in kind.params() {
            if let Some(OptionValue::Params(values)) = config.get(param) {
                tokens.push(param.to_ascii_uppercase());
                tokens.extend(values.iter().cloned());
            }
        }

        tokens
    }

    /// Build for an operation given by name, e.g. `"search"`.
    pub fn build_named(kind: &str, config: &Configuration) -> Result<Vec<String>, CodecError> {
        let kind: OperationKind = kind.parse()?;
        Ok(Self::build(kind, config))
    }

    /// Build from typed options
    pub fn build_options<O: ToConfiguration>(options: &O) -> Vec<String> {
        Self::build(O::KIND, &options.to_configuration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::options::{
        AddOptions, AggregateOptions, CreateOptions, SearchOptions, SortOrder, SuggestAddOptions,
        SuggestGetOptions,
    };

    #[test]
    fn test_empty_config_builds_nothing() {
        for kind in OperationKind::ALL {
            assert!(ArgumentBuilder::build(kind, &Configuration::new()).is_empty());
        }
    }

    #[test]
    fn test_flags_follow_declared_order() {
        // Inserted in reverse of declaration order
        let config = Configuration::new()
            .flag("verbatim", true)
            .flag("withscores", true)
            .flag("nocontent", true);

        let tokens = ArgumentBuilder::build(OperationKind::Search, &config);
        assert_eq!(tokens, ["NOCONTENT", "WITHSCORES", "VERBATIM"]);
    }

    #[test]
    fn test_flags_then_params() {
        let config = Configuration::new()
            .param("sortby", ["year", "DESC"])
            .param("limit", ["0", "10"])
            .flag("withscores", true);

        let tokens = ArgumentBuilder::build(OperationKind::Search, &config);
        assert_eq!(tokens, ["WITHSCORES", "LIMIT", "0", "10", "SORTBY", "year", "DESC"]);
    }

    #[test]
    fn test_false_flag_is_omitted() {
        let config = Configuration::new()
            .flag("nocontent", false)
            .flag("inorder", true);

        let tokens = ArgumentBuilder::build(OperationKind::Search, &config);
        assert_eq!(tokens, ["INORDER"]);
    }

    #[test]
    fn test_param_with_flag_value_is_skipped() {
        let config = Configuration::new()
            .flag("limit", true)
            .flag("slop", false)
            .flag("withscores", true);
        assert_eq!(ArgumentBuilder::build(OperationKind::Search, &config), ["WITHSCORES"]);
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let config = Configuration::new()
            .flag("incr", true)
            .flag("bogus", true)
            .param("payload", ["x"])
            .flag("withscores", true);

        let tokens = ArgumentBuilder::build(OperationKind::Search, &config);
        assert_eq!(tokens, ["WITHSCORES"]);
    }

    #[test]
    fn test_shared_config_across_kinds() {
        let config = Configuration::new()
            .flag("withscores", true)
            .flag("fuzzy", true)
            .param("limit", ["0", "5"])
            .param("max", ["3"]);

        assert_eq!(
            ArgumentBuilder::build(OperationKind::Search, &config),
            ["WITHSCORES", "LIMIT", "0", "5"]
        );
        assert_eq!(
            ArgumentBuilder::build(OperationKind::SuggestGet, &config),
            ["WITHSCORES", "FUZZY", "MAX", "3"]
        );
        assert_eq!(
            ArgumentBuilder::build(OperationKind::Aggregate, &config),
            ["LIMIT", "0", "5"]
        );
    }

    #[test]
    fn test_param_values_keep_caller_order() {
        let config = Configuration::new().param("return", ["3", "c", "a", "b"]);
        let tokens = ArgumentBuilder::build(OperationKind::Search, &config);
        assert_eq!(tokens, ["RETURN", "3", "c", "a", "b"]);
    }

    #[test]
    fn test_param_values_are_not_validated() {
        let config = Configuration::new().param("limit", ["ten", "-1"]);
        let tokens = ArgumentBuilder::build(OperationKind::Search, &config);
        assert_eq!(tokens, ["LIMIT", "ten", "-1"]);
    }

    #[test]
    fn test_repeated_builds_are_identical() {
        let config = Configuration::new()
            .flag("nostopwords", true)
            .param("inkeys", ["2", "a", "b"])
            .param("scorer", ["BM25"]);

        let first = ArgumentBuilder::build(OperationKind::Search, &config);
        for _ in 0..10 {
            assert_eq!(ArgumentBuilder::build(OperationKind::Search, &config), first);
        }
    }

    #[test]
    fn test_build_named() {
        let config = Configuration::new().flag("incr", true);
        assert_eq!(
            ArgumentBuilder::build_named("suggest_add", &config).unwrap(),
            ["INCR"]
        );
        assert_eq!(
            ArgumentBuilder::build_named("ft.frobnicate", &config),
            Err(CodecError::InvalidOperation("ft.frobnicate".into()))
        );
    }

    #[test]
    fn test_create_index_options() {
        let options = CreateOptions::new()
            .no_fields()
            .no_offsets()
            .stopwords(["foo", "bar"]);
        assert_eq!(
            ArgumentBuilder::build_options(&options),
            ["NOOFFSETS", "NOFIELDS", "STOPWORDS", "2", "foo", "bar"]
        );
    }

    #[test]
    fn test_add_document_options() {
        let options = AddOptions::new().partial().replace().language("french").score(0.3);
        assert_eq!(
            ArgumentBuilder::build_options(&options),
            ["REPLACE", "PARTIAL", "LANGUAGE", "french"]
        );
    }

    #[test]
    fn test_search_options_full() {
        let options = SearchOptions::new()
            .sort_by("price", SortOrder::Asc)
            .verbatim()
            .limit(10, 20)
            .in_fields(["title"])
            .return_fields(["title", "price"])
            .with_scores();

        assert_eq!(
            ArgumentBuilder::build_options(&options),
            [
                "WITHSCORES", "VERBATIM",
                "RETURN", "2", "title", "price",
                "LIMIT", "10", "20",
                "INFIELDS", "1", "title",
                "SORTBY", "price", "ASC",
            ]
        );
    }

    #[test]
    fn test_aggregate_options() {
        let options = AggregateOptions::new()
            .limit(0, 5)
            .group_by(["@brand"])
            .reduce("COUNT", Vec::<String>::new(), Some("n"));

        assert_eq!(
            ArgumentBuilder::build_options(&options),
            ["GROUPBY", "1", "@brand", "REDUCE", "COUNT", "0", "AS", "n", "LIMIT", "0", "5"]
        );
    }

    #[test]
    fn test_suggestion_options() {
        let add = SuggestAddOptions::new().payload("{\"id\":1}").incr().score(2.0);
        assert_eq!(
            ArgumentBuilder::build_options(&add),
            ["INCR", "PAYLOAD", "{\"id\":1}"]
        );

        let get = SuggestGetOptions::new().max(5).with_payloads().fuzzy().with_scores();
        assert_eq!(
            ArgumentBuilder::build_options(&get),
            ["WITHSCORES", "WITHPAYLOADS", "FUZZY", "MAX", "5"]
        );
    }

    #[test]
    fn test_round_trip_through_tokens() {
        let config = Configuration::new()
            .flag("withscores", true)
            .flag("inorder", true)
            .param("slop", ["1"])
            .param("language", ["english"]);

        let tokens = ArgumentBuilder::build(OperationKind::Search, &config);
        let recovered = Configuration::from_tokens(OperationKind::Search, &tokens).unwrap();
        assert_eq!(recovered, config);
        assert_eq!(ArgumentBuilder::build(OperationKind::Search, &recovered), tokens);
    }
}
