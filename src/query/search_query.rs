//! The immutable, typed form of a raw search string.

use std::collections::HashMap;

use serde::Serialize;

/// Filter keys shared by the parser, the candidate selector and the filter
/// pipeline.
pub mod filter_keys {
    /// Minimum question score (numeric).
    pub const SCORE: &str = "score";
    /// Minimum answer count (numeric).
    pub const ANSWERS: &str = "answers";
    /// Minimum view count (numeric).
    pub const VIEWS: &str = "views";
    /// Author id or display name (string).
    pub const USER: &str = "user";
    /// Single explicit tag (string).
    pub const TAG: &str = "tag";
    /// Accepted-answer requirement (string). The parser never emits this key;
    /// it is honored when present in a directly constructed query.
    pub const IS_ACCEPTED: &str = "isaccepted";
}

/// A parsed search string: keyword phrases, numeric filters, string filters
/// and tag tokens.
///
/// Built once per request by [`QueryParser`](crate::query::QueryParser) (or
/// directly via [`SearchQuery::new`]) and read-only afterwards. Keywords and
/// tags preserve input order; filter maps keep the last occurrence of a
/// repeated key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    keywords: Vec<String>,
    numeric_filters: HashMap<String, i64>,
    string_filters: HashMap<String, String>,
    tags: Vec<String>,
}

impl SearchQuery {
    /// Assemble a query from its four collections.
    pub fn new(
        keywords: Vec<String>,
        numeric_filters: HashMap<String, i64>,
        string_filters: HashMap<String, String>,
        tags: Vec<String>,
    ) -> Self {
        SearchQuery {
            keywords,
            numeric_filters,
            string_filters,
            tags,
        }
    }

    /// A query with no constraints at all.
    pub fn empty() -> Self {
        SearchQuery::default()
    }

    /// Quoted keyword phrases, in input order, duplicates allowed.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// All numeric filters.
    pub fn numeric_filters(&self) -> &HashMap<String, i64> {
        &self.numeric_filters
    }

    /// The numeric filter for `key`, if present.
    pub fn numeric_filter(&self, key: &str) -> Option<i64> {
        self.numeric_filters.get(key).copied()
    }

    /// All string filters.
    pub fn string_filters(&self) -> &HashMap<String, String> {
        &self.string_filters
    }

    /// The string filter for `key`, if present.
    pub fn string_filter(&self, key: &str) -> Option<&str> {
        self.string_filters.get(key).map(String::as_str)
    }

    /// Normalized tag tokens, in input order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// True when all four collections are empty.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
            && self.numeric_filters.is_empty()
            && self.string_filters.is_empty()
            && self.tags.is_empty()
    }
}
