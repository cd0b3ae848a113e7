//! Query parser for converting raw search strings to structured queries.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::model::tag;
use crate::query::search_query::{SearchQuery, filter_keys};

lazy_static! {
    /// One token per match: a double-quoted run (group 1) or a maximal run of
    /// non-whitespace (group 2), scanned left to right.
    static ref TOKEN: Regex = Regex::new(r#""([^"]*)"|(\S+)"#).unwrap();
}

/// Keys whose values must parse as integers.
const NUMERIC_FILTER_KEYS: [&str; 3] = [
    filter_keys::SCORE,
    filter_keys::ANSWERS,
    filter_keys::VIEWS,
];

/// Keys whose values are taken as typed.
const STRING_FILTER_KEYS: [&str; 2] = [filter_keys::USER, filter_keys::TAG];

/// Parser for the platform's search-box syntax.
///
/// Parsing never fails: every token ends up somewhere. Malformed `key:value`
/// tokens (unknown key, non-integer value for a numeric key) degrade to
/// literal tags instead of being dropped or raising an error.
#[derive(Debug, Clone, Default)]
pub struct QueryParser;

impl QueryParser {
    /// Create a new query parser.
    pub fn new() -> Self {
        QueryParser
    }

    /// Parse a raw search string into a [`SearchQuery`].
    ///
    /// Supported syntax:
    /// - Quoted phrases: `"memory leak"` (always a keyword, colons included)
    /// - Numeric filters: `score:5`, `answers:2`, `views:100`
    /// - String filters: `user:42`, `user:alice`, `tag:java`
    /// - Bare tags: `java`, `memory-safety`
    ///
    /// Blank input yields the empty query.
    pub fn parse(&self, raw: &str) -> SearchQuery {
        if raw.trim().is_empty() {
            return SearchQuery::empty();
        }

        let mut keywords = Vec::new();
        let mut numeric_filters = HashMap::new();
        let mut string_filters = HashMap::new();
        let mut tags = Vec::new();

        for caps in TOKEN.captures_iter(raw) {
            if let Some(phrase) = caps.get(1) {
                // Quoted run: verbatim keyword phrase, blank ones skipped.
                if !phrase.as_str().trim().is_empty() {
                    keywords.push(phrase.as_str().to_string());
                }
                continue;
            }
            let token = match caps.get(2) {
                Some(m) => m.as_str(),
                None => continue,
            };

            if let Some((key, value)) = split_filter_token(token) {
                if NUMERIC_FILTER_KEYS.contains(&key.as_str()) {
                    if let Ok(threshold) = value.parse::<i64>() {
                        // Repeated keys overwrite: last occurrence wins.
                        numeric_filters.insert(key, threshold);
                        continue;
                    }
                    // Non-integer value: fall through to the tag rule.
                } else if STRING_FILTER_KEYS.contains(&key.as_str()) {
                    if key == filter_keys::TAG {
                        // Valid tag: values also join the tag list; invalid
                        // ones are recorded as a string filter only.
                        if let Some(name) = tag::normalize(value) {
                            tags.push(name);
                        }
                    }
                    string_filters.insert(key, value.to_string());
                    continue;
                }
                // Unknown key: fall through to the tag rule.
            }

            push_tag(&mut tags, token);
        }

        SearchQuery::new(keywords, numeric_filters, string_filters, tags)
    }
}

/// Split a token at its first `:` when the colon sits at an interior
/// position. The key is lowercased; the value is kept as typed.
fn split_filter_token(token: &str) -> Option<(String, &str)> {
    let idx = token.find(':')?;
    if idx == 0 || idx + 1 >= token.len() {
        return None;
    }
    Some((token[..idx].to_lowercase(), &token[idx + 1..]))
}

/// Bare-tag rule: normalized when valid, otherwise the lowercased raw token.
/// Tokens are never dropped.
fn push_tag(tags: &mut Vec<String>, token: &str) {
    match tag::normalize(token) {
        Some(name) => tags.push(name),
        None => tags.push(token.to_lowercase()),
    }
}
