//! Tag entity and tag-name normalization.
//!
//! Tag names are stored case-normalized. A valid name is one or more
//! letter/digit runs joined by single internal hyphens (`rust`, `c99`,
//! `memory-safety`); anything else fails validation. Tag matching elsewhere in
//! the crate is always an exact, case-insensitive comparison of normalized
//! names.

use ahash::AHashSet;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref TAG_NAME: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// A tag attached to questions. The name is lowercased on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag identity, assigned by the owning store.
    pub id: u64,
    /// Case-normalized tag name.
    pub name: String,
}

impl Tag {
    /// Create a tag, trimming and lowercasing the name.
    pub fn new<S: Into<String>>(id: u64, name: S) -> Self {
        Tag {
            id,
            name: name.into().trim().to_lowercase(),
        }
    }
}

/// Check an already-normalized name against the tag-name pattern.
pub fn is_valid_name(name: &str) -> bool {
    TAG_NAME.is_match(name)
}

/// Trim and lowercase a raw token, returning it only if it is a valid tag
/// name. Blank input and pattern violations yield `None`.
pub fn normalize(raw: &str) -> Option<String> {
    let name = raw.trim().to_lowercase();
    if name.is_empty() || !is_valid_name(&name) {
        return None;
    }
    Some(name)
}

/// Merge the parsed query tags with the caller's explicit tag list: trim,
/// lowercase, drop blanks, and deduplicate keeping the first occurrence.
pub fn merge_tag_lists(query_tags: &[String], ui_tags: &[String]) -> Vec<String> {
    let mut seen = AHashSet::new();
    let mut merged = Vec::new();
    for raw in query_tags.iter().chain(ui_tags.iter()) {
        let tag = raw.trim().to_lowercase();
        if tag.is_empty() {
            continue;
        }
        if seen.insert(tag.clone()) {
            merged.push(tag);
        }
    }
    merged
}
