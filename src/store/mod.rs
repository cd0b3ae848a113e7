//! Question storage contract.
//!
//! Persistence proper is outside this crate; the engine consumes whatever
//! implements [`QuestionStore`]. Each finder returns an unordered, owned
//! candidate collection. Finders may over-select: the filter pipeline
//! re-checks every constraint in memory.

pub mod memory;

pub use self::memory::MemoryQuestionStore;

use std::fmt;

use crate::error::Result;
use crate::model::Question;

/// How a `user:` filter value resolves to an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorRef {
    /// Numeric author identity.
    Id(u64),
    /// Display name.
    Name(String),
}

impl AuthorRef {
    /// Digits-only values resolve by id, anything else by display name.
    pub fn parse(raw: &str) -> AuthorRef {
        let trimmed = raw.trim();
        match trimmed.parse::<u64>() {
            Ok(id) => AuthorRef::Id(id),
            Err(_) => AuthorRef::Name(trimmed.to_string()),
        }
    }
}

impl fmt::Display for AuthorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorRef::Id(id) => write!(f, "author #{id}"),
            AuthorRef::Name(name) => write!(f, "author '{name}'"),
        }
    }
}

/// Direction of a vote on a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteChoice {
    /// Raise the score by one.
    Up,
    /// Lower the score by one.
    Down,
}

impl VoteChoice {
    /// The score adjustment this vote applies.
    pub fn delta(&self) -> i64 {
        match self {
            VoteChoice::Up => 1,
            VoteChoice::Down => -1,
        }
    }
}

/// Read surface the search engine consumes.
///
/// Implementations decide their own consistency guarantees; the engine only
/// requires that returned questions are owned snapshots it may filter and
/// reorder freely.
pub trait QuestionStore: Send + Sync + fmt::Debug {
    /// Every question in the store.
    fn find_all(&self) -> Result<Vec<Question>>;

    /// Questions asked by the given author. A reference matching no stored
    /// question is a domain-level not-found error, not an empty result.
    fn find_by_author(&self, author: &AuthorRef) -> Result<Vec<Question>>;

    /// Questions whose tag set contains every requested tag
    /// (case-insensitive exact names). An empty request matches everything.
    fn find_by_all_tags(&self, tag_names: &[String]) -> Result<Vec<Question>>;

    /// Questions with at least `min_answers` answers.
    fn find_by_min_answer_count(&self, min_answers: i64) -> Result<Vec<Question>>;

    /// Questions with score at or above `min_score`.
    fn find_by_min_score(&self, min_score: i64) -> Result<Vec<Question>>;

    /// Questions whose title or body contains `keyword`, case-insensitive.
    fn find_by_keyword(&self, keyword: &str) -> Result<Vec<Question>>;
}
