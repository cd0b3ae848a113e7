//! Question, answer and author entities.
//!
//! The engine treats these as read-only snapshots for the duration of one
//! search call; mutation (voting, view counting) happens on the store's write
//! path, never inside the filter pipeline.

use ahash::AHashSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::tag::Tag;

/// The author of a question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Author identity.
    pub id: u64,
    /// Display name shown in summaries and matched by `user:` filters.
    pub name: String,
}

impl Author {
    /// Create an author reference.
    pub fn new<S: Into<String>>(id: u64, name: S) -> Self {
        Author {
            id,
            name: name.into(),
        }
    }
}

/// An answer attached to a question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Answer identity.
    pub id: u64,
    /// Answer text. Not consulted by the search engine.
    #[serde(default)]
    pub body: String,
    /// Vote score.
    #[serde(default)]
    pub score: i64,
    /// Whether the question author accepted this answer.
    #[serde(default)]
    pub accepted: bool,
}

impl Answer {
    /// Create an answer with the fields the engine inspects.
    pub fn new(id: u64, score: i64, accepted: bool) -> Self {
        Answer {
            id,
            body: String::new(),
            score,
            accepted,
        }
    }

    /// Attach answer text.
    pub fn with_body<S: Into<String>>(mut self, body: S) -> Self {
        self.body = body.into();
        self
    }
}

/// A question as stored by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Question identity, unique within a store.
    pub id: u64,
    /// The asking author.
    pub author: Author,
    /// Title, searched by keyword filters.
    pub title: String,
    /// Body text, searched by keyword filters.
    #[serde(default)]
    pub body: String,
    /// Creation timestamp. Questions without one sort last in every mode.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// View counter, maintained by the store's write path.
    #[serde(default)]
    pub view_count: u64,
    /// Vote score, maintained by the store's write path.
    #[serde(default)]
    pub score: i64,
    /// Answers in posting order.
    #[serde(default)]
    pub answers: Vec<Answer>,
    /// Tags attached to the question.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Question {
    /// Start building a question with the given identity.
    pub fn builder(id: u64) -> QuestionBuilder {
        QuestionBuilder::new(id)
    }

    /// Number of answers.
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Whether any answer was accepted.
    pub fn has_accepted_answer(&self) -> bool {
        self.answers.iter().any(|a| a.accepted)
    }

    /// Whether any answer was accepted or voted above zero.
    pub fn has_upvoted_or_accepted_answer(&self) -> bool {
        self.answers.iter().any(|a| a.accepted || a.score > 0)
    }

    /// The question's tag names, lowercased, as a set for membership tests.
    pub fn tag_name_set(&self) -> AHashSet<String> {
        self.tags.iter().map(|t| t.name.to_lowercase()).collect()
    }

    /// The question's tag names in attachment order.
    pub fn tag_names(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.name.clone()).collect()
    }
}

/// Fluent builder for [`Question`], used by callers assembling fixtures or
/// loading external data.
#[derive(Debug, Clone)]
pub struct QuestionBuilder {
    question: Question,
}

impl QuestionBuilder {
    fn new(id: u64) -> Self {
        QuestionBuilder {
            question: Question {
                id,
                author: Author::default(),
                title: String::new(),
                body: String::new(),
                created_at: None,
                updated_at: None,
                view_count: 0,
                score: 0,
                answers: Vec::new(),
                tags: Vec::new(),
            },
        }
    }

    /// Set the asking author.
    pub fn author<S: Into<String>>(mut self, id: u64, name: S) -> Self {
        self.question.author = Author::new(id, name);
        self
    }

    /// Set the title.
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.question.title = title.into();
        self
    }

    /// Set the body text.
    pub fn body<S: Into<String>>(mut self, body: S) -> Self {
        self.question.body = body.into();
        self
    }

    /// Set the creation timestamp.
    pub fn created_at(mut self, ts: DateTime<Utc>) -> Self {
        self.question.created_at = Some(ts);
        self
    }

    /// Set the last-update timestamp.
    pub fn updated_at(mut self, ts: DateTime<Utc>) -> Self {
        self.question.updated_at = Some(ts);
        self
    }

    /// Set the view counter.
    pub fn view_count(mut self, count: u64) -> Self {
        self.question.view_count = count;
        self
    }

    /// Set the vote score.
    pub fn score(mut self, score: i64) -> Self {
        self.question.score = score;
        self
    }

    /// Append an answer.
    pub fn answer(mut self, answer: Answer) -> Self {
        self.question.answers.push(answer);
        self
    }

    /// Append a tag.
    pub fn tag(mut self, tag: Tag) -> Self {
        self.question.tags.push(tag);
        self
    }

    /// Finish building.
    pub fn build(self) -> Question {
        self.question
    }
}
