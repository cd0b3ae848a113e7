//! In-memory question store.
//!
//! Backs the CLI and tests, and serves as the reference implementation of
//! [`QuestionStore`]. All reads hand out cloned snapshots, so a search call
//! never observes a write made after its candidate fetch.

use ahash::AHashSet;
use parking_lot::RwLock;

use crate::error::{AgoraError, Result};
use crate::model::Question;
use crate::store::{AuthorRef, QuestionStore, VoteChoice};

/// A question collection guarded by a read-write lock.
///
/// `find_by_author` resolves [`AuthorRef::Name`] by exact, case-insensitive
/// display-name comparison.
#[derive(Debug, Default)]
pub struct MemoryQuestionStore {
    questions: RwLock<Vec<Question>>,
}

impl MemoryQuestionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        MemoryQuestionStore::default()
    }

    /// Create a store seeded with the given questions. Duplicate ids keep
    /// the last occurrence.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let store = MemoryQuestionStore::new();
        for question in questions {
            store.insert(question);
        }
        store
    }

    /// Insert a question, replacing any existing one with the same id.
    pub fn insert(&self, question: Question) {
        let mut questions = self.questions.write();
        match questions.iter_mut().find(|q| q.id == question.id) {
            Some(slot) => *slot = question,
            None => questions.push(question),
        }
    }

    /// Remove a question by id. Returns whether anything was removed.
    pub fn remove(&self, id: u64) -> bool {
        let mut questions = self.questions.write();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        questions.len() != before
    }

    /// Number of stored questions.
    pub fn len(&self) -> usize {
        self.questions.read().len()
    }

    /// Whether the store holds no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.read().is_empty()
    }

    /// A cloned snapshot of every stored question.
    pub fn snapshot(&self) -> Vec<Question> {
        self.questions.read().clone()
    }

    /// Apply a vote to a question's score, returning the new score.
    pub fn vote(&self, id: u64, choice: VoteChoice) -> Result<i64> {
        let mut questions = self.questions.write();
        let question = questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| AgoraError::not_found(format!("question {id}")))?;
        question.score += choice.delta();
        Ok(question.score)
    }

    /// Bump a question's view counter, returning the new count.
    pub fn record_view(&self, id: u64) -> Result<u64> {
        let mut questions = self.questions.write();
        let question = questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| AgoraError::not_found(format!("question {id}")))?;
        question.view_count += 1;
        Ok(question.view_count)
    }

    fn collect<F>(&self, mut predicate: F) -> Vec<Question>
    where
        F: FnMut(&Question) -> bool,
    {
        self.questions
            .read()
            .iter()
            .filter(|q| predicate(q))
            .cloned()
            .collect()
    }
}

impl QuestionStore for MemoryQuestionStore {
    fn find_all(&self) -> Result<Vec<Question>> {
        Ok(self.snapshot())
    }

    fn find_by_author(&self, author: &AuthorRef) -> Result<Vec<Question>> {
        let matches = match author {
            AuthorRef::Id(id) => self.collect(|q| q.author.id == *id),
            AuthorRef::Name(name) => {
                let needle = name.to_lowercase();
                self.collect(|q| q.author.name.to_lowercase() == needle)
            }
        };
        if matches.is_empty() {
            return Err(AgoraError::not_found(format!("no questions by {author}")));
        }
        Ok(matches)
    }

    fn find_by_all_tags(&self, tag_names: &[String]) -> Result<Vec<Question>> {
        if tag_names.is_empty() {
            return self.find_all();
        }
        let requested: AHashSet<String> = tag_names.iter().map(|t| t.to_lowercase()).collect();
        Ok(self.collect(|q| {
            let attached = q.tag_name_set();
            requested.iter().all(|t| attached.contains(t))
        }))
    }

    fn find_by_min_answer_count(&self, min_answers: i64) -> Result<Vec<Question>> {
        Ok(self.collect(|q| q.answers.len() as i64 >= min_answers))
    }

    fn find_by_min_score(&self, min_score: i64) -> Result<Vec<Question>> {
        Ok(self.collect(|q| q.score >= min_score))
    }

    fn find_by_keyword(&self, keyword: &str) -> Result<Vec<Question>> {
        let needle = keyword.to_lowercase();
        Ok(self.collect(|q| {
            q.title.to_lowercase().contains(&needle) || q.body.to_lowercase().contains(&needle)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Answer, Tag};

    fn fixture() -> MemoryQuestionStore {
        MemoryQuestionStore::with_questions(vec![
            Question::builder(1)
                .author(10, "Alice")
                .title("How to avoid a memory leak in Java")
                .body("My heap keeps growing.")
                .score(5)
                .answer(Answer::new(1, 3, true))
                .answer(Answer::new(2, 0, false))
                .tag(Tag::new(1, "java"))
                .tag(Tag::new(2, "memory"))
                .build(),
            Question::builder(2)
                .author(11, "bob")
                .title("Rust borrow checker basics")
                .body("What does 'borrowed value does not live long enough' mean?")
                .score(2)
                .answer(Answer::new(3, 1, false))
                .tag(Tag::new(3, "rust"))
                .build(),
            Question::builder(3)
                .author(10, "Alice")
                .title("Goroutine leaks")
                .body("Channels never closed.")
                .score(-1)
                .tag(Tag::new(4, "go"))
                .tag(Tag::new(5, "concurrency"))
                .build(),
        ])
    }

    #[test]
    fn test_insert_and_len() {
        let store = MemoryQuestionStore::new();
        assert!(store.is_empty());
        store.insert(Question::builder(1).title("a").build());
        store.insert(Question::builder(2).title("b").build());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_insert_replaces_same_id() {
        let store = MemoryQuestionStore::new();
        store.insert(Question::builder(1).title("first").build());
        store.insert(Question::builder(1).title("second").build());
        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot()[0].title, "second");
    }

    #[test]
    fn test_remove() {
        let store = fixture();
        assert!(store.remove(2));
        assert!(!store.remove(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_snapshot_is_isolated_from_writes() {
        let store = fixture();
        let before = store.snapshot();
        store.vote(1, VoteChoice::Up).unwrap();
        store.record_view(1).unwrap();
        assert_eq!(before[0].score, 5);
        assert_eq!(before[0].view_count, 0);
        assert_eq!(store.snapshot()[0].score, 6);
        assert_eq!(store.snapshot()[0].view_count, 1);
    }

    #[test]
    fn test_find_by_author_id() {
        let store = fixture();
        let found = store.find_by_author(&AuthorRef::Id(10)).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|q| q.author.id == 10));
    }

    #[test]
    fn test_find_by_author_name_is_case_insensitive() {
        let store = fixture();
        let found = store
            .find_by_author(&AuthorRef::Name("alice".to_string()))
            .unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_find_by_author_miss_is_not_found() {
        let store = fixture();
        let err = store
            .find_by_author(&AuthorRef::Name("nobody".to_string()))
            .unwrap_err();
        assert!(err.is_not_found());

        let err = store.find_by_author(&AuthorRef::Id(999)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_find_by_all_tags_requires_every_tag() {
        let store = fixture();
        let found = store.find_by_all_tags(&["java".to_string()]).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);

        let found = store
            .find_by_all_tags(&["java".to_string(), "memory".to_string()])
            .unwrap();
        assert_eq!(found.len(), 1);

        let found = store
            .find_by_all_tags(&["java".to_string(), "gc".to_string()])
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_find_by_all_tags_is_case_insensitive() {
        let store = fixture();
        let found = store.find_by_all_tags(&["JAVA".to_string()]).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_find_by_all_tags_empty_request_matches_everything() {
        let store = fixture();
        assert_eq!(store.find_by_all_tags(&[]).unwrap().len(), 3);
    }

    #[test]
    fn test_find_by_min_answer_count() {
        let store = fixture();
        assert_eq!(store.find_by_min_answer_count(1).unwrap().len(), 2);
        assert_eq!(store.find_by_min_answer_count(2).unwrap().len(), 1);
        // A non-positive threshold excludes nothing.
        assert_eq!(store.find_by_min_answer_count(0).unwrap().len(), 3);
    }

    #[test]
    fn test_find_by_min_score() {
        let store = fixture();
        assert_eq!(store.find_by_min_score(5).unwrap().len(), 1);
        assert_eq!(store.find_by_min_score(-1).unwrap().len(), 3);
    }

    #[test]
    fn test_find_by_keyword_searches_title_and_body() {
        let store = fixture();
        let found = store.find_by_keyword("LEAK").unwrap();
        assert_eq!(found.len(), 2);

        let found = store.find_by_keyword("heap keeps").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_find_by_keyword_ignores_tag_names() {
        let store = fixture();
        // "concurrency" appears only as a tag on question 3.
        assert!(store.find_by_keyword("concurrency").unwrap().is_empty());
    }

    #[test]
    fn test_vote_adjusts_score() {
        let store = fixture();
        assert_eq!(store.vote(2, VoteChoice::Up).unwrap(), 3);
        assert_eq!(store.vote(2, VoteChoice::Down).unwrap(), 2);
        assert!(store.vote(999, VoteChoice::Up).unwrap_err().is_not_found());
    }

    #[test]
    fn test_record_view_increments() {
        let store = fixture();
        assert_eq!(store.record_view(3).unwrap(), 1);
        assert_eq!(store.record_view(3).unwrap(), 2);
        assert!(store.record_view(999).unwrap_err().is_not_found());
    }
}
