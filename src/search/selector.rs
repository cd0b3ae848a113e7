//! Candidate selection: the coarse storage fetch ahead of precise filtering.

use log::debug;

use crate::error::Result;
use crate::model::Question;
use crate::query::{SearchQuery, filter_keys};
use crate::store::{AuthorRef, QuestionStore};

/// Fetch a candidate set using the most selective constraint available.
///
/// Precedence is fixed, first match wins: author, merged tags, answer
/// threshold, score threshold, first keyword, everything. Each rule is
/// assumed less selective than the one before it, so the cheapest
/// sufficiently narrow fetch runs. The returned set is a superset of the
/// final result; the filter pipeline re-checks every constraint in memory.
pub fn select_base(
    store: &dyn QuestionStore,
    query: &SearchQuery,
    merged_tags: &[String],
) -> Result<Vec<Question>> {
    if let Some(user) = query.string_filter(filter_keys::USER) {
        debug!("selecting candidates by author {user:?}");
        return store.find_by_author(&AuthorRef::parse(user));
    }
    if !merged_tags.is_empty() {
        debug!("selecting candidates by {} tag(s)", merged_tags.len());
        return store.find_by_all_tags(merged_tags);
    }
    if let Some(min_answers) = query.numeric_filter(filter_keys::ANSWERS) {
        debug!("selecting candidates with at least {min_answers} answer(s)");
        return store.find_by_min_answer_count(min_answers);
    }
    if let Some(min_score) = query.numeric_filter(filter_keys::SCORE) {
        debug!("selecting candidates with score >= {min_score}");
        return store.find_by_min_score(min_score);
    }
    if let Some(keyword) = query.keywords().first() {
        debug!("selecting candidates by keyword {keyword:?}");
        return store.find_by_keyword(keyword);
    }
    debug!("no narrowing constraint, selecting every question");
    store.find_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Answer, Tag};
    use crate::store::MemoryQuestionStore;
    use std::collections::HashMap;

    fn store() -> MemoryQuestionStore {
        MemoryQuestionStore::with_questions(vec![
            Question::builder(1)
                .author(10, "alice")
                .title("Memory leak in production")
                .body("Long-running JVM")
                .score(8)
                .answer(Answer::new(1, 1, false))
                .answer(Answer::new(2, 0, true))
                .tag(Tag::new(1, "java"))
                .build(),
            Question::builder(2)
                .author(11, "bob")
                .title("Index out of range")
                .body("Memory safe but wrong")
                .score(3)
                .answer(Answer::new(3, 0, false))
                .tag(Tag::new(2, "rust"))
                .build(),
            Question::builder(3)
                .author(11, "bob")
                .title("Lifetime puzzle")
                .body("Borrowed twice")
                .score(1)
                .tag(Tag::new(2, "rust"))
                .build(),
        ])
    }

    fn query(
        keywords: &[&str],
        numeric: &[(&str, i64)],
        string: &[(&str, &str)],
        tags: &[&str],
    ) -> SearchQuery {
        SearchQuery::new(
            keywords.iter().map(|k| k.to_string()).collect(),
            numeric
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<HashMap<_, _>>(),
            string
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
            tags.iter().map(|t| t.to_string()).collect(),
        )
    }

    fn ids(questions: Vec<Question>) -> Vec<u64> {
        questions.into_iter().map(|q| q.id).collect()
    }

    #[test]
    fn test_author_takes_precedence_over_everything() {
        let store = store();
        let query = query(&["memory"], &[("answers", 1), ("score", 1)], &[("user", "bob")], &[]);
        // Tags would also match, but user wins.
        let merged = vec!["java".to_string()];
        let found = select_base(&store, &query, &merged).unwrap();
        assert_eq!(ids(found), [2, 3]);
    }

    #[test]
    fn test_tags_beat_numeric_thresholds() {
        let store = store();
        let query = query(&[], &[("answers", 1), ("score", 1)], &[], &["rust"]);
        let merged = vec!["rust".to_string()];
        let found = select_base(&store, &query, &merged).unwrap();
        assert_eq!(ids(found), [2, 3]);
    }

    #[test]
    fn test_answer_threshold_beats_score() {
        let store = store();
        let query = query(&[], &[("answers", 2), ("score", 1)], &[], &[]);
        let found = select_base(&store, &query, &[]).unwrap();
        assert_eq!(ids(found), [1]);
    }

    #[test]
    fn test_score_threshold_beats_keyword() {
        let store = store();
        let query = query(&["memory"], &[("score", 3)], &[], &[]);
        let found = select_base(&store, &query, &[]).unwrap();
        assert_eq!(ids(found), [1, 2]);
    }

    #[test]
    fn test_first_keyword_used_when_nothing_narrower() {
        let store = store();
        let query = query(&["memory", "lifetime"], &[], &[], &[]);
        // Only the first keyword narrows; the pipeline applies the rest.
        let found = select_base(&store, &query, &[]).unwrap();
        assert_eq!(ids(found), [1, 2]);
    }

    #[test]
    fn test_empty_query_selects_everything() {
        let store = store();
        let found = select_base(&store, &SearchQuery::empty(), &[]).unwrap();
        assert_eq!(ids(found), [1, 2, 3]);
    }

    #[test]
    fn test_author_miss_propagates_not_found() {
        let store = store();
        let query = query(&[], &[], &[("user", "nobody")], &[]);
        let err = select_base(&store, &query, &[]).unwrap_err();
        assert!(err.is_not_found());
    }
}
