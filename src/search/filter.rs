//! In-memory filter pipeline.
//!
//! Candidates arrive as an over-inclusive set from the selector; every
//! constraint is re-checked here. Each present constraint removes
//! non-matching questions and absent constraints never exclude, so the
//! result is a pure intersection and application order cannot change it.

use ahash::AHashSet;
use chrono::{DateTime, Duration, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::Question;
use crate::query::{SearchQuery, filter_keys};

/// UI checkbox filters: independent predicates, AND-combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckboxFilter {
    /// The question has no answers at all.
    NoAnswers,
    /// No answer is accepted and none has a positive score.
    NoUpvotedOrAcceptedAnswer,
}

impl CheckboxFilter {
    /// Parse a checkbox name as sent by the platform UI (`NoAnswers`,
    /// `NoUpvotedOrAccepted`) or the CLI (`no-answers`,
    /// `no-upvoted-or-accepted`), case-insensitive. Unknown names yield
    /// `None` and are skipped by callers.
    pub fn parse(token: &str) -> Option<CheckboxFilter> {
        match token.trim().to_lowercase().as_str() {
            "noanswers" | "no-answers" => Some(CheckboxFilter::NoAnswers),
            "noupvotedoraccepted"
            | "no-upvoted-or-accepted"
            | "noupvotedoracceptedanswer"
            | "no-upvoted-or-accepted-answer" => Some(CheckboxFilter::NoUpvotedOrAcceptedAnswer),
            _ => None,
        }
    }

    /// Whether `question` passes this checkbox.
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            CheckboxFilter::NoAnswers => question.answers.is_empty(),
            CheckboxFilter::NoUpvotedOrAcceptedAnswer => {
                !question.has_upvoted_or_accepted_answer()
            }
        }
    }

    /// Canonical name, as used in the platform's filter parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckboxFilter::NoAnswers => "NoAnswers",
            CheckboxFilter::NoUpvotedOrAcceptedAnswer => "NoUpvotedOrAccepted",
        }
    }
}

/// Apply every remaining constraint to the candidate set.
///
/// Deduplicates by question id first (insertion-ordered), then AND-applies
/// each present constraint. `merged_tags` is the normalized union of query
/// tags and UI tags. `now` anchors the minimum-age check so one search call
/// sees a single clock reading.
pub fn apply_filters(
    candidates: Vec<Question>,
    query: &SearchQuery,
    merged_tags: &[String],
    checkboxes: &[CheckboxFilter],
    min_age_days: Option<i64>,
    now: DateTime<Utc>,
) -> Vec<Question> {
    let fetched = candidates.len();
    let mut working = dedupe_by_id(candidates);

    if let Some(tag) = query.string_filter(filter_keys::TAG) {
        let requested = [tag.to_string()];
        working.retain(|q| has_all_tags(q, &requested));
    }
    if !merged_tags.is_empty() {
        working.retain(|q| has_all_tags(q, merged_tags));
    }
    if let Some(min_answers) = query.numeric_filter(filter_keys::ANSWERS) {
        working.retain(|q| q.answers.len() as i64 >= min_answers);
    }
    if let Some(min_score) = query.numeric_filter(filter_keys::SCORE) {
        working.retain(|q| q.score >= min_score);
    }
    if let Some(min_views) = query.numeric_filter(filter_keys::VIEWS) {
        working.retain(|q| q.view_count as i64 >= min_views);
    }
    if let Some(value) = query.string_filter(filter_keys::IS_ACCEPTED) {
        let want_accepted = matches!(value.to_lowercase().as_str(), "yes" | "true" | "1");
        working.retain(|q| q.has_accepted_answer() == want_accepted);
    }
    for checkbox in checkboxes {
        working.retain(|q| checkbox.matches(q));
    }
    if let Some(days) = min_age_days.filter(|d| *d > 0) {
        match Duration::try_days(days).and_then(|span| now.checked_sub_signed(span)) {
            Some(cutoff) => working.retain(|q| q.created_at.is_some_and(|ts| ts <= cutoff)),
            // An age beyond the representable range matches nothing.
            None => working.clear(),
        }
    }
    if !query.keywords().is_empty() {
        working.retain(|q| query.keywords().iter().all(|k| matches_keyword(q, k)));
    }

    debug!("filter pipeline kept {} of {} candidates", working.len(), fetched);
    working
}

/// Insertion-ordered dedupe by question id.
fn dedupe_by_id(candidates: Vec<Question>) -> Vec<Question> {
    let mut seen = AHashSet::with_capacity(candidates.len());
    candidates.into_iter().filter(|q| seen.insert(q.id)).collect()
}

/// Whether the question carries every requested tag. Names are compared
/// lowercased, exact, never by substring.
fn has_all_tags(question: &Question, requested: &[String]) -> bool {
    let attached = question.tag_name_set();
    requested.iter().all(|t| attached.contains(&t.to_lowercase()))
}

/// Case-insensitive substring test over title and body. Tag names are not
/// searched.
fn matches_keyword(question: &Question, keyword: &str) -> bool {
    let needle = keyword.to_lowercase();
    question.title.to_lowercase().contains(&needle)
        || question.body.to_lowercase().contains(&needle)
}
