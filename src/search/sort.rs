//! Result ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::Question;

/// The four orderings the platform offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    /// Creation time, newest first (the default).
    #[default]
    Newest,
    /// Creation time, oldest first.
    Oldest,
    /// Score, highest first; newest first among equals.
    HighestScore,
    /// Answer count, most first; newest first among equals.
    MostAnswers,
}

impl SortMode {
    /// Parse a sort token, case-insensitive. Accepts the platform spellings
    /// (`HighestScore`) and their kebab-case CLI forms (`highest-score`).
    /// Anything unrecognized falls back to `Newest`.
    pub fn parse(token: &str) -> SortMode {
        match token.trim().to_lowercase().as_str() {
            "oldest" => SortMode::Oldest,
            "highestscore" | "highest-score" => SortMode::HighestScore,
            "mostanswers" | "most-answers" => SortMode::MostAnswers,
            _ => SortMode::Newest,
        }
    }

    /// Canonical spelling, as used in the platform's sort parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Newest => "Newest",
            SortMode::Oldest => "Oldest",
            SortMode::HighestScore => "HighestScore",
            SortMode::MostAnswers => "MostAnswers",
        }
    }
}

/// Order questions in place. The sort is stable: equal keys keep their
/// incoming relative order.
pub fn sort_questions(questions: &mut [Question], mode: SortMode) {
    match mode {
        SortMode::Newest => questions.sort_by(newest_first),
        SortMode::Oldest => questions.sort_by(oldest_first),
        SortMode::HighestScore => {
            questions.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| newest_first(a, b)))
        }
        SortMode::MostAnswers => questions.sort_by(|a, b| {
            b.answers
                .len()
                .cmp(&a.answers.len())
                .then_with(|| newest_first(a, b))
        }),
    }
}

/// Newest first; questions without a creation timestamp sort last.
fn newest_first(a: &Question, b: &Question) -> Ordering {
    match (a.created_at, b.created_at) {
        (Some(a_ts), Some(b_ts)) => b_ts.cmp(&a_ts),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Oldest first; questions without a creation timestamp still sort last.
fn oldest_first(a: &Question, b: &Question) -> Ordering {
    match (a.created_at, b.created_at) {
        (Some(a_ts), Some(b_ts)) => a_ts.cmp(&b_ts),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
