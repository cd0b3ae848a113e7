//! Pagination and the presentation projection of results.

use chrono::{DateTime, Utc};
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::model::Question;
use crate::search::SearchRequest;
use crate::search::filter::CheckboxFilter;
use crate::search::sort::SortMode;

/// Grapheme length of a summary excerpt.
const EXCERPT_GRAPHEMES: usize = 150;

/// Which slice of the result list a caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// A zero-based page of fixed size.
    Paged {
        /// Zero-based page index.
        index: usize,
        /// Items per page.
        size: usize,
    },
    /// The entire list as one page.
    Unpaged,
}

impl PageRequest {
    /// A request for the zero-based page `index` with `size` items per page.
    pub fn of(index: usize, size: usize) -> Self {
        PageRequest::Paged { index, size }
    }

    /// Request the entire list as one page.
    pub fn unpaged() -> Self {
        PageRequest::Unpaged
    }

    /// Whether this request is unpaged.
    pub fn is_unpaged(&self) -> bool {
        matches!(self, PageRequest::Unpaged)
    }
}

/// One page of results plus the totals needed for page navigation.
///
/// `total_elements` always reflects the full filtered result list, never the
/// slice, so callers can compute page counts from any page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// The items on this page, in result order.
    pub content: Vec<T>,
    /// Zero-based page index.
    pub page_index: usize,
    /// Requested page size (for unpaged results, the list length).
    pub page_size: usize,
    /// Size of the full result list.
    pub total_elements: usize,
}

impl<T> Page<T> {
    /// Number of pages the full result list spans. A zero-size page reports
    /// one page, mirroring the platform convention.
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            1
        } else {
            self.total_elements.div_ceil(self.page_size)
        }
    }

    /// Whether a later page exists.
    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.total_pages()
    }

    /// Whether an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether this page carries no items.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Project the page content, keeping index and totals.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_index: self.page_index,
            page_size: self.page_size,
            total_elements: self.total_elements,
        }
    }
}

/// Slice one page out of a fully filtered and sorted result list.
///
/// An out-of-range index is not an error: it yields an empty page that still
/// reports the true total.
pub fn paginate<T>(items: Vec<T>, request: &PageRequest) -> Page<T> {
    match *request {
        PageRequest::Unpaged => {
            let total = items.len();
            Page {
                content: items,
                page_index: 0,
                page_size: total,
                total_elements: total,
            }
        }
        PageRequest::Paged { index, size } => {
            let total = items.len();
            let start = index.saturating_mul(size);
            let content = if start >= total {
                Vec::new()
            } else {
                items.into_iter().skip(start).take(size).collect()
            };
            Page {
                content,
                page_index: index,
                page_size: size,
                total_elements: total,
            }
        }
    }
}

/// The projection of one question handed to presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionSummary {
    /// Question identity.
    pub id: u64,
    /// Question title.
    pub title: String,
    /// Leading slice of the body, ellipsized when truncated.
    pub excerpt: String,
    /// Author display name.
    pub author: String,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
    /// View counter.
    pub view_count: u64,
    /// Vote score.
    pub score: i64,
    /// Number of answers.
    pub answer_count: usize,
    /// Whether any answer was accepted.
    pub has_accepted_answer: bool,
    /// Tag names in attachment order.
    pub tags: Vec<String>,
}

impl QuestionSummary {
    /// Build the summary of one question.
    pub fn from_question(question: &Question) -> Self {
        QuestionSummary {
            id: question.id,
            title: question.title.clone(),
            excerpt: excerpt(&question.body),
            author: question.author.name.clone(),
            created_at: question.created_at,
            updated_at: question.updated_at,
            view_count: question.view_count,
            score: question.score,
            answer_count: question.answer_count(),
            has_accepted_answer: question.has_accepted_answer(),
            tags: question.tag_names(),
        }
    }
}

/// First [`EXCERPT_GRAPHEMES`] graphemes of the body, with a trailing
/// ellipsis when anything was cut. Grapheme-aware so multi-byte text is never
/// split mid-character.
fn excerpt(body: &str) -> String {
    let mut graphemes = body.graphemes(true);
    let mut excerpt: String = graphemes.by_ref().take(EXCERPT_GRAPHEMES).collect();
    if graphemes.next().is_some() {
        excerpt.truncate(excerpt.trim_end().len());
        excerpt.push_str("...");
    }
    excerpt
}

/// The caller's original parameters, echoed back for building pagination
/// links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchParams {
    /// Raw search string, as received.
    pub query: Option<String>,
    /// Explicit UI tag list, as received.
    pub tags: Vec<String>,
    /// Checkbox filters.
    pub filters: Vec<CheckboxFilter>,
    /// Minimum age in days.
    pub min_age_days: Option<i64>,
    /// Requested ordering.
    pub sort: SortMode,
}

impl SearchParams {
    /// Capture the link-relevant parameters of a request.
    pub fn from_request(request: &SearchRequest) -> Self {
        SearchParams {
            query: request.query.clone(),
            tags: request.tags.clone(),
            filters: request.filters.clone(),
            min_age_days: request.min_age_days,
            sort: request.sort,
        }
    }
}

/// A page of question summaries plus the request echo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage {
    /// The sliced, projected results.
    pub page: Page<QuestionSummary>,
    /// Parameters to thread through pagination links.
    pub params: SearchParams,
}

impl SearchPage {
    /// Total pages in the underlying result list.
    pub fn total_pages(&self) -> usize {
        self.page.total_pages()
    }

    /// Total number of matching questions.
    pub fn total_elements(&self) -> usize {
        self.page.total_elements
    }
}
