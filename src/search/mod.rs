//! Search execution: candidate selection, filtering, sorting, pagination.

pub mod engine;
pub mod filter;
pub mod page;
pub mod selector;
pub mod sort;

pub use self::engine::SearchEngine;
pub use self::filter::{CheckboxFilter, apply_filters};
pub use self::page::{Page, PageRequest, QuestionSummary, SearchPage, SearchParams, paginate};
pub use self::selector::select_base;
pub use self::sort::{SortMode, sort_questions};

/// Default page size of the platform's question lists.
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// One search invocation: the raw query string plus the UI-level parameters
/// it is merged with.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Raw search-box input. Absent means no text constraint.
    pub query: Option<String>,
    /// Explicit tag list, merged with tags parsed out of the query.
    pub tags: Vec<String>,
    /// Checkbox filters, AND-combined.
    pub filters: Vec<CheckboxFilter>,
    /// Minimum age in days; only values above zero constrain.
    pub min_age_days: Option<i64>,
    /// Result ordering.
    pub sort: SortMode,
    /// Page slice to return.
    pub page: PageRequest,
}

impl Default for SearchRequest {
    fn default() -> Self {
        SearchRequest {
            query: None,
            tags: Vec::new(),
            filters: Vec::new(),
            min_age_days: None,
            sort: SortMode::default(),
            page: PageRequest::of(0, DEFAULT_PAGE_SIZE),
        }
    }
}

impl SearchRequest {
    /// A request with no constraints: newest first, first page of fifteen.
    pub fn new() -> Self {
        SearchRequest::default()
    }

    /// Set the raw search string.
    pub fn query<S: Into<String>>(mut self, query: S) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Add one explicit tag.
    pub fn tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the explicit tag list.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Add a checkbox filter.
    pub fn filter(mut self, filter: CheckboxFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the minimum age in days.
    pub fn min_age_days(mut self, days: i64) -> Self {
        self.min_age_days = Some(days);
        self
    }

    /// Set the sort mode.
    pub fn sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Set the page slice.
    pub fn page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }

    /// Return the entire result list as one page.
    pub fn unpaged(mut self) -> Self {
        self.page = PageRequest::unpaged();
        self
    }
}
