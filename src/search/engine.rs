//! High-level search engine combining parsing, selection, filtering, sorting
//! and pagination.

use chrono::{DateTime, Utc};
use log::debug;

use crate::error::{AgoraError, Result};
use crate::model::tag;
use crate::query::QueryParser;
use crate::search::filter::apply_filters;
use crate::search::page::{QuestionSummary, SearchPage, SearchParams, paginate};
use crate::search::selector::select_base;
use crate::search::sort::sort_questions;
use crate::search::{PageRequest, SearchRequest};
use crate::store::QuestionStore;

/// The facade callers use: one call runs parse, select, filter, sort and
/// paginate over a store snapshot.
///
/// A search is a straight-line computation without shared mutable state, so
/// one engine serves concurrent callers without coordination.
#[derive(Debug)]
pub struct SearchEngine<S> {
    store: S,
    parser: QueryParser,
}

impl<S: QuestionStore> SearchEngine<S> {
    /// Create an engine over the given store.
    pub fn new(store: S) -> Self {
        SearchEngine {
            store,
            parser: QueryParser::new(),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one search with the current wall clock.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchPage> {
        self.search_at(request, Utc::now())
    }

    /// Run one search from just a raw query string, defaults for the rest.
    pub fn search_str(&self, raw: &str) -> Result<SearchPage> {
        self.search(&SearchRequest::new().query(raw))
    }

    /// Run one search against a fixed clock reading.
    ///
    /// The minimum-age cutoff derives from `now`, so deterministic callers
    /// (tests, replays) pass their own reading; [`SearchEngine::search`] uses
    /// the wall clock.
    pub fn search_at(&self, request: &SearchRequest, now: DateTime<Utc>) -> Result<SearchPage> {
        if let PageRequest::Paged { size: 0, .. } = request.page {
            return Err(AgoraError::invalid_argument("page size must be positive"));
        }

        let raw = request.query.as_deref().unwrap_or("");
        let query = self.parser.parse(raw);
        let merged_tags = tag::merge_tag_lists(query.tags(), &request.tags);
        debug!(
            "search: raw={raw:?} merged_tags={merged_tags:?} checkboxes={} sort={:?}",
            request.filters.len(),
            request.sort
        );

        let candidates = select_base(&self.store, &query, &merged_tags)?;
        let mut matches = apply_filters(
            candidates,
            &query,
            &merged_tags,
            &request.filters,
            request.min_age_days,
            now,
        );
        sort_questions(&mut matches, request.sort);

        let page = paginate(matches, &request.page).map(|q| QuestionSummary::from_question(&q));
        Ok(SearchPage {
            page,
            params: SearchParams::from_request(request),
        })
    }
}
