//! Infinite pagination over a [`PageSource`].
//!
//! The loader never awaits on its own. [`IncrementalLoader::begin_next_page`]
//! hands out a [`PageRequest`]; whoever performs the fetch reports back with
//! [`IncrementalLoader::complete`]. This keeps every state change synchronous
//! and lets a caller keep scrolling or toggling while a page is in flight.
//! [`IncrementalLoader::load_next_page`] bundles both halves for callers that
//! can simply await.
//!
//! ## Ordering
//!
//! Each request carries the search generation it was issued under. Changing
//! the search term bumps the generation, so a response for an old term is
//! recognised on arrival and dropped instead of appended.

use shelf_catalog::{is_last_page, CatalogError, PageSource};
use shelf_core::Product;

/// A page fetch the caller must perform and report back via
/// [`IncrementalLoader::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub term: String,
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
    generation: u64,
}

/// Observable loader state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// More pages may exist and nothing is in flight.
    Idle,
    Fetching,
    /// The last page has been received.
    Done,
    /// The most recent fetch failed; results and `has_more` are unchanged.
    Failed,
}

/// What [`IncrementalLoader::complete`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    Appended { count: usize, has_more: bool },
    /// The response belonged to a superseded search or page and was dropped.
    Stale,
    Failed,
    /// No request was issued (already fetching, or no more pages).
    Skipped,
}

#[derive(Debug)]
pub struct IncrementalLoader {
    term: String,
    limit: u32,
    pages_loaded: u32,
    items: Vec<Product>,
    has_more: bool,
    in_flight: Option<u32>,
    generation: u64,
    last_error: Option<CatalogError>,
}

impl IncrementalLoader {
    /// A loader for the empty search term with nothing fetched yet.
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self {
            term: String::new(),
            limit: limit.max(1),
            pages_loaded: 0,
            items: Vec::new(),
            has_more: true,
            in_flight: None,
            generation: 0,
            last_error: None,
        }
    }

    /// All products fetched so far for the current term, in page order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub fn pages_loaded(&self) -> u32 {
        self.pages_loaded
    }

    /// The error from the most recent failed fetch, cleared by the next
    /// successful page or a new search.
    #[must_use]
    pub fn last_error(&self) -> Option<&CatalogError> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> LoadState {
        if self.in_flight.is_some() {
            LoadState::Fetching
        } else if !self.has_more {
            LoadState::Done
        } else if self.last_error.is_some() {
            LoadState::Failed
        } else {
            LoadState::Idle
        }
    }

    /// Starts fetching the next page.
    ///
    /// Returns `None` while a fetch is in flight or once the last page has
    /// been received. Extra calls are dropped, not queued.
    pub fn begin_next_page(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() || !self.has_more {
            tracing::trace!(
                fetching = self.in_flight.is_some(),
                has_more = self.has_more,
                "next page request ignored"
            );
            return None;
        }

        let page = self.pages_loaded.checked_add(1)?;
        self.in_flight = Some(page);
        tracing::debug!(term = %self.term, page, "requesting catalog page");

        Some(PageRequest {
            term: self.term.clone(),
            page,
            limit: self.limit,
            generation: self.generation,
        })
    }

    /// Switches to a new search term.
    ///
    /// Discards accumulated results, resets the page counter and begins page 1
    /// for `term`. Any request still in flight for the previous term is
    /// dropped when it completes. Setting the current term again is a no-op
    /// and returns `None`.
    pub fn set_search(&mut self, term: &str) -> Option<PageRequest> {
        if term == self.term {
            return None;
        }

        tracing::debug!(from = %self.term, to = term, "search term changed");
        self.term = term.to_owned();
        self.generation = self.generation.wrapping_add(1);
        self.items.clear();
        self.pages_loaded = 0;
        self.has_more = true;
        self.in_flight = None;
        self.last_error = None;
        self.begin_next_page()
    }

    /// Applies the result of `request`.
    ///
    /// On success the page is appended and `has_more` recomputed from the
    /// short-page rule. On failure results and `has_more` stay as they were
    /// and the loader returns to idle so a later scroll retries the same page.
    pub fn complete(
        &mut self,
        request: &PageRequest,
        result: Result<Vec<Product>, CatalogError>,
    ) -> PageOutcome {
        if request.generation != self.generation || self.in_flight != Some(request.page) {
            tracing::debug!(
                term = %request.term,
                page = request.page,
                current_term = %self.term,
                "dropping stale catalog page"
            );
            return PageOutcome::Stale;
        }

        self.in_flight = None;

        match result {
            Ok(products) => {
                let count = products.len();
                self.has_more = !is_last_page(count, request.limit);
                self.pages_loaded = request.page;
                self.items.extend(products);
                self.last_error = None;
                tracing::debug!(
                    term = %self.term,
                    page = request.page,
                    count,
                    total = self.items.len(),
                    has_more = self.has_more,
                    "catalog page appended"
                );
                PageOutcome::Appended {
                    count,
                    has_more: self.has_more,
                }
            }
            Err(err) => {
                tracing::warn!(
                    term = %self.term,
                    page = request.page,
                    error = %err,
                    "catalog page fetch failed"
                );
                self.last_error = Some(err);
                PageOutcome::Failed
            }
        }
    }

    /// Fetches and applies the next page from `source`.
    pub async fn load_next_page<S: PageSource>(&mut self, source: &S) -> PageOutcome {
        let Some(request) = self.begin_next_page() else {
            return PageOutcome::Skipped;
        };
        let result = source
            .fetch_page(&request.term, request.page, request.limit)
            .await;
        self.complete(&request, result)
    }

    /// Switches to `term` and fetches its first page from `source`.
    pub async fn search<S: PageSource>(&mut self, source: &S, term: &str) -> PageOutcome {
        let Some(request) = self.set_search(term) else {
            return PageOutcome::Skipped;
        };
        let result = source
            .fetch_page(&request.term, request.page, request.limit)
            .await;
        self.complete(&request, result)
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
