//! Pagination state shared by every list screen.
//!
//! [`PaginationController`] owns the [`PaginationFilter`] of one screen and
//! translates UI events (search submit, page change) into a fresh filter. The
//! filter is what gets sent to the catalog API, encoded by
//! [`generate_pagination_filter_query`]. [`Paginated`] turns the API's
//! [`Page`] into the view consumed by the list templates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page sizes offered by the list screens. The first entry is the default.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 50, 100, 200];

pub const DEFAULT_PAGE_SIZE: usize = PAGE_SIZE_OPTIONS[0];

/// Errors raised when a page change carries values the UI should never send.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page numbers start at 1")]
    PageNumberOutOfRange,
    #[error("page size {0} is not one of the offered sizes")]
    UnsupportedPageSize(usize),
}

/// Which page of a collection a screen currently wants.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationFilter {
    /// Zero-based page index.
    pub page_index: usize,
    pub page_size: usize,
    /// Trimmed search text; empty means no filter.
    pub search: String,
}

impl Default for PaginationFilter {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
        }
    }
}

impl PaginationFilter {
    /// One-based page number as shown to the user.
    pub fn page_number(&self) -> usize {
        self.page_index.saturating_add(1)
    }

    /// Encodes the filter as a query string. See [`generate_pagination_filter_query`].
    pub fn to_query(&self) -> String {
        generate_pagination_filter_query(self)
    }
}

/// Serializes a filter for a GET request.
///
/// `pageIndex` is always present, `pageSize` only when non-zero and `search`
/// only when non-empty. The order is fixed so generated URLs stay stable.
/// No percent-encoding is applied here; the URL layer takes care of it.
pub fn generate_pagination_filter_query(filter: &PaginationFilter) -> String {
    pagination_filter_pairs(filter)
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Unencoded key/value pairs of [`generate_pagination_filter_query`], in the
/// same order, for callers that encode them through a URL builder.
pub fn pagination_filter_pairs(filter: &PaginationFilter) -> Vec<(&'static str, String)> {
    let mut pairs = vec![("pageIndex", filter.page_index.to_string())];
    if filter.page_size != 0 {
        pairs.push(("pageSize", filter.page_size.to_string()));
    }
    if !filter.search.is_empty() {
        pairs.push(("search", filter.search.clone()));
    }
    pairs
}

/// Single source of truth for the filter of one list screen.
#[derive(Clone, Debug, Default)]
pub struct PaginationController {
    filter: PaginationFilter,
}

impl PaginationController {
    /// Starts from `seed` when given, otherwise from the default filter.
    pub fn initialize(seed: Option<PaginationFilter>) -> Self {
        Self {
            filter: seed.unwrap_or_default(),
        }
    }

    pub fn filter(&self) -> &PaginationFilter {
        &self.filter
    }

    /// Consumes the controller returning the held filter.
    pub fn into_filter(self) -> PaginationFilter {
        self.filter
    }

    /// Moves to the one-based `page_number` with the given page size.
    ///
    /// The search text is kept. Invalid input leaves the held filter untouched.
    pub fn on_page_change(
        &mut self,
        page_number: usize,
        page_size: usize,
    ) -> Result<PaginationFilter, PaginationError> {
        if page_number == 0 {
            return Err(PaginationError::PageNumberOutOfRange);
        }
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            return Err(PaginationError::UnsupportedPageSize(page_size));
        }

        self.filter = PaginationFilter {
            page_index: page_number - 1,
            page_size,
            search: self.filter.search.clone(),
        };
        Ok(self.filter.clone())
    }

    /// Applies a new search and jumps back to the first page.
    pub fn on_search(&mut self, raw_text: &str) -> PaginationFilter {
        self.filter = PaginationFilter {
            page_index: 0,
            page_size: self.filter.page_size,
            search: raw_text.trim().to_string(),
        };
        self.filter.clone()
    }
}

/// One slice of a collection as returned by the catalog API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page_index: usize,
    pub page_size: usize,
    pub total_rows: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    pub fn empty(filter: &PaginationFilter) -> Self {
        Self {
            data: Vec::new(),
            page_index: filter.page_index,
            page_size: filter.page_size,
            total_rows: 0,
            total_pages: 0,
            has_next: false,
            has_previous: false,
        }
    }

    /// Maps the rows keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            page_index: self.page_index,
            page_size: self.page_size,
            total_rows: self.total_rows,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Template-facing view of a [`Page`] with a window of page links.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// One-based page links; `None` marks an elided range.
    pub pages: Vec<Option<usize>>,
    /// One-based current page.
    pub page: usize,
    pub page_size: usize,
    pub total_rows: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Paginated<T> {
    /// Builds the view for the page requested with `filter`.
    ///
    /// Page links follow the held filter rather than the position echoed by
    /// the API, so they always carry a page size the list screen accepts.
    pub fn for_filter(page: Page<T>, filter: &PaginationFilter) -> Self {
        Self::build(page, filter.page_number(), filter.page_size)
    }

    fn build(page: Page<T>, current_page: usize, page_size: usize) -> Self {
        let pages = get_pages(page.total_pages, current_page, 2, 2, 4, 2);

        Self {
            items: page.data,
            pages,
            page: current_page,
            page_size,
            total_rows: page.total_rows,
            has_next: page.has_next,
            has_previous: page.has_previous,
        }
    }
}

impl<T> From<Page<T>> for Paginated<T> {
    fn from(page: Page<T>) -> Self {
        let current_page = page.page_index.saturating_add(1);
        let page_size = page.page_size;
        Self::build(page, current_page, page_size)
    }
}
