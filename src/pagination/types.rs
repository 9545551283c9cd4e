//! Pagination types and traits
//!
//! Defines the core pagination abstractions used by the engine.

use serde::de::DeserializeOwned;

/// Default ceiling on the number of pages a single run may fetch
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available at this URL
    Continue {
        /// URL of the next page, taken verbatim from the Link header
        url: String,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with a new URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::Continue { url: url.into() }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }

    /// URL of the next page, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Continue { url } => Some(url),
            Self::Done => None,
        }
    }
}

/// Configuration for pagination behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Maximum number of pages to fetch; `None` trusts the server's Link
    /// headers without limit
    pub max_pages: Option<u32>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_pages: Some(DEFAULT_MAX_PAGES),
        }
    }
}

impl PaginationConfig {
    /// Limit a run to `max_pages` pages
    pub fn max_pages(max_pages: u32) -> Self {
        Self {
            max_pages: Some(max_pages),
        }
    }

    /// Follow next links for as long as the server sends them
    pub fn unbounded() -> Self {
        Self { max_pages: None }
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Pages fetched so far
    pub pages: u32,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one fetched page holding `count` records
    pub fn add_page(&mut self, count: usize) {
        self.pages += 1;
        self.total_fetched += count as u64;
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}

/// Shape of one page of a paginated listing.
///
/// GitHub list endpoints wrap their items in an object carrying a total
/// count, e.g. `{"total_count": 3, "environments": [...]}`.
pub trait Page: DeserializeOwned {
    /// Record type held by the page
    type Item;

    /// Total count reported by the server, if the page carries one
    fn total_count(&self) -> Option<u64>;

    /// Consume the page, yielding its records in order
    fn into_items(self) -> Vec<Self::Item>;
}

/// A bare JSON array is also a page
impl<T: DeserializeOwned> Page for Vec<T> {
    type Item = T;

    fn total_count(&self) -> Option<u64> {
        None
    }

    fn into_items(self) -> Vec<T> {
        self
    }
}
