//! Link header pagination engine
//!
//! Fetches a listing one page at a time, following `rel="next"` until the
//! server stops sending one, and concatenates the pages' records.

use super::link::next_page;
use super::types::{NextPage, Page, PaginationConfig, PaginationState};
use crate::error::{Error, Result};
use crate::http::{Transport, TransportRequest};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Walks a paginated endpoint through its Link headers
#[derive(Debug, Clone)]
pub struct LinkPaginator<T> {
    transport: T,
    config: PaginationConfig,
}

impl<T: Transport> LinkPaginator<T> {
    /// Create a paginator with the default page ceiling
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, PaginationConfig::default())
    }

    /// Create a paginator with custom configuration
    pub fn with_config(transport: T, config: PaginationConfig) -> Self {
        Self { transport, config }
    }

    /// Get the pagination configuration
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Fetch and decode one page.
    ///
    /// A non-2xx status is an error; the body is only decoded on success.
    pub async fn fetch_page<P: DeserializeOwned>(&self, url: &str) -> Result<(P, NextPage)> {
        let response = self
            .transport
            .send(TransportRequest::get(url))
            .await?
            .error_for_status(url)?;
        let page = response.json()?;
        let next = next_page(&response.headers)?;
        Ok((page, next))
    }

    /// Fetch every page starting at `url` and return all records.
    ///
    /// The page size is whatever `url` asks for. Any failure discards the
    /// records gathered so far.
    pub async fn fetch_all<P: Page>(&self, url: &str) -> Result<Vec<P::Item>> {
        let mut items = Vec::new();
        let mut state = PaginationState::new();
        let mut url = url.to_string();

        loop {
            let (page, next) = self.fetch_page::<P>(&url).await?;
            let total = page.total_count();
            let records = page.into_items();
            state.add_page(records.len());
            debug!(
                "Fetched page {} ({} records, {} so far, total {:?})",
                state.pages,
                records.len(),
                state.total_fetched,
                total
            );
            items.extend(records);

            match next {
                NextPage::Continue { url: next_url } => {
                    if let Some(max_pages) = self.config.max_pages {
                        if state.pages >= max_pages {
                            return Err(Error::PaginationLimitExceeded { max_pages });
                        }
                    }
                    url = next_url;
                }
                NextPage::Done => {
                    state.mark_done();
                    break;
                }
            }
        }

        Ok(items)
    }
}
