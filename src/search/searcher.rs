//! Search execution against the GitHub REST API

use super::query::Query;
use super::types::SearchResults;
use crate::error::Result;
use crate::http::Transport;
use crate::pagination::{LinkPaginator, PaginationConfig};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Builds search URLs for a host and runs them through a transport
#[derive(Debug, Clone)]
pub struct Searcher<T> {
    host: String,
    api_base: Option<String>,
    transport: T,
    pagination: PaginationConfig,
}

impl<T: Transport> Searcher<T> {
    /// Create a searcher for `host` (e.g. `github.com`)
    pub fn new(host: impl Into<String>, transport: T) -> Self {
        Self {
            host: host.into(),
            api_base: None,
            transport,
            pagination: PaginationConfig::default(),
        }
    }

    /// Send API requests to `base` instead of `https://api.{host}`
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into().trim_end_matches('/').to_string());
        self
    }

    /// Set pagination limits for paginated searches
    #[must_use]
    pub fn with_pagination(mut self, config: PaginationConfig) -> Self {
        self.pagination = config;
        self
    }

    /// API URL: `https://api.{host}/search/{kind}?{params}&q={text}`
    pub fn execute_url(&self, query: &Query) -> String {
        let base = self
            .api_base
            .clone()
            .unwrap_or_else(|| format!("https://api.{}", self.host));
        format!("{base}/search/{}?{}", query.kind, query.encode(&[]))
    }

    /// Browser URL: `https://{host}/search?type={kind}&{params}&q={text}`
    pub fn browse_url(&self, query: &Query) -> String {
        format!(
            "https://{}/search?{}",
            self.host,
            query.encode(&[("type", query.kind.as_str())])
        )
    }

    /// Run the query; every page when `query.paginate` is set, otherwise
    /// only the page the parameters select
    pub async fn search<R: DeserializeOwned>(&self, query: &Query) -> Result<SearchResults<R>> {
        let url = self.execute_url(query);
        debug!("Searching {}", url);
        let paginator = LinkPaginator::with_config(&self.transport, self.pagination);

        if !query.paginate {
            let (results, _) = paginator.fetch_page::<SearchResults<R>>(&url).await?;
            return Ok(results);
        }

        // The aggregate reports what was actually collected
        let items = paginator.fetch_all::<SearchResults<R>>(&url).await?;
        Ok(SearchResults {
            total_count: items.len() as u64,
            incomplete_results: false,
            items,
        })
    }
}
