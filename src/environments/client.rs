//! Environment CRUD against the GitHub REST API

use super::types::{Environment, EnvironmentsPage, Secret, SecretsPage};
use crate::error::{Error, Result};
use crate::http::{Transport, TransportRequest};
use crate::pagination::{LinkPaginator, PaginationConfig};
use crate::types::{Method, RepoRef};
use serde_json::json;
use std::collections::BTreeMap;
use tracing::{debug, info};
use url::Url;

/// Page size requested from list endpoints
const PER_PAGE: &str = "100";

/// Client for one repository's environments
#[derive(Debug, Clone)]
pub struct EnvironmentsClient<T> {
    transport: T,
    rest_prefix: String,
    repo: RepoRef,
    pagination: PaginationConfig,
}

impl<T: Transport> EnvironmentsClient<T> {
    /// Create a client. `rest_prefix` is the API root, e.g.
    /// `https://api.github.com/`.
    pub fn new(transport: T, rest_prefix: impl Into<String>, repo: RepoRef) -> Self {
        Self {
            transport,
            rest_prefix: rest_prefix.into(),
            repo,
            pagination: PaginationConfig::default(),
        }
    }

    /// Set pagination limits for list requests
    #[must_use]
    pub fn with_pagination(mut self, config: PaginationConfig) -> Self {
        self.pagination = config;
        self
    }

    /// Repository this client operates on
    pub fn repo(&self) -> &RepoRef {
        &self.repo
    }

    /// `{prefix}repos/{owner}/{repo}/environments[/{segments}...]`
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.rest_prefix)?;
        url.path_segments_mut()
            .map_err(|()| Error::config(format!("invalid API URL: {}", self.rest_prefix)))?
            .pop_if_empty()
            .extend([
                "repos",
                self.repo.owner.as_str(),
                self.repo.name.as_str(),
                "environments",
            ])
            .extend(segments);
        Ok(url)
    }

    fn paginator(&self) -> LinkPaginator<&T> {
        LinkPaginator::with_config(&self.transport, self.pagination)
    }

    /// Every environment of the repository
    pub async fn list(&self) -> Result<Vec<Environment>> {
        let mut url = self.endpoint(&[])?;
        url.query_pairs_mut().append_pair("per_page", PER_PAGE);
        debug!("Listing environments of {}", self.repo);
        self.paginator()
            .fetch_all::<EnvironmentsPage>(url.as_str())
            .await
    }

    /// A single environment
    pub async fn get(&self, name: &str) -> Result<Environment> {
        let url = self.endpoint(&[name])?;
        let response = self
            .transport
            .send(TransportRequest::get(url.as_str()))
            .await?
            .error_for_status(url.as_str())?;
        response.json()
    }

    /// Every secret of an environment
    pub async fn secrets(&self, name: &str) -> Result<Vec<Secret>> {
        let mut url = self.endpoint(&[name, "secrets"])?;
        url.query_pairs_mut().append_pair("per_page", PER_PAGE);
        self.paginator().fetch_all::<SecretsPage>(url.as_str()).await
    }

    /// Create an environment, or update it if it exists.
    ///
    /// Variables are sent as `{"variables": {...}}`; with no variables the
    /// request has no body.
    pub async fn create_or_update(
        &self,
        name: &str,
        variables: &BTreeMap<String, String>,
    ) -> Result<()> {
        let url = self.endpoint(&[name])?;
        let mut request = TransportRequest::new(Method::PUT, url.as_str());
        if !variables.is_empty() {
            request = request.json(&json!({ "variables": variables }))?;
        }
        self.transport
            .send(request)
            .await?
            .error_for_status(url.as_str())?;
        info!("Environment {} saved in {}", name, self.repo);
        Ok(())
    }

    /// Delete an environment
    pub async fn delete(&self, name: &str) -> Result<()> {
        let url = self.endpoint(&[name])?;
        self.transport
            .send(TransportRequest::new(Method::DELETE, url.as_str()))
            .await?
            .error_for_status(url.as_str())?;
        info!("Environment {} deleted from {}", name, self.repo);
        Ok(())
    }
}

/// Parse `KEY=VALUE,KEY2=VALUE2` into a map. Whitespace around keys and
/// values is trimmed; an empty string yields no variables.
pub fn parse_variables(input: &str) -> Result<BTreeMap<String, String>> {
    let mut variables = BTreeMap::new();
    if input.trim().is_empty() {
        return Ok(variables);
    }

    for entry in input.split(',') {
        let (key, value) = entry.split_once('=').ok_or_else(|| {
            Error::invalid_argument(
                "variables",
                format!("expected KEY=VALUE, got \"{}\"", entry.trim()),
            )
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::invalid_argument(
                "variables",
                format!("empty variable name in \"{}\"", entry.trim()),
            ));
        }
        variables.insert(key.to_string(), value.trim().to_string());
    }

    Ok(variables)
}
