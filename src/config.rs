//! Configuration
//!
//! Settings are layered: built-in defaults, then an optional YAML file, then
//! environment variables, then command-line flags.
//!
//! ```yaml
//! host: github.com
//! token: ghp_...
//! repo: octo-org/octo-repo
//! max_pages: 200
//! timeout_secs: 10
//! ```

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::pagination::{PaginationConfig, DEFAULT_MAX_PAGES};
use crate::types::{rest_prefix, RepoRef};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable naming the default host
pub const ENV_HOST: &str = "GH_HOST";
/// Environment variables holding the API token, in priority order
pub const ENV_TOKENS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];
/// Environment variable naming the default repository
pub const ENV_REPO: &str = "GH_REPO";
/// Environment variable overriding the REST API base URL
pub const ENV_API_URL: &str = "GH_API_URL";

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// GitHub host, e.g. `github.com` or a GitHub Enterprise hostname
    pub host: String,

    /// API token
    pub token: Option<String>,

    /// REST API base URL; derived from `host` when absent
    pub api_url: Option<String>,

    /// Default repository (`[HOST/]OWNER/REPO`)
    pub repo: Option<String>,

    /// Page ceiling for paginated requests; 0 removes the ceiling
    pub max_pages: u32,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "github.com".to_string(),
            token: None,
            api_url: None,
            repo: None,
            max_pages: DEFAULT_MAX_PAGES,
            timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Overlay values from the process environment
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Overlay values from `lookup`; empty values are ignored
    #[must_use]
    pub fn with_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get(ENV_HOST) {
            self.host = host;
        }
        if let Some(token) = ENV_TOKENS.iter().find_map(|key| get(*key)) {
            self.token = Some(token);
        }
        if let Some(repo) = get(ENV_REPO) {
            self.repo = Some(repo);
        }
        if let Some(api_url) = get(ENV_API_URL) {
            self.api_url = Some(api_url);
        }
        self
    }

    /// Repository to operate on
    pub fn repo(&self) -> Result<RepoRef> {
        self.repo
            .as_deref()
            .ok_or_else(|| Error::missing_field("repo (use --repo or GH_REPO)"))?
            .parse()
    }

    /// Host a repository lives on: its own if given, else the configured one
    pub fn host_for(&self, repo: &RepoRef) -> String {
        repo.host.clone().unwrap_or_else(|| self.host.clone())
    }

    /// REST prefix for `host`, ending in `/`
    pub fn rest_prefix(&self, host: &str) -> String {
        match &self.api_url {
            Some(url) => format!("{}/", url.trim_end_matches('/')),
            None => rest_prefix(host),
        }
    }

    /// Pagination limits
    pub fn pagination(&self) -> PaginationConfig {
        if self.max_pages == 0 {
            PaginationConfig::unbounded()
        } else {
            PaginationConfig::max_pages(self.max_pages)
        }
    }

    /// HTTP client configuration
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .token(self.token.clone())
            .build()
    }
}
