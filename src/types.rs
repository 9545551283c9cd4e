//! Common types used throughout ghkit
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::PUT => reqwest::Method::PUT,
            Method::PATCH => reqwest::Method::PATCH,
            Method::DELETE => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::PATCH => "PATCH",
            Method::DELETE => "DELETE",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Value Kind
// ============================================================================

/// Semantic type tag of a search parameter or qualifier.
///
/// Informational only: values are always stored in their string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Int,
    Bool,
}

impl ValueKind {
    /// Tag name as shown in help output
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Int => "int",
            ValueKind::Bool => "bool",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Repository Reference
// ============================================================================

/// A repository as given on the command line: `OWNER/REPO` or
/// `HOST/OWNER/REPO`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    /// Host the repository lives on, when it was given explicitly
    pub host: Option<String>,
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    /// Create a reference on the default host
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            host: None,
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// `OWNER/REPO`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split('/').collect();
        let invalid = || {
            Error::invalid_argument(
                "repo",
                format!("expected the \"[HOST/]OWNER/REPO\" format, got \"{s}\""),
            )
        };
        if parts.iter().any(|p| p.is_empty()) {
            return Err(invalid());
        }
        match parts.as_slice() {
            [owner, name] => Ok(Self::new(*owner, *name)),
            [host, owner, name] => Ok(Self {
                host: Some((*host).to_string()),
                owner: (*owner).to_string(),
                name: (*name).to_string(),
            }),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.host {
            Some(host) => write!(f, "{host}/{}/{}", self.owner, self.name),
            None => write!(f, "{}/{}", self.owner, self.name),
        }
    }
}

/// REST API prefix for a host, always ending in `/`.
///
/// github.com is served from `api.github.com`; GitHub Enterprise Server
/// instances expose the API under `/api/v3/`.
pub fn rest_prefix(host: &str) -> String {
    let host = host.trim().trim_end_matches('/').to_lowercase();
    if host == "github.com" || host == "api.github.com" {
        "https://api.github.com/".to_string()
    } else {
        format!("https://{host}/api/v3/")
    }
}
