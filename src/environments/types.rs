//! Environment API types

use crate::pagination::Page;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A deployment environment of a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Variables embedded in the environment, when the server includes them
    #[serde(default)]
    pub variables: Vec<Variable>,
    #[serde(default)]
    pub read_access: Vec<String>,
    #[serde(default, rename = "secrets_read_access")]
    pub secrets_access: Vec<String>,
}

/// An environment secret. The API never returns secret values, so `value`
/// is empty unless the server chooses to send one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// An environment variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of `GET /repos/{owner}/{repo}/environments`
#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentsPage {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub environments: Vec<Environment>,
}

impl Page for EnvironmentsPage {
    type Item = Environment;

    fn total_count(&self) -> Option<u64> {
        Some(self.total_count)
    }

    fn into_items(self) -> Vec<Environment> {
        self.environments
    }
}

/// One page of `GET .../environments/{name}/secrets`
#[derive(Debug, Clone, Deserialize)]
pub struct SecretsPage {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub secrets: Vec<Secret>,
}

impl Page for SecretsPage {
    type Item = Secret;

    fn total_count(&self) -> Option<u64> {
        Some(self.total_count)
    }

    fn into_items(self) -> Vec<Secret> {
        self.secrets
    }
}
