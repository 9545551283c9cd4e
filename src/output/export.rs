//! Environment export documents

use crate::environments::{Environment, Secret, Variable};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;

/// An environment together with its secrets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentExport {
    pub id: u64,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub secrets: Vec<Secret>,
    pub variables: Vec<Variable>,
    pub read_access: Vec<String>,
    pub secrets_access: Vec<String>,
}

impl EnvironmentExport {
    /// Combine an environment with the secrets fetched for it
    pub fn new(environment: Environment, secrets: Vec<Secret>) -> Self {
        Self {
            id: environment.id,
            name: environment.name,
            created_at: environment.created_at,
            secrets,
            variables: environment.variables,
            read_access: environment.read_access,
            secrets_access: environment.secrets_access,
        }
    }

    /// Render as an env file:
    ///
    /// ```text
    /// NAME=production
    /// SECRET_API_KEY=
    /// READ_ACCESS=@alice, @bob
    /// ```
    pub fn to_env_file(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "NAME={}", self.name);
        for secret in &self.secrets {
            let _ = writeln!(out, "SECRET_{}={}", secret.name, secret.value);
        }

        let read_access = self
            .read_access
            .iter()
            .map(|login| format!("@{login}"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "READ_ACCESS={read_access}");
        out
    }
}
