//! Environments module
//!
//! Deployment environments of a repository: listing, fetching, creating,
//! deleting, and reading their secrets.

mod client;
mod types;

pub use client::{parse_variables, EnvironmentsClient};
pub use types::{Environment, EnvironmentsPage, Secret, SecretsPage, Variable};

#[cfg(test)]
mod tests;
