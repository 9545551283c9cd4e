//! Output module
//!
//! Renders API results for the terminal.
//!
//! # Overview
//!
//! - [`to_json_pretty`] - indented JSON for machine consumption
//! - [`environments_table`] / [`repositories_table`] - tables for people
//! - [`EnvironmentExport`] - an environment with its secrets, as JSON or as
//!   an env file

mod export;
mod table;

pub use export::EnvironmentExport;
pub use table::{environments_table, repositories_table};

use crate::error::Result;
use serde::Serialize;

/// Serialize `value` as indented JSON
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests;
