//! Search module
//!
//! Typed, validated search queries for the GitHub REST search endpoints.
//!
//! # Overview
//!
//! - [`Validator`] - the rules a value must pass before it is accepted
//! - [`Qualifier`] / [`Parameter`] - a named value that remembers whether it
//!   was explicitly set
//! - [`Query`] - keywords plus the fixed parameter and qualifier sets
//! - [`Searcher`] - turns a query into API and browser URLs and runs it

mod qualifier;
mod query;
mod searcher;
mod types;
mod validators;

pub use qualifier::{Parameter, Qualifier};
pub use query::{Parameters, Qualifiers, Query, QUALIFIER_NAMES};
pub use searcher::Searcher;
pub use types::{Owner, Repository, SearchResults};
pub use validators::{ValidationError, Validator};
