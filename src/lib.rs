// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # ghkit
//!
//! GitHub repository environments and validated search, as a library and a
//! command-line tool.
//!
//! ## Features
//!
//! - **Environments**: create, delete, list and export deployment
//!   environments; run a command with an environment's secrets and variables
//! - **Search**: typed repository search queries whose qualifiers are
//!   validated before any request is sent
//! - **Pagination**: `Link` header pagination with a page ceiling
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ghkit::http::HttpClient;
//! use ghkit::search::{Query, Repository, Searcher};
//!
//! #[tokio::main]
//! async fn main() -> ghkit::Result<()> {
//!     let mut query = Query::repositories().with_keywords(["terminal", "ui"]);
//!     query.qualifiers.language.set("rust")?;
//!     query.qualifiers.stars.set(">=500")?;
//!
//!     let searcher = Searcher::new("github.com", HttpClient::new()?);
//!     let results = searcher.search::<Repository>(&query).await?;
//!     for repo in results.items {
//!         println!("{} ({} stars)", repo.full_name, repo.stargazers_count);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        cli (Runner)                       │
//! └───────────────┬──────────────────────────┬────────────────┘
//!                 │                          │
//! ┌───────────────┴─────────────┐ ┌──────────┴────────────────┐
//! │ environments  process output│ │ search                    │
//! │ CRUD, secrets, run, export  │ │ validators → query → URL  │
//! └───────────────┬─────────────┘ └──────────┬────────────────┘
//!                 │                          │
//! ┌───────────────┴──────────────────────────┴────────────────┐
//! │ pagination (Link header) → http (Transport / HttpClient)  │
//! └───────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Layered settings
pub mod config;

/// Transport seam and reqwest client
pub mod http;

/// Link header pagination
pub mod pagination;

/// Repository search
pub mod search;

/// Deployment environments
pub mod environments;

/// Child process launching
pub mod process;

/// Terminal rendering
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
