//! Pagination module
//!
//! Supports: Link header (RFC 5988) pagination as used by the GitHub REST API
//!
//! # Overview
//!
//! [`LinkPaginator`] issues one GET per page, decodes each body into a
//! [`Page`], and follows the `rel="next"` entry of the `Link` response header
//! until there is none. Pages are fetched strictly in sequence.

mod engine;
mod link;
mod types;

pub use engine::LinkPaginator;
pub use link::{find_next_page, find_rel, next_page, parse_link_header};
pub use types::{NextPage, Page, PaginationConfig, PaginationState, DEFAULT_MAX_PAGES};
