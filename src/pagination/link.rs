//! Link header parsing
//!
//! Format: `Link: <https://api.github.com/...?page=2>; rel="next", <...>; rel="last"`

use super::types::NextPage;
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{HeaderMap, LINK};

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<([^>]+)>;\s*rel="([^"]+)""#).expect("valid link regex"));

/// All `(url, rel)` pairs of a Link header value, in header order
pub fn parse_link_header(header: &str) -> Vec<(&str, &str)> {
    LINK_RE
        .captures_iter(header)
        .filter_map(|caps| match (caps.get(1), caps.get(2)) {
            (Some(url), Some(rel)) => Some((url.as_str(), rel.as_str())),
            _ => None,
        })
        .collect()
}

/// URL of the first entry whose rel is exactly `rel`
pub fn find_rel<'a>(header: &'a str, rel: &str) -> Option<&'a str> {
    parse_link_header(header)
        .into_iter()
        .find(|(_, r)| *r == rel)
        .map(|(url, _)| url)
}

/// URL of the `next` page, if the header names one
pub fn find_next_page(header: &str) -> Option<&str> {
    find_rel(header, "next")
}

/// Where to go after a response with these headers. A `Link` value that
/// is not visible ASCII is a decode error.
pub fn next_page(headers: &HeaderMap) -> Result<NextPage> {
    let Some(value) = headers.get(LINK) else {
        return Ok(NextPage::Done);
    };
    let header = value
        .to_str()
        .map_err(|e| Error::decode(format!("invalid Link header: {e}")))?;
    Ok(find_next_page(header).map_or(NextPage::Done, NextPage::with_url))
}
