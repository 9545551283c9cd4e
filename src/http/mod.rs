//! HTTP module
//!
//! The transport seam used by pagination and the API clients, plus its
//! reqwest-backed implementation.

mod client;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use transport::{
    Transport, TransportRequest, TransportResponse, ACCEPT_GITHUB_V3, CONTENT_TYPE_JSON,
};

#[cfg(test)]
pub(crate) mod mock;
