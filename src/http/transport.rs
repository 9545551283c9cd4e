//! Transport abstraction
//!
//! The pagination engine and the API clients only need "send one request,
//! get back status, headers and body". [`Transport`] is that seam: the
//! reqwest-backed [`HttpClient`](super::HttpClient) implements it for real
//! use, tests implement it in memory.

use crate::error::{Error, Result};
use crate::types::{Method, StringMap};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// `Content-Type` sent with every request
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// `Accept` sent with every request
pub const ACCEPT_GITHUB_V3: &str = "application/vnd.github.v3+json";

/// A single HTTP request
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: StringMap,
    pub body: Option<Bytes>,
}

impl TransportRequest {
    /// Create a request carrying the standard GitHub JSON headers
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        let mut headers = StringMap::new();
        headers.insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());
        headers.insert("Accept".to_string(), ACCEPT_GITHUB_V3.to_string());
        Self {
            method,
            url: url.into(),
            headers,
            body: None,
        }
    }

    /// GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Add or replace a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Serialize `body` as the JSON request body
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(Bytes::from(serde_json::to_vec(body)?));
        Ok(self)
    }
}

/// A fully received HTTP response
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TransportResponse {
    /// Create a response with no headers
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Header value as a string, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Turn a non-2xx response into an [`Error::HttpStatus`]
    pub fn error_for_status(self, url: &str) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::from_response(self.status, url, &self.body))
        }
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body)
            .map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))
    }
}

/// Something that can perform HTTP requests
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and read the whole response
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        (**self).send(request).await
    }
}
