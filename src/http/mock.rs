//! In-memory transport for unit tests

use super::transport::{Transport, TransportRequest, TransportResponse};
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, LINK};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays canned responses in order and records every request
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<TransportResponse>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response
    pub fn push_json(&self, status: u16, body: serde_json::Value) -> &Self {
        self.push(TransportResponse::new(status, body.to_string()))
    }

    /// Queue a JSON response carrying a `Link` header
    pub fn push_json_with_link(&self, status: u16, body: serde_json::Value, link: &str) -> &Self {
        let mut response = TransportResponse::new(status, body.to_string());
        response
            .headers
            .insert(LINK, HeaderValue::from_str(link).unwrap());
        self.push(response)
    }

    pub fn push(&self, response: TransportResponse) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Requests sent so far
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// URLs requested so far
    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Other("mock transport has no response queued".into()))
    }
}
