//! Transport doubles for unit tests

use super::http::{Transport, TransportRequest, TransportResponse};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Records every request and answers with a canned response
pub(crate) struct RecordingTransport {
    status: u16,
    body: String,
    requests: Mutex<Vec<TransportRequest>>,
}

impl RecordingTransport {
    pub(crate) fn new(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.to_string(),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Answers with a logical failure, which every typed client accepts
    pub(crate) fn stub() -> Arc<Self> {
        Self::new(
            200,
            r#"{"ok":false,"requestId":"stub","error":{"message":"stubbed"}}"#,
        )
    }

    pub(crate) fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn single_request(&self) -> TransportRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].clone()
    }

    /// The `payload` object of the single recorded envelope
    pub(crate) fn single_payload(&self) -> Value {
        let body: Value = serde_json::from_slice(&self.single_request().body).unwrap();
        body["payload"].clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post(&self, request: TransportRequest) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(request);
        Ok(TransportResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

/// Fails every request with the given message
pub(crate) struct FailingTransport(pub(crate) String);

#[async_trait]
impl Transport for FailingTransport {
    async fn post(&self, _request: TransportRequest) -> Result<TransportResponse> {
        Err(anyhow!("{}", self.0))
    }
}

/// Never answers
pub(crate) struct StalledTransport;

#[async_trait]
impl Transport for StalledTransport {
    async fn post(&self, _request: TransportRequest) -> Result<TransportResponse> {
        std::future::pending().await
    }
}
