//! Transport-level invocation error

use thiserror::Error;

/// Raised when an invocation could not be carried out at all: the endpoint
/// was unreachable, the response was not JSON, or the response did not
/// match the shape the client expected.
///
/// A reachable endpoint answering `ok: false` is not an error; it comes back
/// as [`crate::schema::InvokeFailure`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ResourceInvokeError {
    message: String,
    http_status: Option<u16>,
    request_id: Option<String>,
}

impl ResourceInvokeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            http_status: None,
            request_id: None,
        }
    }

    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn http_status(&self) -> Option<u16> {
        self.http_status
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}
