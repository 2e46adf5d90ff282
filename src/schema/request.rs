//! Request envelope

use super::ResourcePayload;
use serde::{Deserialize, Serialize};

/// Envelope POSTed to the invocation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokeRequest {
    pub payload: ResourcePayload,
    /// Stable key reused across invocations of the same logical operation,
    /// searchable in source for tracking. Passed through untouched.
    #[serde(rename = "invocationKey")]
    pub invocation_key: String,
}

impl InvokeRequest {
    pub fn new(payload: impl Into<ResourcePayload>, invocation_key: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            invocation_key: invocation_key.into(),
        }
    }
}

/// Check an invocation key against the accepted format: an ASCII letter or
/// digit followed by letters, digits, `.`, `_`, `:` or `-`.
pub fn is_valid_invocation_key(key: &str) -> bool {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphanumeric()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | ':' | '-'))
}
