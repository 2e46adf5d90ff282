//! Custom API payload

use super::common::{BodyPayload, Headers, HttpMethod, QueryParams};
use serde::{Deserialize, Serialize};

/// Default remote timeout for API resources, in milliseconds
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Payload for invoking a custom API resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiCustomPayload {
    pub method: HttpMethod,
    /// Path appended to the resource's configured base URL
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<QueryParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<BodyPayload>,
    #[serde(rename = "timeoutMs", default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}
