//! HubSpot API payload
//!
//! HubSpot credentials are injected by the invocation endpoint, so the
//! payload carries no headers.

use super::common::{HttpMethod, JsonBodyPayload, QueryParams};
use serde::{Deserialize, Serialize};

/// Payload for invoking a HubSpot API resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiHubSpotPayload {
    pub method: HttpMethod,
    /// HubSpot API path (e.g. "/crm/v3/objects/deals")
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<QueryParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<JsonBodyPayload>,
    #[serde(rename = "timeoutMs", default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}
