//! HubSpot resource client
//!
//! HubSpot credentials are attached by the invocation endpoint, so callers
//! cannot set headers and may only send JSON bodies.

use super::base::{BaseClientConfig, BaseResourceClient};
use super::{ClientKind, ResourceClient};
use crate::error::ResourceInvokeError;
use crate::schema::{
    ApiHubSpotPayload, ApiInvokeResponse, HttpMethod, JsonBodyPayload, QueryParams,
    ResourcePayload, DEFAULT_API_TIMEOUT_MS,
};

/// Optional parts of a HubSpot call
#[derive(Debug, Clone, Default)]
pub struct HubSpotOptions {
    pub query: Option<QueryParams>,
    pub body: Option<JsonBodyPayload>,
    /// Defaults to [`DEFAULT_API_TIMEOUT_MS`]
    pub timeout_ms: Option<u64>,
}

/// Client for `api/hubspot` resources
#[derive(Debug, Clone)]
pub struct HubSpotResourceClient {
    base: BaseResourceClient,
}

impl HubSpotResourceClient {
    pub fn new(config: BaseClientConfig) -> Self {
        Self {
            base: BaseResourceClient::new(config),
        }
    }

    pub async fn invoke(
        &self,
        method: HttpMethod,
        path: impl Into<String>,
        invocation_key: &str,
        options: HubSpotOptions,
    ) -> Result<ApiInvokeResponse, ResourceInvokeError> {
        let payload = ResourcePayload::HubSpot(ApiHubSpotPayload {
            method,
            path: path.into(),
            query: options.query,
            body: options.body,
            timeout_ms: Some(options.timeout_ms.unwrap_or(DEFAULT_API_TIMEOUT_MS)),
        });

        self.base.invoke_raw(payload, invocation_key).await?.narrow()
    }
}

impl ResourceClient for HubSpotResourceClient {
    const KIND: ClientKind = ClientKind::HubSpot;

    fn from_config(config: BaseClientConfig) -> Self {
        Self::new(config)
    }

    fn base(&self) -> &BaseResourceClient {
        &self.base
    }
}
