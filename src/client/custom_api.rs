//! Custom API resource client

use super::base::{BaseClientConfig, BaseResourceClient};
use super::{ClientKind, ResourceClient};
use crate::error::ResourceInvokeError;
use crate::schema::{
    ApiCustomPayload, ApiInvokeResponse, BodyPayload, Headers, HttpMethod, QueryParams,
    ResourcePayload, DEFAULT_API_TIMEOUT_MS,
};

/// Optional parts of a custom API call
#[derive(Debug, Clone, Default)]
pub struct CustomApiOptions {
    pub query: Option<QueryParams>,
    pub headers: Option<Headers>,
    pub body: Option<BodyPayload>,
    /// Defaults to [`DEFAULT_API_TIMEOUT_MS`]
    pub timeout_ms: Option<u64>,
}

/// Client for `api/custom` resources
#[derive(Debug, Clone)]
pub struct CustomApiResourceClient {
    base: BaseResourceClient,
}

impl CustomApiResourceClient {
    pub fn new(config: BaseClientConfig) -> Self {
        Self {
            base: BaseResourceClient::new(config),
        }
    }

    /// Call `method path` on the resource's upstream API
    pub async fn invoke(
        &self,
        method: HttpMethod,
        path: impl Into<String>,
        invocation_key: &str,
        options: CustomApiOptions,
    ) -> Result<ApiInvokeResponse, ResourceInvokeError> {
        let payload = ResourcePayload::CustomApi(ApiCustomPayload {
            method,
            path: path.into(),
            query: options.query,
            headers: options.headers,
            body: options.body,
            timeout_ms: Some(options.timeout_ms.unwrap_or(DEFAULT_API_TIMEOUT_MS)),
        });

        self.base.invoke_raw(payload, invocation_key).await?.narrow()
    }
}

impl ResourceClient for CustomApiResourceClient {
    const KIND: ClientKind = ClientKind::CustomApi;

    fn from_config(config: BaseClientConfig) -> Self {
        Self::new(config)
    }

    fn base(&self) -> &BaseResourceClient {
        &self.base
    }
}
