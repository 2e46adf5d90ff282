//! S3 storage resource client

use super::base::{BaseClientConfig, BaseResourceClient};
use super::{ClientKind, ResourceClient};
use crate::error::ResourceInvokeError;
use crate::schema::{ResourcePayload, S3Command, StorageInvokeResponse, StorageS3Payload};
use serde_json::{Map, Value};

/// Optional parts of an S3 call
#[derive(Debug, Clone, Default)]
pub struct S3Options {
    pub timeout_ms: Option<u64>,
}

/// Client for `storage/s3` resources
#[derive(Debug, Clone)]
pub struct S3ResourceClient {
    base: BaseResourceClient,
}

impl S3ResourceClient {
    pub fn new(config: BaseClientConfig) -> Self {
        Self {
            base: BaseResourceClient::new(config),
        }
    }

    /// Run `command`; `params` depend on the command and are forwarded as-is
    pub async fn invoke(
        &self,
        command: S3Command,
        params: Map<String, Value>,
        invocation_key: &str,
        options: S3Options,
    ) -> Result<StorageInvokeResponse, ResourceInvokeError> {
        let payload = ResourcePayload::S3(StorageS3Payload {
            command,
            params,
            timeout_ms: options.timeout_ms,
        });

        self.base.invoke_raw(payload, invocation_key).await?.narrow()
    }
}

impl ResourceClient for S3ResourceClient {
    const KIND: ClientKind = ClientKind::S3;

    fn from_config(config: BaseClientConfig) -> Self {
        Self::new(config)
    }

    fn base(&self) -> &BaseResourceClient {
        &self.base
    }
}
