//! Shared invocation transport for every resource kind

use super::http::{sanitize_for_log, shared_transport, Transport, TransportRequest};
use crate::error::ResourceInvokeError;
use crate::schema::{is_valid_invocation_key, InvokeRequest, InvokeResponse, ResourcePayload};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Header carrying the caller's JWT
pub const JWT_HEADER: &str = "x-major-jwt";

/// Construction parameters for a resource client
#[derive(Clone)]
pub struct BaseClientConfig {
    pub base_url: String,
    pub application_id: String,
    pub resource_id: String,
    /// Sent as `x-major-jwt` when present
    pub major_jwt_token: Option<String>,
    /// Defaults to the process-wide reqwest transport
    pub transport: Option<Arc<dyn Transport>>,
    /// Local deadline for the whole HTTP exchange. Unset by default: the
    /// payload's `timeoutMs` is only a hint for the remote side.
    pub local_timeout: Option<Duration>,
}

impl BaseClientConfig {
    pub fn new(
        base_url: impl Into<String>,
        application_id: impl Into<String>,
        resource_id: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            application_id: application_id.into(),
            resource_id: resource_id.into(),
            major_jwt_token: None,
            transport: None,
            local_timeout: None,
        }
    }

    /// Empty tokens are treated as absent
    pub fn with_jwt_token(mut self, token: Option<String>) -> Self {
        self.major_jwt_token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_local_timeout(mut self, timeout: Duration) -> Self {
        self.local_timeout = Some(timeout);
        self
    }
}

impl fmt::Debug for BaseClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseClientConfig")
            .field("base_url", &self.base_url)
            .field("application_id", &self.application_id)
            .field("resource_id", &self.resource_id)
            .field("major_jwt_token", &self.major_jwt_token.as_ref().map(|_| "<redacted>"))
            .field("custom_transport", &self.transport.is_some())
            .field("local_timeout", &self.local_timeout)
            .finish()
    }
}

/// Client bound to one `(application, resource)` pair.
///
/// Holds only immutable configuration, so clones can be shared freely
/// across tasks.
#[derive(Clone)]
pub struct BaseResourceClient {
    base_url: String,
    application_id: String,
    resource_id: String,
    major_jwt_token: Option<String>,
    transport: Arc<dyn Transport>,
    local_timeout: Option<Duration>,
}

impl BaseResourceClient {
    pub fn new(config: BaseClientConfig) -> Self {
        let base_url = config
            .base_url
            .strip_suffix('/')
            .unwrap_or(&config.base_url)
            .to_string();

        Self {
            base_url,
            application_id: config.application_id,
            resource_id: config.resource_id,
            major_jwt_token: config.major_jwt_token.filter(|t| !t.is_empty()),
            transport: config.transport.unwrap_or_else(shared_transport),
            local_timeout: config.local_timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// `{base}/internal/apps/v1/{application}/resource/{resource}/invoke`
    pub fn invoke_url(&self) -> String {
        format!(
            "{}/internal/apps/v1/{}/resource/{}/invoke",
            self.base_url,
            urlencoding::encode(&self.application_id),
            urlencoding::encode(&self.resource_id)
        )
    }

    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = &self.major_jwt_token {
            headers.push((JWT_HEADER.to_string(), token.clone()));
        }
        headers
    }

    /// POST `payload` under `invocation_key` and parse the response.
    ///
    /// The response body is parsed whatever the HTTP status; `ok: false`
    /// comes back as [`InvokeResponse::Failure`]. Network errors, local
    /// deadline expiry and unparseable bodies become [`ResourceInvokeError`].
    /// Nothing is retried.
    pub async fn invoke_raw(
        &self,
        payload: ResourcePayload,
        invocation_key: &str,
    ) -> Result<InvokeResponse, ResourceInvokeError> {
        if !is_valid_invocation_key(invocation_key) {
            tracing::warn!(
                "Invocation key {:?} does not match the accepted format, sending as-is",
                invocation_key
            );
        }

        let url = self.invoke_url();
        tracing::debug!(
            "Invoking {}/{} resource {} (key: {})",
            payload.type_tag(),
            payload.subtype_tag(),
            self.resource_id,
            invocation_key
        );

        let envelope = InvokeRequest::new(payload, invocation_key);
        let body = serde_json::to_vec(&envelope).map_err(|e| {
            ResourceInvokeError::new(format!("Failed to invoke resource: {}", e))
        })?;

        let request = TransportRequest {
            url,
            headers: self.headers(),
            body,
        };

        let sent = self.transport.post(request);
        let outcome = match self.local_timeout {
            Some(limit) => match tokio::time::timeout(limit, sent).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::error!(
                        "Resource {} did not answer within {:?}",
                        self.resource_id,
                        limit
                    );
                    return Err(ResourceInvokeError::new(format!(
                        "Failed to invoke resource: no response within {} ms",
                        limit.as_millis()
                    )));
                }
            },
            None => sent.await,
        };

        let response = outcome.map_err(|e| {
            tracing::error!("Transport error for resource {}: {:#}", self.resource_id, e);
            ResourceInvokeError::new(format!("Failed to invoke resource: {:#}", e))
        })?;

        serde_json::from_str::<InvokeResponse>(&response.body).map_err(|e| {
            // Security: Only log sanitized/truncated body to avoid leaking sensitive data
            tracing::error!(
                "Unparseable response: {} - {}",
                response.status,
                sanitize_for_log(&response.body)
            );
            ResourceInvokeError::new(format!("Failed to invoke resource: {}", e))
                .with_http_status(response.status)
        })
    }
}

impl fmt::Debug for BaseResourceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseResourceClient")
            .field("base_url", &self.base_url)
            .field("application_id", &self.application_id)
            .field("resource_id", &self.resource_id)
            .field("authenticated", &self.major_jwt_token.is_some())
            .finish()
    }
}
