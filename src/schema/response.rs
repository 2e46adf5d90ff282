//! Response envelope
//!
//! The endpoint answers with `{ok: true, requestId, result}` or
//! `{ok: false, requestId, error}` whatever the HTTP status. Results are
//! tagged by `kind`; typed clients narrow the generic envelope to the result
//! kind of their resource with [`InvokeResponse::narrow`].

use super::common::ApiResult;
use super::postgres::DbResult;
use super::s3::StorageS3Result;
use crate::error::ResourceInvokeError;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Any resource invocation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResourceInvokeSuccess {
    Api(ApiResult),
    Database(DbResult),
    Storage(StorageS3Result),
}

impl ResourceInvokeSuccess {
    pub fn kind(&self) -> &'static str {
        match self {
            ResourceInvokeSuccess::Api(_) => ApiResult::KIND,
            ResourceInvokeSuccess::Database(_) => DbResult::KIND,
            ResourceInvokeSuccess::Storage(_) => StorageS3Result::KIND,
        }
    }
}

/// A result type one resource kind is expected to produce
pub trait ResultKind: Sized {
    /// Wire `kind` tag
    const KIND: &'static str;

    /// Take the matching variant, handing back the input on mismatch
    fn narrow(result: ResourceInvokeSuccess) -> Result<Self, ResourceInvokeSuccess>;

    /// Wrap back into the generic result
    fn widen(self) -> ResourceInvokeSuccess;
}

impl ResultKind for ApiResult {
    const KIND: &'static str = "api";

    fn narrow(result: ResourceInvokeSuccess) -> Result<Self, ResourceInvokeSuccess> {
        match result {
            ResourceInvokeSuccess::Api(api) => Ok(api),
            other => Err(other),
        }
    }

    fn widen(self) -> ResourceInvokeSuccess {
        ResourceInvokeSuccess::Api(self)
    }
}

impl ResultKind for DbResult {
    const KIND: &'static str = "database";

    fn narrow(result: ResourceInvokeSuccess) -> Result<Self, ResourceInvokeSuccess> {
        match result {
            ResourceInvokeSuccess::Database(db) => Ok(db),
            other => Err(other),
        }
    }

    fn widen(self) -> ResourceInvokeSuccess {
        ResourceInvokeSuccess::Database(self)
    }
}

impl ResultKind for StorageS3Result {
    const KIND: &'static str = "storage";

    fn narrow(result: ResourceInvokeSuccess) -> Result<Self, ResourceInvokeSuccess> {
        match result {
            ResourceInvokeSuccess::Storage(storage) => Ok(storage),
            other => Err(other),
        }
    }

    fn widen(self) -> ResourceInvokeSuccess {
        ResourceInvokeSuccess::Storage(self)
    }
}

/// Successful invocation, generic over the result type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InvokeSuccess<T> {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub result: T,
}

/// Error details of a failed invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeErrorDetail {
    pub message: String,
    #[serde(rename = "httpStatus", default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
}

/// Failed invocation: the endpoint was reached and reported a failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InvokeFailure {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub error: InvokeErrorDetail,
}

/// Response envelope, discriminated by the boolean `ok` field
#[derive(Debug, Clone, PartialEq)]
pub enum InvokeResponse<T = ResourceInvokeSuccess> {
    Success(InvokeSuccess<T>),
    Failure(InvokeFailure),
}

/// Response from a database resource
pub type DatabaseInvokeResponse = InvokeResponse<DbResult>;

/// Response from an API resource (custom or HubSpot)
pub type ApiInvokeResponse = InvokeResponse<ApiResult>;

/// Response from an S3 storage resource
pub type StorageInvokeResponse = InvokeResponse<StorageS3Result>;

impl<T> InvokeResponse<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, InvokeResponse::Success(_))
    }

    pub fn request_id(&self) -> &str {
        match self {
            InvokeResponse::Success(success) => &success.request_id,
            InvokeResponse::Failure(failure) => &failure.request_id,
        }
    }

    pub fn success(&self) -> Option<&InvokeSuccess<T>> {
        match self {
            InvokeResponse::Success(success) => Some(success),
            InvokeResponse::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&InvokeFailure> {
        match self {
            InvokeResponse::Success(_) => None,
            InvokeResponse::Failure(failure) => Some(failure),
        }
    }

    /// Split into `Ok(success)` / `Err(failure)` for `?`-style handling
    pub fn into_result(self) -> Result<InvokeSuccess<T>, InvokeFailure> {
        match self {
            InvokeResponse::Success(success) => Ok(success),
            InvokeResponse::Failure(failure) => Err(failure),
        }
    }
}

impl InvokeResponse<ResourceInvokeSuccess> {
    /// Narrow a generic response to the result kind `R`.
    ///
    /// Failures pass through untouched. A success carrying another kind of
    /// result means the endpoint answered for a different resource kind and
    /// is reported as a [`ResourceInvokeError`].
    pub fn narrow<R: ResultKind>(self) -> Result<InvokeResponse<R>, ResourceInvokeError> {
        match self {
            InvokeResponse::Failure(failure) => Ok(InvokeResponse::Failure(failure)),
            InvokeResponse::Success(InvokeSuccess { request_id, result }) => {
                match R::narrow(result) {
                    Ok(result) => Ok(InvokeResponse::Success(InvokeSuccess { request_id, result })),
                    Err(other) => Err(ResourceInvokeError::new(format!(
                        "Unexpected result kind `{}`, expected `{}`",
                        other.kind(),
                        R::KIND
                    ))
                    .with_request_id(request_id)),
                }
            }
        }
    }
}

impl<R: ResultKind> InvokeResponse<R> {
    pub fn widen(self) -> InvokeResponse<ResourceInvokeSuccess> {
        match self {
            InvokeResponse::Success(InvokeSuccess { request_id, result }) => {
                InvokeResponse::Success(InvokeSuccess {
                    request_id,
                    result: result.widen(),
                })
            }
            InvokeResponse::Failure(failure) => InvokeResponse::Failure(failure),
        }
    }
}

#[derive(Serialize)]
struct OkTagged<'a, B> {
    ok: bool,
    #[serde(flatten)]
    body: &'a B,
}

impl<T: Serialize> Serialize for InvokeResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            InvokeResponse::Success(body) => OkTagged { ok: true, body }.serialize(serializer),
            InvokeResponse::Failure(body) => OkTagged { ok: false, body }.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for InvokeResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields: Map<String, Value> = Map::deserialize(deserializer)?;
        let ok = fields.remove("ok").as_ref().and_then(Value::as_bool);
        let value = Value::Object(fields);
        match ok {
            Some(true) => serde_json::from_value(value)
                .map(InvokeResponse::Success)
                .map_err(D::Error::custom),
            Some(false) => serde_json::from_value(value)
                .map(InvokeResponse::Failure)
                .map_err(D::Error::custom),
            None => Err(D::Error::custom("missing boolean `ok` discriminator")),
        }
    }
}
