//! Wire schema for resource invocation
//!
//! Every payload, result and envelope exchanged with the invocation endpoint
//! lives here. Payloads are discriminated by the `(type, subtype)` pair,
//! results by `kind`, and responses by the boolean `ok` flag.
//!
//! # Module Structure
//!
//! - [`common`] - HTTP methods, query parameters, bodies, API results
//! - [`postgres`] - `database/postgresql` payload and result
//! - [`api_custom`] - `api/custom` payload
//! - [`api_hubspot`] - `api/hubspot` payload
//! - [`s3`] - `storage/s3` payload and results
//! - [`request`] - the `{payload, invocationKey}` envelope
//! - [`response`] - success/failure envelope and typed narrowing

pub mod api_custom;
pub mod api_hubspot;
pub mod common;
pub mod postgres;
pub mod request;
pub mod response;
pub mod s3;

pub use api_custom::{ApiCustomPayload, DEFAULT_API_TIMEOUT_MS};
pub use api_hubspot::ApiHubSpotPayload;
pub use common::{
    ApiResult, ApiResultBody, BodyPayload, BytesBody, Headers, HttpMethod, JsonBody,
    JsonBodyPayload, QueryParams, QueryValue, TextBody,
};
pub use postgres::{DbParam, DbPostgresPayload, DbResult};
pub use request::{is_valid_invocation_key, InvokeRequest};
pub use response::{
    ApiInvokeResponse, DatabaseInvokeResponse, InvokeErrorDetail, InvokeFailure, InvokeResponse,
    InvokeSuccess, ResourceInvokeSuccess, ResultKind, StorageInvokeResponse,
};
pub use s3::{S3Command, StorageS3Payload, StorageS3Result, StorageS3ResultPresigned, StorageS3ResultStandard};

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Payload of an invoke request, one variant per resource kind.
///
/// Serialized flat with `type` and `subtype` fields alongside the variant's
/// own fields. Decoding fails when the tag pair is unknown or the remaining
/// fields do not fit the variant the tags select.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourcePayload {
    Postgres(DbPostgresPayload),
    CustomApi(ApiCustomPayload),
    HubSpot(ApiHubSpotPayload),
    S3(StorageS3Payload),
}

impl ResourcePayload {
    /// The `type` tag
    pub fn type_tag(&self) -> &'static str {
        match self {
            ResourcePayload::Postgres(_) => "database",
            ResourcePayload::CustomApi(_) | ResourcePayload::HubSpot(_) => "api",
            ResourcePayload::S3(_) => "storage",
        }
    }

    /// The `subtype` tag
    pub fn subtype_tag(&self) -> &'static str {
        match self {
            ResourcePayload::Postgres(_) => "postgresql",
            ResourcePayload::CustomApi(_) => "custom",
            ResourcePayload::HubSpot(_) => "hubspot",
            ResourcePayload::S3(_) => "s3",
        }
    }

    /// Remote timeout hint carried by the payload, if any
    pub fn timeout_ms(&self) -> Option<u64> {
        match self {
            ResourcePayload::Postgres(p) => p.timeout_ms,
            ResourcePayload::CustomApi(p) => p.timeout_ms,
            ResourcePayload::HubSpot(p) => p.timeout_ms,
            ResourcePayload::S3(p) => p.timeout_ms,
        }
    }
}

#[derive(Serialize)]
struct TaggedPayload<'a, T> {
    #[serde(rename = "type")]
    type_tag: &'static str,
    subtype: &'static str,
    #[serde(flatten)]
    inner: &'a T,
}

#[derive(Deserialize)]
struct RawPayload {
    #[serde(rename = "type")]
    type_tag: String,
    subtype: String,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl Serialize for ResourcePayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let type_tag = self.type_tag();
        let subtype = self.subtype_tag();
        match self {
            ResourcePayload::Postgres(inner) => TaggedPayload {
                type_tag,
                subtype,
                inner,
            }
            .serialize(serializer),
            ResourcePayload::CustomApi(inner) => TaggedPayload {
                type_tag,
                subtype,
                inner,
            }
            .serialize(serializer),
            ResourcePayload::HubSpot(inner) => TaggedPayload {
                type_tag,
                subtype,
                inner,
            }
            .serialize(serializer),
            ResourcePayload::S3(inner) => TaggedPayload {
                type_tag,
                subtype,
                inner,
            }
            .serialize(serializer),
        }
    }
}

fn decode_variant<T: DeserializeOwned, E: serde::de::Error>(rest: Map<String, Value>) -> Result<T, E> {
    serde_json::from_value(Value::Object(rest)).map_err(E::custom)
}

impl<'de> Deserialize<'de> for ResourcePayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawPayload::deserialize(deserializer)?;
        match (raw.type_tag.as_str(), raw.subtype.as_str()) {
            ("database", "postgresql") => decode_variant(raw.rest).map(ResourcePayload::Postgres),
            ("api", "custom") => decode_variant(raw.rest).map(ResourcePayload::CustomApi),
            ("api", "hubspot") => decode_variant(raw.rest).map(ResourcePayload::HubSpot),
            ("storage", "s3") => decode_variant(raw.rest).map(ResourcePayload::S3),
            (type_tag, subtype) => Err(D::Error::custom(format!(
                "unknown resource payload variant: type `{}`, subtype `{}`",
                type_tag, subtype
            ))),
        }
    }
}

impl From<DbPostgresPayload> for ResourcePayload {
    fn from(payload: DbPostgresPayload) -> Self {
        ResourcePayload::Postgres(payload)
    }
}

impl From<ApiCustomPayload> for ResourcePayload {
    fn from(payload: ApiCustomPayload) -> Self {
        ResourcePayload::CustomApi(payload)
    }
}

impl From<ApiHubSpotPayload> for ResourcePayload {
    fn from(payload: ApiHubSpotPayload) -> Self {
        ResourcePayload::HubSpot(payload)
    }
}

impl From<StorageS3Payload> for ResourcePayload {
    fn from(payload: StorageS3Payload) -> Self {
        ResourcePayload::S3(payload)
    }
}
