//! Shared payload and result building blocks
//!
//! HTTP methods, query parameters, request bodies and the API result shape
//! are reused by both API resource kinds.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// HTTP methods supported by API resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(format!("unsupported HTTP method: {}", other)),
        }
    }
}

/// A single query parameter value: either one string or a repeated list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::One(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::One(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::Many(values)
    }
}

/// Query parameters for HTTP requests.
///
/// Ordered so that serialized payloads are byte-stable.
pub type QueryParams = BTreeMap<String, QueryValue>;

/// Extra request headers for custom API resources
pub type Headers = BTreeMap<String, String>;

/// JSON body content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonBody {
    pub value: Value,
}

/// Plain text body content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBody {
    pub value: String,
}

/// Binary body content (base64 encoded)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BytesBody {
    pub base64: String,
    #[serde(rename = "contentType")]
    pub content_type: String,
}

/// Request body sent to an API resource, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BodyPayload {
    Json(JsonBody),
    Text(TextBody),
    Bytes(BytesBody),
}

impl BodyPayload {
    pub fn json(value: Value) -> Self {
        BodyPayload::Json(JsonBody { value })
    }

    pub fn text(value: impl Into<String>) -> Self {
        BodyPayload::Text(TextBody {
            value: value.into(),
        })
    }

    pub fn bytes(base64: impl Into<String>, content_type: impl Into<String>) -> Self {
        BodyPayload::Bytes(BytesBody {
            base64: base64.into(),
            content_type: content_type.into(),
        })
    }
}

/// Request body restricted to JSON (HubSpot only accepts JSON bodies)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonBodyPayload {
    Json(JsonBody),
}

impl JsonBodyPayload {
    pub fn new(value: Value) -> Self {
        JsonBodyPayload::Json(JsonBody { value })
    }

    pub fn value(&self) -> &Value {
        match self {
            JsonBodyPayload::Json(body) => &body.value,
        }
    }
}

impl From<JsonBodyPayload> for BodyPayload {
    fn from(body: JsonBodyPayload) -> Self {
        match body {
            JsonBodyPayload::Json(json) => BodyPayload::Json(json),
        }
    }
}

/// Body of an API result, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ApiResultBody {
    Json {
        value: Value,
    },
    Text {
        value: String,
    },
    Bytes {
        base64: String,
        #[serde(rename = "contentType")]
        content_type: String,
    },
}

/// Complete API result with upstream status and body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResult {
    pub status: u16,
    pub body: ApiResultBody,
}
