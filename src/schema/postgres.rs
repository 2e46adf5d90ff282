//! PostgreSQL database payload and result

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Primitive value allowed as a positional query parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DbParam {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl From<bool> for DbParam {
    fn from(value: bool) -> Self {
        DbParam::Bool(value)
    }
}

impl From<i64> for DbParam {
    fn from(value: i64) -> Self {
        DbParam::Number(value.into())
    }
}

impl From<i32> for DbParam {
    fn from(value: i32) -> Self {
        DbParam::Number(value.into())
    }
}

impl From<u64> for DbParam {
    fn from(value: u64) -> Self {
        DbParam::Number(value.into())
    }
}

/// Non-finite floats have no JSON representation and become `null`.
impl From<f64> for DbParam {
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(DbParam::Number)
            .unwrap_or(DbParam::Null)
    }
}

impl From<&str> for DbParam {
    fn from(value: &str) -> Self {
        DbParam::String(value.to_string())
    }
}

impl From<String> for DbParam {
    fn from(value: String) -> Self {
        DbParam::String(value)
    }
}

impl<T: Into<DbParam>> From<Option<T>> for DbParam {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(DbParam::Null)
    }
}

/// Payload for invoking a PostgreSQL database resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DbPostgresPayload {
    /// SQL query to execute
    pub sql: String,
    /// Positional parameters for the query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<DbParam>>,
    #[serde(rename = "timeoutMs", default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

/// Result from a database query execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbResult {
    /// Row objects returned by the query
    pub rows: Vec<Map<String, Value>>,
    /// Rows affected by INSERT, UPDATE or DELETE
    #[serde(rename = "rowsAffected", default, skip_serializing_if = "Option::is_none")]
    pub rows_affected: Option<u64>,
}
