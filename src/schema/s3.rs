//! S3 storage payload and results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// S3 operations a storage resource accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum S3Command {
    ListObjectsV2,
    HeadObject,
    GetObjectTagging,
    PutObjectTagging,
    DeleteObject,
    DeleteObjects,
    CopyObject,
    ListBuckets,
    GetBucketLocation,
    GeneratePresignedUrl,
}

impl S3Command {
    pub const ALL: [S3Command; 10] = [
        S3Command::ListObjectsV2,
        S3Command::HeadObject,
        S3Command::GetObjectTagging,
        S3Command::PutObjectTagging,
        S3Command::DeleteObject,
        S3Command::DeleteObjects,
        S3Command::CopyObject,
        S3Command::ListBuckets,
        S3Command::GetBucketLocation,
        S3Command::GeneratePresignedUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            S3Command::ListObjectsV2 => "ListObjectsV2",
            S3Command::HeadObject => "HeadObject",
            S3Command::GetObjectTagging => "GetObjectTagging",
            S3Command::PutObjectTagging => "PutObjectTagging",
            S3Command::DeleteObject => "DeleteObject",
            S3Command::DeleteObjects => "DeleteObjects",
            S3Command::CopyObject => "CopyObject",
            S3Command::ListBuckets => "ListBuckets",
            S3Command::GetBucketLocation => "GetBucketLocation",
            S3Command::GeneratePresignedUrl => "GeneratePresignedUrl",
        }
    }
}

impl fmt::Display for S3Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for S3Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        S3Command::ALL
            .iter()
            .copied()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| format!("unsupported S3 command: {}", s))
    }
}

/// Payload for invoking an S3 storage resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageS3Payload {
    pub command: S3Command,
    /// Command-specific parameters, forwarded verbatim
    pub params: Map<String, Value>,
    #[serde(rename = "timeoutMs", default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

/// Result of an S3 operation.
///
/// The presigned shape is tried first since both of its fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StorageS3Result {
    Presigned(StorageS3ResultPresigned),
    Standard(StorageS3ResultStandard),
}

/// Standard S3 command result carrying the raw AWS SDK response data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageS3ResultStandard {
    pub command: String,
    #[serde(default)]
    pub data: Value,
}

/// Result of `GeneratePresignedUrl`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageS3ResultPresigned {
    #[serde(rename = "presignedUrl")]
    pub presigned_url: String,
    /// ISO 8601 expiry timestamp
    #[serde(rename = "expiresAt")]
    pub expires_at: String,
}

impl StorageS3ResultPresigned {
    /// Parse `expires_at`; `None` when the endpoint sent a malformed timestamp
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.expires_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
