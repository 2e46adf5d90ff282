//! Resource clients
//!
//! One typed client per resource kind, each wrapping a shared
//! [`BaseResourceClient`] that owns the transport.
//!
//! # Module Structure
//!
//! - [`base`] - URL building, auth header, envelope POST, response parsing
//! - [`http`] - the [`Transport`] seam and the reqwest implementation
//! - [`postgres`], [`custom_api`], [`hubspot`], [`s3`] - typed clients
//!
//! # Example
//!
//! ```ignore
//! use resource_client::client::{BaseClientConfig, PostgresResourceClient};
//!
//! async fn example() -> Result<(), resource_client::ResourceInvokeError> {
//!     let client = PostgresResourceClient::new(BaseClientConfig::new(
//!         "https://api.major.tech",
//!         "app-123",
//!         "abc-123",
//!     ));
//!     let response = client.invoke("select count(*) from orders", None, "orders.count", None).await?;
//!     Ok(())
//! }
//! ```

pub mod base;
pub mod custom_api;
pub mod http;
pub mod hubspot;
pub mod postgres;
pub mod s3;

#[cfg(test)]
pub(crate) mod testing;

pub use base::{BaseClientConfig, BaseResourceClient, JWT_HEADER};
pub use custom_api::{CustomApiOptions, CustomApiResourceClient};
pub use http::{shared_transport, ReqwestTransport, Transport, TransportRequest, TransportResponse};
pub use hubspot::{HubSpotOptions, HubSpotResourceClient};
pub use postgres::PostgresResourceClient;
pub use s3::{S3Options, S3ResourceClient};

use std::fmt;
use std::str::FromStr;

/// Resource type names accepted in the registry
pub const RESOURCE_TYPES: [&str; 4] = ["postgres", "custom-api", "hubspot", "s3"];

/// Which typed client serves a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientKind {
    Postgres,
    CustomApi,
    HubSpot,
    S3,
}

impl ClientKind {
    pub const ALL: [ClientKind; 4] = [
        ClientKind::Postgres,
        ClientKind::CustomApi,
        ClientKind::HubSpot,
        ClientKind::S3,
    ];

    /// Registry type name
    pub fn resource_type(&self) -> &'static str {
        match self {
            ClientKind::Postgres => "postgres",
            ClientKind::CustomApi => "custom-api",
            ClientKind::HubSpot => "hubspot",
            ClientKind::S3 => "s3",
        }
    }

    /// Rust type name of the matching client
    pub fn client_type_name(&self) -> &'static str {
        match self {
            ClientKind::Postgres => "PostgresResourceClient",
            ClientKind::CustomApi => "CustomApiResourceClient",
            ClientKind::HubSpot => "HubSpotResourceClient",
            ClientKind::S3 => "S3ResourceClient",
        }
    }

    /// Pick the client for a registry type name.
    ///
    /// Unrecognized names fall back to [`ClientKind::Postgres`]. Strict
    /// callers should validate with [`FromStr`] first.
    pub fn for_resource_type(resource_type: &str) -> ClientKind {
        resource_type.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Unknown resource type {:?}, falling back to {}",
                resource_type,
                ClientKind::Postgres.client_type_name()
            );
            ClientKind::Postgres
        })
    }
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource_type())
    }
}

impl FromStr for ClientKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClientKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.resource_type() == s)
            .ok_or_else(|| format!("Invalid type: {}", s))
    }
}

/// Common surface of the typed clients, used to build and cache them
/// generically.
pub trait ResourceClient: Clone + Send + Sync + 'static {
    const KIND: ClientKind;

    fn from_config(config: BaseClientConfig) -> Self;

    fn base(&self) -> &BaseResourceClient;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_map_to_clients() {
        assert_eq!(ClientKind::for_resource_type("postgres"), ClientKind::Postgres);
        assert_eq!(ClientKind::for_resource_type("custom-api"), ClientKind::CustomApi);
        assert_eq!(ClientKind::for_resource_type("hubspot"), ClientKind::HubSpot);
        assert_eq!(ClientKind::for_resource_type("s3"), ClientKind::S3);
    }

    #[test]
    fn test_unknown_type_falls_back_to_postgres() {
        assert_eq!(ClientKind::for_resource_type("mongo"), ClientKind::Postgres);
        assert_eq!(ClientKind::for_resource_type(""), ClientKind::Postgres);
        assert_eq!(
            ClientKind::for_resource_type("mongo").client_type_name(),
            "PostgresResourceClient"
        );
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert!("mongo".parse::<ClientKind>().is_err());
        assert!("Postgres".parse::<ClientKind>().is_err());
    }

    #[test]
    fn test_resource_types_constant_matches_kinds() {
        let names: Vec<&str> = ClientKind::ALL.iter().map(|k| k.resource_type()).collect();
        assert_eq!(names, RESOURCE_TYPES);
    }

    #[test]
    fn test_kind_constants_on_clients() {
        assert_eq!(PostgresResourceClient::KIND, ClientKind::Postgres);
        assert_eq!(CustomApiResourceClient::KIND, ClientKind::CustomApi);
        assert_eq!(HubSpotResourceClient::KIND, ClientKind::HubSpot);
        assert_eq!(S3ResourceClient::KIND, ClientKind::S3);
    }
}
