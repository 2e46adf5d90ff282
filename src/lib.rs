//! Typed clients for invoking app resources
//!
//! An application reaches its external resources (a Postgres database, a
//! custom HTTP API, HubSpot, S3) through one invocation endpoint. This crate
//! provides the wire schema for that endpoint, one typed client per resource
//! kind, a process-wide cache of shared clients, and the generator that
//! writes a shared-client module per configured resource.
//!
//! # Module Structure
//!
//! - [`schema`] - payloads, results and envelopes
//! - [`client`] - base transport client and the typed clients
//! - [`error`] - [`ResourceInvokeError`] for transport-level failures
//! - [`singleton`] - one shared client per resource per process
//! - [`config`] - environment and generator paths
//! - [`generator`] - `resources.json` maintenance and code generation
//!
//! # Example
//!
//! ```ignore
//! use resource_client::client::{BaseClientConfig, CustomApiOptions, CustomApiResourceClient};
//! use resource_client::schema::{HttpMethod, InvokeResponse};
//!
//! async fn example() -> Result<(), resource_client::ResourceInvokeError> {
//!     let client = CustomApiResourceClient::new(
//!         BaseClientConfig::new("https://api.major.tech", "app-456", "xyz-789")
//!             .with_jwt_token(std::env::var("MAJOR_JWT_TOKEN").ok()),
//!     );
//!     match client
//!         .invoke(HttpMethod::Get, "/v1/payments", "payments.list", CustomApiOptions::default())
//!         .await?
//!     {
//!         InvokeResponse::Success(success) => println!("status {}", success.result.status),
//!         InvokeResponse::Failure(failure) => eprintln!("failed: {}", failure.error.message),
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod schema;
pub mod singleton;

pub use client::{
    BaseClientConfig, BaseResourceClient, ClientKind, CustomApiResourceClient,
    HubSpotResourceClient, PostgresResourceClient, ResourceClient, S3ResourceClient,
};
pub use error::ResourceInvokeError;
pub use schema::{InvokeRequest, InvokeResponse, ResourcePayload};
pub use singleton::{shared_client, ResourceBinding};
