//! PostgreSQL resource client

use super::base::{BaseClientConfig, BaseResourceClient};
use super::{ClientKind, ResourceClient};
use crate::error::ResourceInvokeError;
use crate::schema::{DatabaseInvokeResponse, DbParam, DbPostgresPayload, ResourcePayload};

/// Client for `database/postgresql` resources
#[derive(Debug, Clone)]
pub struct PostgresResourceClient {
    base: BaseResourceClient,
}

impl PostgresResourceClient {
    pub fn new(config: BaseClientConfig) -> Self {
        Self {
            base: BaseResourceClient::new(config),
        }
    }

    /// Run `sql` with optional positional `params`.
    ///
    /// The statement is not inspected locally; the endpoint rejects bad SQL
    /// as a logical failure.
    pub async fn invoke(
        &self,
        sql: impl Into<String>,
        params: Option<Vec<DbParam>>,
        invocation_key: &str,
        timeout_ms: Option<u64>,
    ) -> Result<DatabaseInvokeResponse, ResourceInvokeError> {
        let payload = ResourcePayload::Postgres(DbPostgresPayload {
            sql: sql.into(),
            params,
            timeout_ms,
        });

        self.base.invoke_raw(payload, invocation_key).await?.narrow()
    }
}

impl ResourceClient for PostgresResourceClient {
    const KIND: ClientKind = ClientKind::Postgres;

    fn from_config(config: BaseClientConfig) -> Self {
        Self::new(config)
    }

    fn base(&self) -> &BaseResourceClient {
        &self.base
    }
}
