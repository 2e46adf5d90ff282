//! Configuration
//!
//! Environment read by shared clients, and the on-disk layout the generator
//! works against.

use crate::client::BaseClientConfig;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Environment variable holding the invocation endpoint base URL
pub const BASE_URL_ENV: &str = "MAJOR_API_BASE_URL";

/// Environment variable holding the caller's JWT
pub const JWT_TOKEN_ENV: &str = "MAJOR_JWT_TOKEN";

/// Base URL used when [`BASE_URL_ENV`] is unset
pub const DEFAULT_BASE_URL: &str = "https://api.major.tech";

/// Registry file name, relative to the project root
pub const RESOURCES_FILE: &str = "resources.json";

/// Generated clients directory, relative to the project root
pub const CLIENTS_DIR: &str = "src/clients";

/// Connection settings shared by every generated client
#[derive(Clone, PartialEq, Eq)]
pub struct ClientEnv {
    pub base_url: String,
    pub jwt_token: Option<String>,
}

static GLOBAL_ENV: OnceLock<ClientEnv> = OnceLock::new();

impl ClientEnv {
    /// Read from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            base_url: non_empty(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            jwt_token: non_empty(JWT_TOKEN_ENV),
        }
    }

    /// Process environment, read once on first access
    pub fn global() -> &'static ClientEnv {
        GLOBAL_ENV.get_or_init(|| {
            let env = Self::from_env();
            tracing::debug!("Resource clients will use {}", env.base_url);
            env
        })
    }

    /// Client configuration for one resource under this environment
    pub fn client_config(&self, application_id: &str, resource_id: &str) -> BaseClientConfig {
        BaseClientConfig::new(self.base_url.clone(), application_id, resource_id)
            .with_jwt_token(self.jwt_token.clone())
    }
}

impl fmt::Debug for ClientEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientEnv")
            .field("base_url", &self.base_url)
            .field("jwt_token", &self.jwt_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Files the generator reads and writes under a project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPaths {
    pub root: PathBuf,
    pub resources_file: PathBuf,
    pub clients_dir: PathBuf,
}

impl GeneratorPaths {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            resources_file: root.join(RESOURCES_FILE),
            clients_dir: root.join(CLIENTS_DIR),
            root,
        }
    }
}
