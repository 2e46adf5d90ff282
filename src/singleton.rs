//! Process-wide shared clients
//!
//! Generated client modules call [`shared_client`] so that each resource
//! gets exactly one client per process, built on first use from
//! [`ClientEnv::global`] and kept for the life of the process.

use crate::client::ResourceClient;
use crate::config::ClientEnv;
use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

type ClientMap = HashMap<String, Arc<dyn Any + Send + Sync>>;

static CLIENTS: OnceLock<Mutex<ClientMap>> = OnceLock::new();

/// Identity of a resource as baked into generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceBinding {
    pub application_id: &'static str,
    pub resource_id: &'static str,
}

impl ResourceBinding {
    pub const fn new(application_id: &'static str, resource_id: &'static str) -> Self {
        Self {
            application_id,
            resource_id,
        }
    }
}

/// Shared client for `binding`, built from the process environment on first
/// call.
pub fn shared_client<C: ResourceClient>(binding: &ResourceBinding) -> Arc<C> {
    shared_client_with(binding, ClientEnv::global())
}

/// Like [`shared_client`], with an explicit environment for the first build.
///
/// The map lock is held across construction so concurrent first calls
/// cannot build two clients. If the resource is already bound to a
/// different client type, an unshared client is returned and the cached
/// one is left in place.
pub fn shared_client_with<C: ResourceClient>(binding: &ResourceBinding, env: &ClientEnv) -> Arc<C> {
    let mut clients = CLIENTS
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if let Some(existing) = clients.get(binding.resource_id) {
        return match existing.clone().downcast::<C>() {
            Ok(client) => client,
            Err(_) => {
                tracing::warn!(
                    "Resource {} is already bound to another client type, returning an unshared {}",
                    binding.resource_id,
                    C::KIND.client_type_name()
                );
                Arc::new(C::from_config(
                    env.client_config(binding.application_id, binding.resource_id),
                ))
            }
        };
    }

    let client = Arc::new(C::from_config(
        env.client_config(binding.application_id, binding.resource_id),
    ));
    clients.insert(binding.resource_id.to_string(), client.clone());
    tracing::debug!(
        "Created shared {} for resource {}",
        C::KIND.client_type_name(),
        binding.resource_id
    );
    client
}
