//! Client generator
//!
//! Maintains the resource registry (`resources.json`) and rewrites one
//! client module per resource plus an index module under `src/clients/`
//! after every change.
//!
//! # Module Structure
//!
//! - [`registry`] - registry file loading and saving
//! - [`naming`] - identifiers derived from resource names
//! - [`templates`] - generated source text
//!
//! # Example
//!
//! ```ignore
//! use resource_client::generator::{Generator, NewResource};
//!
//! let generator = Generator::new(".");
//! generator.add(NewResource {
//!     id: "abc-123".into(),
//!     name: "orders-db".into(),
//!     resource_type: "postgres".into(),
//!     description: "Orders database".into(),
//!     application_id: "app-123".into(),
//! })?;
//! ```

pub mod naming;
pub mod registry;
pub mod templates;

pub use naming::{client_name, is_usable_identifier, module_file_name, to_camel_case};
pub use registry::{ResourceDescriptor, ResourceRegistry};

use crate::client::{ClientKind, RESOURCE_TYPES};
use crate::config::GeneratorPaths;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Index module file name inside the clients directory
pub const INDEX_FILE: &str = "mod.rs";

/// Operator-facing generator failures
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid type: {0} (valid types: {valid})", valid = RESOURCE_TYPES.join(", "))]
    InvalidType(String),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Resource with name \"{0}\" already exists")]
    DuplicateName(String),
    #[error("Resource name \"{name}\" maps to client {client}, already used by \"{existing}\"")]
    DuplicateClient {
        name: String,
        client: String,
        existing: String,
    },
    #[error("Resource name \"{0}\" does not map to a usable Rust identifier")]
    InvalidName(String),
    #[error("Resource \"{0}\" not found")]
    NotFound(String),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl GeneratorError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Input of [`Generator::add`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResource {
    pub id: String,
    pub name: String,
    pub resource_type: String,
    pub description: String,
    pub application_id: String,
}

/// One line of [`Generator::list`] output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedResource {
    /// 1-based position in the registry
    pub index: usize,
    pub name: String,
    pub resource_type: String,
    pub id: String,
    pub client_name: String,
}

impl fmt::Display for ListedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}. {} ({})", self.index, self.name, self.resource_type)?;
        writeln!(f, "   ID: {}", self.id)?;
        write!(f, "   Client: {}", self.client_name)
    }
}

/// Generator bound to one project root
#[derive(Debug, Clone)]
pub struct Generator {
    paths: GeneratorPaths,
}

impl Generator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::with_paths(GeneratorPaths::new(root))
    }

    pub fn with_paths(paths: GeneratorPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &GeneratorPaths {
        &self.paths
    }

    fn load(&self) -> Result<ResourceRegistry, GeneratorError> {
        ResourceRegistry::load(&self.paths.resources_file)
    }

    /// Register a resource and regenerate clients.
    ///
    /// Every check runs before anything is written, so a rejected resource
    /// leaves the registry and generated files untouched.
    pub fn add(&self, resource: NewResource) -> Result<ResourceDescriptor, GeneratorError> {
        let required = [
            ("id", &resource.id),
            ("name", &resource.name),
            ("type", &resource.resource_type),
            ("description", &resource.description),
            ("applicationId", &resource.application_id),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(GeneratorError::MissingField(*field));
        }

        if resource.resource_type.parse::<ClientKind>().is_err() {
            return Err(GeneratorError::InvalidType(resource.resource_type));
        }

        let mut registry = self.load()?;
        if registry.find(&resource.name).is_some() {
            return Err(GeneratorError::DuplicateName(resource.name));
        }

        let descriptor = ResourceDescriptor {
            id: resource.id,
            name: resource.name,
            resource_type: resource.resource_type,
            description: resource.description,
            application_id: resource.application_id,
        };
        registry.push(descriptor.clone());
        check_names(registry.resources())?;
        registry.save()?;

        tracing::info!(
            "Added resource {} ({}, id {})",
            descriptor.name,
            descriptor.resource_type,
            descriptor.id
        );

        self.write_clients(registry.resources())?;
        Ok(descriptor)
    }

    /// Unregister a resource by name and regenerate clients
    pub fn remove(&self, name: &str) -> Result<ResourceDescriptor, GeneratorError> {
        let mut registry = self.load()?;
        let removed = registry
            .remove(name)
            .ok_or_else(|| GeneratorError::NotFound(name.to_string()))?;
        check_names(registry.resources())?;
        registry.save()?;

        tracing::info!("Removed resource {} (id {})", removed.name, removed.id);

        self.write_clients(registry.resources())?;
        Ok(removed)
    }

    /// Registered resources in registry order
    pub fn list(&self) -> Result<Vec<ListedResource>, GeneratorError> {
        let registry = self.load()?;
        Ok(registry
            .resources()
            .iter()
            .enumerate()
            .map(|(i, r)| ListedResource {
                index: i + 1,
                name: r.name.clone(),
                resource_type: r.resource_type.clone(),
                id: r.id.clone(),
                client_name: client_name(&r.name),
            })
            .collect())
    }

    /// Rewrite every client module from the registry as it stands
    pub fn regenerate(&self) -> Result<usize, GeneratorError> {
        let registry = self.load()?;
        self.write_clients(registry.resources())?;
        Ok(registry.resources().len())
    }

    /// Clear the clients directory (keeping the index until it is
    /// rewritten) and write one module per resource plus the index.
    fn write_clients(&self, resources: &[ResourceDescriptor]) -> Result<(), GeneratorError> {
        check_names(resources)?;

        let dir = &self.paths.clients_dir;
        std::fs::create_dir_all(dir).map_err(|e| GeneratorError::io(dir, e))?;

        let entries = std::fs::read_dir(dir).map_err(|e| GeneratorError::io(dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| GeneratorError::io(dir, e))?;
            let path = entry.path();
            if path.is_file() && entry.file_name() != INDEX_FILE {
                std::fs::remove_file(&path).map_err(|e| GeneratorError::io(&path, e))?;
            }
        }

        for resource in resources {
            let path = dir.join(module_file_name(&resource.name));
            let source = templates::render_client_module(resource);
            std::fs::write(&path, source).map_err(|e| GeneratorError::io(&path, e))?;
        }

        let index_path = dir.join(INDEX_FILE);
        std::fs::write(&index_path, templates::render_index_module(resources))
            .map_err(|e| GeneratorError::io(&index_path, e))?;

        tracing::info!("Generated {} client(s) in {}", resources.len(), dir.display());
        Ok(())
    }
}

/// Every resource must map to its own usable module identifier; the later
/// of two colliding names is the one reported.
fn check_names(resources: &[ResourceDescriptor]) -> Result<(), GeneratorError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for resource in resources {
        let identifier = to_camel_case(&resource.name);
        if !is_usable_identifier(&identifier) {
            return Err(GeneratorError::InvalidName(resource.name.clone()));
        }
        if let Some(existing) = seen.insert(identifier, resource.name.as_str()) {
            return Err(GeneratorError::DuplicateClient {
                name: resource.name.clone(),
                client: client_name(&resource.name),
                existing: existing.to_string(),
            });
        }
    }
    Ok(())
}
