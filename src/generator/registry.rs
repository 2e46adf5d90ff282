//! Resource registry file (`resources.json`)

use super::GeneratorError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One configured resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub id: String,
    pub name: String,
    /// Registry type name, see [`crate::client::RESOURCE_TYPES`]. Kept as a
    /// string so hand-edited files with unknown types still load.
    #[serde(rename = "type")]
    pub resource_type: String,
    pub description: String,
    #[serde(rename = "applicationId")]
    pub application_id: String,
}

/// Registry contents bound to the file they came from
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    path: PathBuf,
    resources: Vec<ResourceDescriptor>,
}

impl ResourceRegistry {
    /// Load the registry; a missing file is an empty registry
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GeneratorError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Ok(Self {
                path,
                resources: Vec::new(),
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|e| GeneratorError::io(&path, e))?;
        let resources = serde_json::from_str(&content).map_err(|e| GeneratorError::Json {
            path: path.clone(),
            source: e,
        })?;

        Ok(Self { path, resources })
    }

    /// Write the registry back as pretty-printed JSON
    pub fn save(&self) -> Result<(), GeneratorError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GeneratorError::io(parent, e))?;
        }

        let content = serde_json::to_string_pretty(&self.resources).map_err(|e| {
            GeneratorError::Json {
                path: self.path.clone(),
                source: e,
            }
        })?;
        std::fs::write(&self.path, content).map_err(|e| GeneratorError::io(&self.path, e))?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn resources(&self) -> &[ResourceDescriptor] {
        &self.resources
    }

    pub fn find(&self, name: &str) -> Option<&ResourceDescriptor> {
        self.resources.iter().find(|r| r.name == name)
    }

    pub fn push(&mut self, resource: ResourceDescriptor) {
        self.resources.push(resource);
    }

    /// Remove by name, returning the removed entry
    pub fn remove(&mut self, name: &str) -> Option<ResourceDescriptor> {
        let index = self.resources.iter().position(|r| r.name == name)?;
        Some(self.resources.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> ResourceDescriptor {
        ResourceDescriptor {
            id: "abc-123".into(),
            name: "orders-db".into(),
            resource_type: "postgres".into(),
            description: "Orders database".into(),
            application_id: "app-123".into(),
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ResourceRegistry::load(dir.path().join("resources.json")).unwrap();
        assert!(registry.resources().is_empty());
    }

    #[test]
    fn test_save_uses_wire_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("resources.json");
        let mut registry = ResourceRegistry::load(&path).unwrap();
        registry.push(descriptor());
        registry.save().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"applicationId\": \"app-123\""));
        assert!(content.contains("\"type\": \"postgres\""));

        let reloaded = ResourceRegistry::load(&path).unwrap();
        assert_eq!(reloaded.resources(), &[descriptor()]);
    }

    #[test]
    fn test_remove_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = ResourceRegistry::load(dir.path().join("r.json")).unwrap();
        registry.push(descriptor());
        assert!(registry.remove("missing").is_none());
        assert_eq!(registry.remove("orders-db").map(|r| r.id), Some("abc-123".to_string()));
        assert!(registry.find("orders-db").is_none());
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resources.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            ResourceRegistry::load(&path),
            Err(GeneratorError::Json { .. })
        ));
    }
}
