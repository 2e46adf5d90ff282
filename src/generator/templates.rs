//! Source templates for generated client modules
//!
//! Output depends only on the descriptors passed in, so regenerating from an
//! unchanged registry rewrites identical bytes.

use super::naming::{client_name, to_camel_case};
use super::registry::ResourceDescriptor;
use crate::client::ClientKind;

/// Doc comment lines cannot carry line breaks
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Module exposing the shared client of one resource
pub fn render_client_module(resource: &ResourceDescriptor) -> String {
    let kind = ClientKind::for_resource_type(&resource.resource_type);
    let client_type = kind.client_type_name();
    let client_name = client_name(&resource.name);

    format!(
        r#"//! {description}
//!
//! Type: {resource_type}
//! Resource ID: {resource_id}
//! Application ID: {application_id}
//!
//! DO NOT EDIT - Auto-generated

#![allow(non_snake_case)]

use std::sync::Arc;

use resource_client::client::{client_type};
use resource_client::singleton::{{shared_client, ResourceBinding}};

const BINDING: ResourceBinding = ResourceBinding::new({application_id_literal}, {resource_id_literal});

/// Shared client, created on first call
pub fn {client_name}() -> Arc<{client_type}> {{
    shared_client(&BINDING)
}}
"#,
        description = single_line(&resource.description),
        resource_type = single_line(&resource.resource_type),
        resource_id = single_line(&resource.id),
        application_id = single_line(&resource.application_id),
        client_type = client_type,
        application_id_literal = format!("{:?}", resource.application_id),
        resource_id_literal = format!("{:?}", resource.id),
        client_name = client_name,
    )
}

/// Index module declaring every client module and re-exporting accessors
pub fn render_index_module(resources: &[ResourceDescriptor]) -> String {
    if resources.is_empty() {
        return "// No clients configured\n".to_string();
    }

    let modules: Vec<String> = resources
        .iter()
        .map(|r| format!("mod {};", to_camel_case(&r.name)))
        .collect();
    let exports: Vec<String> = resources
        .iter()
        .map(|r| format!("pub use {}::{};", to_camel_case(&r.name), client_name(&r.name)))
        .collect();

    format!(
        "//! Auto-generated client exports\n//! DO NOT EDIT\n\n#![allow(non_snake_case)]\n\n{}\n\n{}\n",
        modules.join("\n"),
        exports.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(name: &str, resource_type: &str) -> ResourceDescriptor {
        ResourceDescriptor {
            id: format!("{}-id", name),
            name: name.to_string(),
            resource_type: resource_type.to_string(),
            description: "Orders\ndatabase".to_string(),
            application_id: "app-1".to_string(),
        }
    }

    #[test]
    fn test_client_module_contents() {
        let source = render_client_module(&resource("orders-db", "postgres"));
        assert!(source.starts_with("//! Orders database\n"));
        assert!(source.contains("use resource_client::client::PostgresResourceClient;"));
        assert!(source.contains(
            "const BINDING: ResourceBinding = ResourceBinding::new(\"app-1\", \"orders-db-id\");"
        ));
        assert!(source.contains("pub fn ordersDbClient() -> Arc<PostgresResourceClient> {"));
    }

    #[test]
    fn test_client_module_picks_client_type() {
        assert!(render_client_module(&resource("payments", "custom-api"))
            .contains("Arc<CustomApiResourceClient>"));
        assert!(render_client_module(&resource("crm", "hubspot"))
            .contains("Arc<HubSpotResourceClient>"));
        assert!(render_client_module(&resource("files", "s3")).contains("Arc<S3ResourceClient>"));
        assert!(render_client_module(&resource("legacy", "mongo"))
            .contains("Arc<PostgresResourceClient>"));
    }

    #[test]
    fn test_literals_are_escaped() {
        let mut r = resource("quoted", "postgres");
        r.id = "id\"with\\quotes".to_string();
        let source = render_client_module(&r);
        assert!(source.contains(r#"ResourceBinding::new("app-1", "id\"with\\quotes")"#));
    }

    #[test]
    fn test_index_module() {
        let index = render_index_module(&[resource("orders-db", "postgres"), resource("crm", "hubspot")]);
        assert_eq!(
            index,
            "//! Auto-generated client exports\n//! DO NOT EDIT\n\n#![allow(non_snake_case)]\n\n\
             mod ordersDb;\nmod crm;\n\npub use ordersDb::ordersDbClient;\npub use crm::crmClient;\n"
        );
        assert_eq!(render_index_module(&[]), "// No clients configured\n");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let resources = vec![resource("orders-db", "postgres"), resource("files", "s3")];
        assert_eq!(render_index_module(&resources), render_index_module(&resources));
        assert_eq!(
            render_client_module(&resources[0]),
            render_client_module(&resources[0])
        );
    }
}
