use crate::core::schema::ArgSchema;
use crate::mcp::tooling::{tool_catalog, ToolKind};
use serde_json::Value;
use tracing::info;

/// One advertised tool: the catalog entry plus its rendered JSON schema.
#[derive(Clone, Debug)]
pub struct ToolSpec {
    pub kind: ToolKind,
    pub name: String,
    pub title: String,
    pub description: String,
    pub schema: ArgSchema,
    pub input_schema: Value,
}

/// Immutable set of tools, built once at startup.
#[derive(Clone, Debug, Default)]
pub struct ToolRegistry {
    specs: Vec<ToolSpec>,
}

impl ToolRegistry {
    pub fn load() -> Self {
        let specs: Vec<ToolSpec> = tool_catalog()
            .into_iter()
            .map(|entry| ToolSpec {
                kind: entry.kind,
                name: entry.name.to_string(),
                title: entry.title.to_string(),
                description: entry.description.to_string(),
                input_schema: entry.input_schema.to_json_schema(),
                schema: entry.input_schema,
            })
            .collect();

        info!(
            "tool_registry: {} tools registered ({})",
            specs.len(),
            specs
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Self { specs }
    }

    /// Tools in catalog order.
    pub fn specs(&self) -> &[ToolSpec] {
        &self.specs
    }

    pub fn resolve(&self, name: &str) -> Option<&ToolSpec> {
        self.specs.iter().find(|s| s.name == name)
    }
}
