use crate::core::schema::{ArgSchema, FieldKind, FieldSpec};
use serde_json::{Map, Value};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolKind {
    ScanRepository,
    ScanProject,
}

#[derive(Clone, Debug)]
pub struct ToolCatalogEntry {
    pub kind: ToolKind,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub input_schema: ArgSchema,
}

pub fn tool_catalog() -> Vec<ToolCatalogEntry> {
    vec![
        ToolCatalogEntry {
            kind: ToolKind::ScanRepository,
            name: "scan_repository",
            title: "Scan Repository",
            description: "Scan a repository for security vulnerabilities using Snyk",
            input_schema: ArgSchema::object(vec![
                FieldSpec::required("url", FieldKind::Url, "Repository URL to scan"),
                FieldSpec::optional("branch", FieldKind::String, "Branch to scan (optional)"),
            ]),
        },
        ToolCatalogEntry {
            kind: ToolKind::ScanProject,
            name: "scan_project",
            title: "Scan Project",
            description: "Scan an existing Snyk project",
            input_schema: ArgSchema::object(vec![FieldSpec::required(
                "projectId",
                FieldKind::String,
                "Snyk project ID to scan",
            )]),
        },
    ]
}

pub fn schema_to_object_map(schema: &Value) -> Arc<Map<String, Value>> {
    match schema {
        Value::Object(map) => Arc::new(map.clone()),
        _ => Arc::new(Map::new()),
    }
}
