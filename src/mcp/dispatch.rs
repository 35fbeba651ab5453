use super::handlers;
use super::tooling::ToolKind;
use crate::core::error::{ArgumentErrors, ScanError};
use crate::AppState;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
pub struct McpTool {
    pub name: String,
    pub title: String,
    pub description: String,
    pub input_schema: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct McpCallResponse {
    pub content: Vec<McpContent>,
    pub is_error: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct McpContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl McpCallResponse {
    pub fn text(text: String) -> Self {
        Self {
            content: vec![McpContent {
                content_type: "text".to_string(),
                text,
            }],
            is_error: false,
        }
    }
}

pub fn list_tools(state: &AppState) -> Vec<McpTool> {
    state
        .tool_registry
        .specs()
        .iter()
        .map(|spec| McpTool {
            name: spec.name.clone(),
            title: spec.title.clone(),
            description: spec.description.clone(),
            input_schema: spec.input_schema.clone(),
        })
        .collect()
}

/// Validates and routes one call.
///
/// Missing arguments are rejected before the name is looked up.
pub async fn call_tool(
    state: Arc<AppState>,
    name: &str,
    arguments: Option<&Map<String, Value>>,
) -> Result<McpCallResponse, ScanError> {
    info!("MCP tool call: {}", name);

    let arguments = arguments.ok_or_else(ArgumentErrors::missing_object)?;

    let spec = state
        .tool_registry
        .resolve(name)
        .ok_or_else(|| ScanError::UnknownTool(name.to_string()))?;

    let kind = spec.kind;
    let validated = spec.schema.validate(arguments)?;

    match kind {
        ToolKind::ScanRepository => handlers::scan_repository::handle(state, validated).await,
        ToolKind::ScanProject => handlers::scan_project::handle(state, validated).await,
    }
}
