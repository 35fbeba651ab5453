use super::common::{json_text_response, typed_arguments};
use crate::core::error::ScanError;
use crate::core::types::ScanProjectArgs;
use crate::mcp::McpCallResponse;
use crate::AppState;
use serde_json::{Map, Value};
use std::sync::Arc;

pub async fn handle(
    state: Arc<AppState>,
    arguments: Map<String, Value>,
) -> Result<McpCallResponse, ScanError> {
    let args: ScanProjectArgs = typed_arguments(arguments)?;

    let issues = state.snyk.project_issues(&args.project_id).await?;
    Ok(json_text_response(&issues))
}
