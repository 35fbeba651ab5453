use super::common::{json_text_response, typed_arguments};
use crate::core::error::ScanError;
use crate::core::types::ScanRepositoryArgs;
use crate::mcp::McpCallResponse;
use crate::tools::remote_url;
use crate::AppState;
use serde_json::{Map, Value};
use std::sync::Arc;

pub async fn handle(
    state: Arc<AppState>,
    arguments: Map<String, Value>,
) -> Result<McpCallResponse, ScanError> {
    let args: ScanRepositoryArgs = typed_arguments(arguments)?;
    let target = remote_url(&args.url, args.branch.as_deref());

    let report = state.snyk.test_repository(&target).await?;
    Ok(json_text_response(&report))
}
