use super::dispatch;
use super::tooling::schema_to_object_map;
use crate::core::config::SnykConfig;
use crate::mcp::McpCallResponse;
use crate::AppState;
use rmcp::{model::*, ServiceExt};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{info, warn};

fn mcp_call_response_to_stdio_result(response: McpCallResponse) -> CallToolResult {
    let content = response
        .content
        .into_iter()
        .map(|item| Content::text(item.text))
        .collect();

    if response.is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}

#[derive(Clone, Debug)]
pub struct McpService {
    pub state: Arc<AppState>,
}

impl McpService {
    pub fn new(config: SnykConfig) -> anyhow::Result<Self> {
        info!("Starting MCP Service");
        info!("Snyk API base URL: {}", config.api_base_url());

        let http_client = AppState::http_client()?;
        let state = AppState::new(config, http_client);

        Ok(Self {
            state: Arc::new(state),
        })
    }
}

impl rmcp::ServerHandler for McpService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::LATEST)
            .with_server_info(
                Implementation::new("snyk-mcp-server", env!("CARGO_PKG_VERSION"))
                    .with_title("Snyk MCP")
                    .with_description(
                        "Relays repository and project vulnerability scans to the Snyk API.",
                    ),
            )
            .with_instructions(
                "Use scan_repository to test a remote repository URL, or scan_project to fetch issues for an existing Snyk project.",
            )
    }

    async fn list_tools(
        &self,
        _page: Option<PaginatedRequestParams>,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        let tools = dispatch::list_tools(&self.state)
            .into_iter()
            .map(|tool| {
                Tool::new(
                    Cow::Owned(tool.name),
                    Cow::Owned(tool.description),
                    schema_to_object_map(&tool.input_schema),
                )
                .with_title(tool.title)
            })
            .collect();

        Ok(ListToolsResult {
            tools,
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        match dispatch::call_tool(
            Arc::clone(&self.state),
            request.name.as_ref(),
            request.arguments.as_ref(),
        )
        .await
        {
            Ok(response) => Ok(mcp_call_response_to_stdio_result(response)),
            Err(e) => {
                warn!("MCP tool call {} failed: {}", request.name, e);
                Err(e.into())
            }
        }
    }
}

pub async fn run(config: SnykConfig) -> anyhow::Result<()> {
    let service = McpService::new(config)?;
    let running = service.serve(rmcp::transport::stdio()).await?;
    info!("Snyk MCP Server running on stdio");
    let quit_reason = running.waiting().await?;
    warn!("MCP stdio server stopped: {:?}", quit_reason);
    Ok(())
}
