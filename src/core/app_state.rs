use super::config::SnykConfig;
use super::tools_registry::ToolRegistry;
use crate::tools::SnykClient;
use std::sync::Arc;

/// Read-only state shared by every tool call; nothing here is mutated after startup.
#[derive(Clone, Debug)]
pub struct AppState {
    pub snyk: SnykClient,
    pub tool_registry: Arc<ToolRegistry>,
}

impl AppState {
    pub fn new(config: SnykConfig, http_client: reqwest::Client) -> Self {
        Self {
            snyk: SnykClient::new(http_client, config),
            tool_registry: Arc::new(ToolRegistry::load()),
        }
    }

    /// Builds the shared HTTP client. No timeout is set; a hung upstream stalls only its own call.
    pub fn http_client() -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .user_agent(concat!("snyk-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
    }
}
