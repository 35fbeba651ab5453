pub mod dispatch;
pub mod handlers;
pub mod stdio;
pub mod tooling;

pub use dispatch::{call_tool, list_tools, McpCallResponse, McpContent, McpTool};
