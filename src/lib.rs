pub mod core;
pub mod mcp;
pub mod tools;

pub use crate::core::config;
pub use crate::core::error::ScanError;
pub use crate::core::types;
pub use crate::core::AppState;
pub use crate::mcp::stdio as stdio_service;
