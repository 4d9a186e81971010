//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::core::config::Config;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

use super::definitions::{
    AddTool, CrmCreateCompanyTool, CrmGetCompanyTool, CrmSearchCompaniesTool, CrmUpdateCompanyTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            AddTool::NAME,
            CrmCreateCompanyTool::NAME,
            CrmGetCompanyTool::NAME,
            CrmSearchCompaniesTool::NAME,
            CrmUpdateCompanyTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            AddTool::to_tool(),
            CrmCreateCompanyTool::to_tool(),
            CrmGetCompanyTool::to_tool(),
            CrmSearchCompaniesTool::to_tool(),
            CrmUpdateCompanyTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            AddTool::NAME => AddTool::http_handler(arguments),
            CrmCreateCompanyTool::NAME => {
                CrmCreateCompanyTool::http_handler(arguments, self.config.clone()).await
            }
            CrmGetCompanyTool::NAME => {
                CrmGetCompanyTool::http_handler(arguments, self.config.clone()).await
            }
            CrmSearchCompaniesTool::NAME => {
                CrmSearchCompaniesTool::http_handler(arguments, self.config.clone()).await
            }
            CrmUpdateCompanyTool::NAME => {
                CrmUpdateCompanyTool::http_handler(arguments, self.config.clone()).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name).to_string())
            }
        }
    }
}
