//! HubSpot CRM MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes a
//! subset of the HubSpot CRM REST API as schema-validated tools.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that can be executed by clients (CRM company
//!     operations plus an `add` connectivity smoke test)
//!
//! # Example
//!
//! ```rust,no_run
//! use hubspot_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
