//! HubSpot CRM tools module.
//!
//! This module provides the tools that translate MCP calls into HubSpot
//! REST requests:
//! - `create_company`: Create a new company record
//! - `update_company`: Patch properties on an existing company
//! - `get_company`: Fetch a single company by ID
//! - `search_companies`: Filtered search over the company collection
//!
//! `client` holds the shared request shape and HTTP client; `company` holds
//! the property and filter types. Each tool has handlers for both HTTP and
//! STDIO/TCP transports.

pub mod client;
pub mod company;
pub mod create_company;
pub mod get_company;
pub mod search_companies;
pub mod update_company;

// Re-export domain-specific tools
pub use create_company::{CrmCreateCompanyParams, CrmCreateCompanyTool};
pub use get_company::{CrmGetCompanyParams, CrmGetCompanyTool};
pub use search_companies::{CrmSearchCompaniesParams, CrmSearchCompaniesTool};
pub use update_company::{CrmUpdateCompanyParams, CrmUpdateCompanyTool};
