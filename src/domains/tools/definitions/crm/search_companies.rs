//! Search-companies tool definition.
//!
//! Runs a filtered search against the HubSpot company collection. The whole
//! argument set is the request body; HubSpot ANDs filters within a group and
//! ORs across groups.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::config::Config;

use super::super::common::{call_with_formatting, invalid_arguments};
use super::client::{COMPANIES_PATH, CrmRequest};
use super::company::FilterGroup;

/// Parameters for searching companies. Serialized verbatim as the request
/// body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrmSearchCompaniesParams {
    /// Filter groups: filters within a group are ANDed, groups are ORed.
    pub filter_groups: Vec<FilterGroup>,

    /// Property names to return for each hit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<String>>,

    /// Page size, 1 to 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 100))]
    pub limit: Option<u32>,

    /// Paging cursor from a previous search response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,

    /// Sort specs, passed through to HubSpot verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorts: Option<Vec<Value>>,
}

/// HubSpot search-companies tool implementation.
#[derive(Debug, Clone)]
pub struct CrmSearchCompaniesTool;

impl CrmSearchCompaniesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "crm_search_companies";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search companies in the HubSpot CRM with filter groups (AND within a group, OR across groups), optional property selection, paging, and sorting. Filter operators are restricted to the HubSpot operator set.";

    /// Build the outbound request for these parameters.
    pub fn request(params: &CrmSearchCompaniesParams) -> CrmRequest {
        CrmRequest::post(format!("{}/search", COMPANIES_PATH)).body(serde_json::json!(params))
    }

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(params: &CrmSearchCompaniesParams, config: &Config) -> CallToolResult {
        if let Some(limit) = params.limit {
            if !(1..=100).contains(&limit) {
                return invalid_arguments(format!(
                    "limit must be between 1 and 100, got {}",
                    limit
                ));
            }
        }

        info!(
            "Searching HubSpot companies ({} filter group(s))",
            params.filter_groups.len()
        );
        call_with_formatting(config, Self::request(params)).await
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(arguments: Value, config: Arc<Config>) -> Result<Value, String> {
        let result = match serde_json::from_value::<CrmSearchCompaniesParams>(arguments) {
            Ok(params) => Self::execute(&params, &config).await,
            Err(e) => invalid_arguments(e.to_string()),
        };

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CrmSearchCompaniesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let result =
                    match serde_json::from_value::<CrmSearchCompaniesParams>(Value::Object(args)) {
                        Ok(params) => Self::execute(&params, &config).await,
                        Err(e) => invalid_arguments(e.to_string()),
                    };
                Ok(result)
            }
            .boxed()
        })
    }
}
