//! Update-company tool definition.
//!
//! Patches property values on an existing HubSpot company.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::config::Config;

use super::super::common::{call_with_formatting, invalid_arguments};
use super::client::{COMPANIES_PATH, CrmRequest};
use super::company::CompanyProperties;

/// Parameters for updating a company.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrmUpdateCompanyParams {
    /// HubSpot ID of the company to update.
    pub company_id: String,

    /// Property values to overwrite on the company.
    pub properties: CompanyProperties,
}

/// HubSpot update-company tool implementation.
#[derive(Debug, Clone)]
pub struct CrmUpdateCompanyTool;

impl CrmUpdateCompanyTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "crm_update_company";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Update an existing company in the HubSpot CRM by ID. Only the provided property values are overwritten; custom property keys are passed through.";

    /// Build the outbound request for these parameters.
    pub fn request(params: &CrmUpdateCompanyParams) -> CrmRequest {
        CrmRequest::patch(format!("{}/{}", COMPANIES_PATH, params.company_id))
            .body(serde_json::json!({ "properties": params.properties }))
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(company_id = %params.company_id))]
    pub async fn execute(params: &CrmUpdateCompanyParams, config: &Config) -> CallToolResult {
        info!("Updating company {} in HubSpot CRM", params.company_id);
        call_with_formatting(config, Self::request(params)).await
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(arguments: Value, config: Arc<Config>) -> Result<Value, String> {
        let result = match serde_json::from_value::<CrmUpdateCompanyParams>(arguments) {
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
            input_schema: cached_schema_for_type::<CrmUpdateCompanyParams>(),
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
                    match serde_json::from_value::<CrmUpdateCompanyParams>(Value::Object(args)) {
                        Ok(params) => Self::execute(&params, &config).await,
                        Err(e) => invalid_arguments(e.to_string()),
                    };
                Ok(result)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::crm::client::HUBSPOT_API_BASE;
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn test_params_require_company_id() {
        let result = serde_json::from_value::<CrmUpdateCompanyParams>(json!({
            "properties": {"name": "Acme Corp"}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_request_shape() {
        let params: CrmUpdateCompanyParams = serde_json::from_value(json!({
            "companyId": "8675309",
            "properties": {"lifecyclestage": "customer"}
        }))
        .unwrap();
        let request = CrmUpdateCompanyTool::request(&params);

        assert_eq!(request.method(), &Method::PATCH);
        assert_eq!(
            request.url(HUBSPOT_API_BASE),
            "https://api.hubapi.com/crm/v3/objects/companies/8675309"
        );
        let body = request.body_json().unwrap();
        assert_eq!(body["properties"]["lifecyclestage"], json!("customer"));
    }
}
