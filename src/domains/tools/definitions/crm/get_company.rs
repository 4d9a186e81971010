//! Get-company tool definition.
//!
//! Fetches a single HubSpot company by ID, optionally selecting which
//! properties and associations come back.

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

/// Parameters for fetching a company.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrmGetCompanyParams {
    /// HubSpot ID of the company to fetch.
    pub company_id: String,

    /// Property names to include; joined with commas on the query string.
    #[serde(default)]
    pub properties: Option<Vec<String>>,

    /// Association object types to include; joined with commas.
    #[serde(default)]
    pub associations: Option<Vec<String>>,
}

/// HubSpot get-company tool implementation.
#[derive(Debug, Clone)]
pub struct CrmGetCompanyTool;

impl CrmGetCompanyTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "crm_get_company";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch a single company from the HubSpot CRM by ID. Optionally select which properties to return and which associated object types to include.";

    /// Build the outbound request for these parameters.
    pub fn request(params: &CrmGetCompanyParams) -> CrmRequest {
        CrmRequest::get(format!("{}/{}", COMPANIES_PATH, params.company_id))
            .query("properties", join_csv(params.properties.as_deref()))
            .query("associations", join_csv(params.associations.as_deref()))
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(company_id = %params.company_id))]
    pub async fn execute(params: &CrmGetCompanyParams, config: &Config) -> CallToolResult {
        info!("Fetching company {} from HubSpot CRM", params.company_id);
        call_with_formatting(config, Self::request(params)).await
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(arguments: Value, config: Arc<Config>) -> Result<Value, String> {
        let result = match serde_json::from_value::<CrmGetCompanyParams>(arguments) {
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
            input_schema: cached_schema_for_type::<CrmGetCompanyParams>(),
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
                    match serde_json::from_value::<CrmGetCompanyParams>(Value::Object(args)) {
                        Ok(params) => Self::execute(&params, &config).await,
                        Err(e) => invalid_arguments(e.to_string()),
                    };
                Ok(result)
            }
            .boxed()
        })
    }
}

/// Comma-join a list query value. Absent and empty both omit the parameter.
fn join_csv(values: Option<&[String]>) -> Option<String> {
    values.filter(|v| !v.is_empty()).map(|v| v.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::crm::client::HUBSPOT_API_BASE;
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn test_request_joins_properties_into_query() {
        let params: CrmGetCompanyParams = serde_json::from_value(json!({
            "companyId": "123",
            "properties": ["name", "domain"]
        }))
        .unwrap();
        let request = CrmGetCompanyTool::request(&params);

        assert_eq!(request.method(), &Method::GET);
        assert!(request.body_json().is_none());
        assert_eq!(
            request.url(HUBSPOT_API_BASE),
            "https://api.hubapi.com/crm/v3/objects/companies/123?properties=name%2Cdomain"
        );
    }

    #[test]
    fn test_request_without_selections() {
        let params: CrmGetCompanyParams = serde_json::from_value(json!({
            "companyId": "123"
        }))
        .unwrap();
        let request = CrmGetCompanyTool::request(&params);
        assert_eq!(
            request.url(HUBSPOT_API_BASE),
            "https://api.hubapi.com/crm/v3/objects/companies/123"
        );
    }

    #[test]
    fn test_empty_array_behaves_like_absent() {
        let params: CrmGetCompanyParams = serde_json::from_value(json!({
            "companyId": "123",
            "properties": [],
            "associations": []
        }))
        .unwrap();
        let request = CrmGetCompanyTool::request(&params);
        assert_eq!(
            request.url(HUBSPOT_API_BASE),
            "https://api.hubapi.com/crm/v3/objects/companies/123"
        );
    }

    #[test]
    fn test_associations_query_value() {
        let params: CrmGetCompanyParams = serde_json::from_value(json!({
            "companyId": "123",
            "associations": ["contacts", "deals"]
        }))
        .unwrap();
        let request = CrmGetCompanyTool::request(&params);
        assert_eq!(
            request.url(HUBSPOT_API_BASE),
            "https://api.hubapi.com/crm/v3/objects/companies/123?associations=contacts%2Cdeals"
        );
    }
}
