//! Create-company tool definition.
//!
//! Creates a new company record in the HubSpot CRM.

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

/// Parameters for creating a company.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CrmCreateCompanyParams {
    /// Property values for the new company.
    pub properties: CompanyProperties,

    /// Association specs linking the new company to existing CRM objects,
    /// passed through to HubSpot verbatim.
    #[serde(default)]
    pub associations: Option<Vec<Value>>,
}

/// HubSpot create-company tool implementation.
#[derive(Debug, Clone)]
pub struct CrmCreateCompanyTool;

impl CrmCreateCompanyTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "crm_create_company";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new company in the HubSpot CRM. Accepts the known company properties (name, domain, website, industry, lifecycle stage, address fields, ...) plus any custom property key, and optional association specs.";

    /// Build the outbound request for these parameters.
    pub fn request(params: &CrmCreateCompanyParams) -> CrmRequest {
        let mut body = serde_json::json!({ "properties": params.properties });
        if let Some(associations) = &params.associations {
            body["associations"] = Value::from(associations.clone());
        }
        CrmRequest::post(COMPANIES_PATH).body(body)
    }

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(params: &CrmCreateCompanyParams, config: &Config) -> CallToolResult {
        info!("Creating company in HubSpot CRM");
        call_with_formatting(config, Self::request(params)).await
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(arguments: Value, config: Arc<Config>) -> Result<Value, String> {
        let result = match serde_json::from_value::<CrmCreateCompanyParams>(arguments) {
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
            input_schema: cached_schema_for_type::<CrmCreateCompanyParams>(),
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
                    match serde_json::from_value::<CrmCreateCompanyParams>(Value::Object(args)) {
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
    fn test_params_minimal() {
        let params: CrmCreateCompanyParams = serde_json::from_value(json!({
            "properties": {"name": "Acme Corp"}
        }))
        .unwrap();
        assert_eq!(params.properties.name.as_deref(), Some("Acme Corp"));
        assert!(params.associations.is_none());
    }

    #[test]
    fn test_params_missing_properties_rejected() {
        let result = serde_json::from_value::<CrmCreateCompanyParams>(json!({}));
        assert!(result.is_err());
    }

    #[test]
    fn test_request_shape() {
        let params: CrmCreateCompanyParams = serde_json::from_value(json!({
            "properties": {"name": "Acme Corp", "domain": "acme.com"}
        }))
        .unwrap();
        let request = CrmCreateCompanyTool::request(&params);

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(
            request.url(HUBSPOT_API_BASE),
            "https://api.hubapi.com/crm/v3/objects/companies"
        );
        let body = request.body_json().unwrap();
        assert_eq!(body["properties"]["name"], json!("Acme Corp"));
        assert!(body.get("associations").is_none());
    }

    #[tokio::test]
    async fn test_execute_without_token_reports_missing_token() {
        let _lock = crate::core::config::ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("HUBSPOT_ACCESS_TOKEN");
        }
        let params: CrmCreateCompanyParams = serde_json::from_value(json!({
            "properties": {"name": "Acme Corp"}
        }))
        .unwrap();
        let config = crate::core::config::Config::default();
        let result = CrmCreateCompanyTool::execute(&params, &config).await;
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => {
                assert!(text.text.contains("access token"));
            }
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_request_includes_associations_when_present() {
        let params: CrmCreateCompanyParams = serde_json::from_value(json!({
            "properties": {"name": "Acme Corp"},
            "associations": [{"to": {"id": "101"}, "types": []}]
        }))
        .unwrap();
        let request = CrmCreateCompanyTool::request(&params);
        let body = request.body_json().unwrap();
        assert_eq!(body["associations"][0]["to"]["id"], json!("101"));
    }
}
