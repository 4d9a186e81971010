//! Addition smoke-test tool definition.
//!
//! Adds two numbers and returns the sum. Exists to verify end-to-end tool
//! connectivity without touching HubSpot.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::common::{invalid_arguments, text_envelope};

/// Parameters for the addition tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddParams {
    /// First addend.
    pub a: f64,

    /// Second addend.
    pub b: f64,
}

/// Addition smoke-test tool implementation.
#[derive(Debug, Clone)]
pub struct AddTool;

impl AddTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Add two numbers and return the sum. Connectivity smoke test; does not call HubSpot.";

    /// Execute the tool logic.
    pub fn execute(params: &AddParams) -> CallToolResult {
        text_envelope(format!("{}", params.a + params.b))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: Value) -> Result<Value, String> {
        let result = match serde_json::from_value::<AddParams>(arguments) {
            Ok(params) => Self::execute(&params),
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
            input_schema: cached_schema_for_type::<AddParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let result = match serde_json::from_value::<AddParams>(Value::Object(args)) {
                    Ok(params) => Self::execute(&params),
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
    use rmcp::model::RawContent;
    use serde_json::json;

    fn envelope_text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_add_integers() {
        let params: AddParams = serde_json::from_value(json!({"a": 2, "b": 3})).unwrap();
        let result = AddTool::execute(&params);
        assert_eq!(envelope_text(&result), "5");
    }

    #[test]
    fn test_add_fractions() {
        let params: AddParams = serde_json::from_value(json!({"a": 2.5, "b": 0.25})).unwrap();
        let result = AddTool::execute(&params);
        assert_eq!(envelope_text(&result), "2.75");
    }

    #[test]
    fn test_non_numeric_rejected() {
        let result = serde_json::from_value::<AddParams>(json!({"a": "two", "b": 3}));
        assert!(result.is_err());
    }
}
