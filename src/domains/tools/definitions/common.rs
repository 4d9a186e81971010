//! Common utilities shared across tool definitions.
//!
//! Every tool outcome - payload, upstream error, configuration failure,
//! argument rejection - is folded into the same single-text-content
//! envelope, so a tool invocation never surfaces as a protocol-level
//! failure. The helpers here implement that envelope and the folding.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::warn;

use crate::core::config::Config;
use crate::domains::tools::ToolError;

use super::crm::client::{ApiOutcome, CrmRequest, HubSpotClient};

/// Literal text used when a call produced no data at all.
pub const NO_DATA_TEXT: &str = "No data returned";

/// Wrap text in the single-content envelope every tool returns.
pub fn text_envelope(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Fold any JSON value into the envelope.
///
/// Strings are used verbatim, null becomes the no-data literal, objects and
/// arrays are rendered as canonical JSON, and remaining scalars take their
/// JSON text form.
pub fn format_value(data: &Value) -> CallToolResult {
    let text = match data {
        Value::String(text) => text.clone(),
        Value::Null => NO_DATA_TEXT.to_string(),
        Value::Object(_) | Value::Array(_) => data.to_string(),
        scalar => scalar.to_string(),
    };
    text_envelope(text)
}

/// Execute a HubSpot request and fold every outcome into the envelope.
///
/// Successful payloads go through [`format_value`]; upstream notices (non-2xx
/// statuses, 204) are used verbatim; configuration and transport failures
/// become their error message. This layer never fails.
pub async fn call_with_formatting(config: &Config, request: CrmRequest) -> CallToolResult {
    let outcome = match HubSpotClient::from_config(config) {
        Ok(client) => client.call(request).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(ApiOutcome::Payload(payload)) => format_value(&payload),
        Ok(ApiOutcome::Notice(notice)) => text_envelope(notice),
        Err(e) => {
            warn!("CRM call failed: {}", e);
            text_envelope(e.to_string())
        }
    }
}

/// Envelope for an argument-validation failure.
///
/// The schema's own message becomes the response text; the MCP call itself
/// still succeeds.
pub fn invalid_arguments(message: impl Into<String>) -> CallToolResult {
    let error = ToolError::invalid_arguments(message.into());
    warn!("{}", error);
    text_envelope(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn envelope_text(result: &CallToolResult) -> String {
        assert_eq!(result.content.len(), 1);
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_format_string_verbatim() {
        let result = format_value(&json!("already text"));
        assert_eq!(envelope_text(&result), "already text");
    }

    #[test]
    fn test_format_null_literal() {
        let result = format_value(&Value::Null);
        assert_eq!(envelope_text(&result), "No data returned");
    }

    #[test]
    fn test_format_object_as_json() {
        let result = format_value(&json!({"id": "123"}));
        assert_eq!(envelope_text(&result), r#"{"id":"123"}"#);
    }

    #[test]
    fn test_format_array_as_json() {
        let result = format_value(&json!(["a", "b"]));
        assert_eq!(envelope_text(&result), r#"["a","b"]"#);
    }

    #[test]
    fn test_format_scalar_coercion() {
        assert_eq!(envelope_text(&format_value(&json!(42))), "42");
        assert_eq!(envelope_text(&format_value(&json!(true))), "true");
    }

    #[test]
    fn test_invalid_arguments_envelope() {
        let result = invalid_arguments("missing field `properties`");
        let text = envelope_text(&result);
        assert!(text.starts_with("Invalid arguments:"));
        assert!(text.contains("properties"));
    }

    #[tokio::test]
    async fn test_call_without_token_skips_network() {
        let _lock = crate::core::config::ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("HUBSPOT_ACCESS_TOKEN");
        }
        // With no token the missing-token envelope comes back before any
        // HTTP activity.
        let config = Config::default();
        let request = CrmRequest::post("/crm/v3/objects/companies");
        let result = call_with_formatting(&config, request).await;
        let text = envelope_text(&result);
        assert!(text.contains("access token"));
    }
}
