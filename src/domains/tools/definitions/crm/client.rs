//! HubSpot REST API client.
//!
//! This module provides the request shape shared by all CRM tools and the
//! thin client that executes it: bearer-token auth, JSON accept/content
//! headers, and folding of HTTP status codes into descriptive notices.

use reqwest::{Method, StatusCode, header};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::config::Config;

/// Base URL for all HubSpot API calls.
pub const HUBSPOT_API_BASE: &str = "https://api.hubapi.com";

/// Collection endpoint for company objects.
pub const COMPANIES_PATH: &str = "/crm/v3/objects/companies";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors raised by the HubSpot client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No access token resolved from configuration. Raised before any
    /// network activity.
    #[error(
        "HubSpot access token is not configured; set HUBSPOT_ACCESS_TOKEN to enable CRM tools"
    )]
    MissingToken,

    /// Transport-level failure (connect, timeout, read).
    #[error("HubSpot request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Invalid JSON in HubSpot response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

/// Outcome of a call that completed at the HTTP layer.
///
/// Non-success statuses become notices rather than errors so they flow into
/// the same response envelope as payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    /// Parsed JSON body of a successful response.
    Payload(Value),

    /// Descriptive text for an empty or non-success response.
    Notice(String),
}

/// A single HubSpot request: method, path, query entries in insertion order,
/// and an optional JSON body.
#[derive(Debug, Clone)]
pub struct CrmRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl CrmRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Build a GET request for the given API path.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Build a POST request for the given API path.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Build a PATCH request for the given API path.
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Append a query entry. `None` values are omitted entirely.
    pub fn query(mut self, key: &str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.query.push((key.to_string(), value));
        }
        self
    }

    /// Attach a JSON body.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// The HTTP method of this request.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The JSON body, if one was attached.
    pub fn body_json(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Full URL against the given base, query percent-encoded in insertion
    /// order.
    pub fn url(&self, base: &str) -> String {
        let query = serde_urlencoded::to_string(&self.query).unwrap_or_default();
        if query.is_empty() {
            format!("{}{}", base, self.path)
        } else {
            format!("{}{}?{}", base, self.path, query)
        }
    }
}

/// Thin client over the HubSpot REST API.
pub struct HubSpotClient {
    token: String,
    base_url: String,
    http: reqwest::Client,
}

impl HubSpotClient {
    /// Build a client from configuration.
    ///
    /// Fails fast with [`ClientError::MissingToken`] when no token resolves,
    /// before any network activity.
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let token = config
            .credentials
            .resolve_access_token()
            .ok_or(ClientError::MissingToken)?;
        Self::new(token)
    }

    /// Build a client with an explicit access token.
    pub fn new(token: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            token: token.into(),
            base_url: HUBSPOT_API_BASE.to_string(),
            http,
        })
    }

    /// Perform a request against HubSpot.
    ///
    /// HTTP-level failures (non-2xx) and empty responses (204) come back as
    /// [`ApiOutcome::Notice`] text; transport and decode failures are the
    /// only `Err` cases.
    pub async fn call(&self, request: CrmRequest) -> Result<ApiOutcome, ClientError> {
        let url = request.url(&self.base_url);
        debug!("HubSpot request: {} {}", request.method(), url);

        let mut builder = self
            .http
            .request(request.method().clone(), &url)
            .header(header::ACCEPT, "application/json")
            .bearer_auth(&self.token);

        // Content-Type goes on the wire only when a body does
        if let Some(body) = request.body_json() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        if let Some(notice) = triage_status(status) {
            warn!("HubSpot returned status {}", status);
            return Ok(ApiOutcome::Notice(notice));
        }

        let bytes = response.bytes().await?;
        let payload: Value = serde_json::from_slice(&bytes)?;
        Ok(ApiOutcome::Payload(payload))
    }
}

/// Map a response status to its notice text, or `None` for a success whose
/// body should be read.
fn triage_status(status: StatusCode) -> Option<String> {
    if status == StatusCode::NO_CONTENT {
        Some(empty_response_notice())
    } else if !status.is_success() {
        Some(upstream_error_notice(status.as_u16()))
    } else {
        None
    }
}

/// Descriptive text for a non-success HubSpot status.
pub fn upstream_error_notice(status: u16) -> String {
    format!("Error fetching data from HubSpot: Status {}", status)
}

/// Descriptive text for an HTTP 204 response.
pub fn empty_response_notice() -> String {
    "No data returned: Status 204".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_without_query() {
        let request = CrmRequest::post(COMPANIES_PATH);
        assert_eq!(
            request.url(HUBSPOT_API_BASE),
            "https://api.hubapi.com/crm/v3/objects/companies"
        );
    }

    #[test]
    fn test_url_encodes_query_in_insertion_order() {
        let request = CrmRequest::get(format!("{}/123", COMPANIES_PATH))
            .query("properties", Some("name,domain".to_string()))
            .query("associations", Some("contacts".to_string()));
        assert_eq!(
            request.url(HUBSPOT_API_BASE),
            "https://api.hubapi.com/crm/v3/objects/companies/123?properties=name%2Cdomain&associations=contacts"
        );
    }

    #[test]
    fn test_url_omits_absent_query_entries() {
        let request = CrmRequest::get(format!("{}/123", COMPANIES_PATH))
            .query("properties", None)
            .query("associations", None);
        assert_eq!(
            request.url(HUBSPOT_API_BASE),
            "https://api.hubapi.com/crm/v3/objects/companies/123"
        );
    }

    #[test]
    fn test_request_carries_method_and_body() {
        let request = CrmRequest::patch(format!("{}/42", COMPANIES_PATH))
            .body(json!({"properties": {"name": "Acme"}}));
        assert_eq!(request.method(), &Method::PATCH);
        assert!(request.body_json().is_some());

        let request = CrmRequest::get(COMPANIES_PATH);
        assert!(request.body_json().is_none());
    }

    #[test]
    fn test_triage_not_found() {
        assert_eq!(
            triage_status(StatusCode::NOT_FOUND).as_deref(),
            Some("Error fetching data from HubSpot: Status 404")
        );
    }

    #[test]
    fn test_triage_no_content() {
        assert_eq!(
            triage_status(StatusCode::NO_CONTENT).as_deref(),
            Some("No data returned: Status 204")
        );
    }

    #[test]
    fn test_triage_success_reads_body() {
        assert_eq!(triage_status(StatusCode::OK), None);
        assert_eq!(triage_status(StatusCode::CREATED), None);
    }

    #[test]
    fn test_from_config_without_token() {
        let _lock = crate::core::config::ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("HUBSPOT_ACCESS_TOKEN");
        }
        let config = Config::default();
        let err = HubSpotClient::from_config(&config).err();
        assert!(matches!(err, Some(ClientError::MissingToken)));
    }
}
