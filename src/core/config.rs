//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// HubSpot credentials configuration.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for HubSpot API credentials.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// HubSpot private-app access token used as the bearer credential on
    /// every CRM call. Without it the CRM tools refuse to run.
    pub hubspot_access_token: Option<String>,

    /// Telemetry opt-in flag carried through from the session context.
    /// Present in configuration but not acted on by this server.
    pub telemetry_enabled: bool,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "hubspot_access_token",
                &self.hubspot_access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("telemetry_enabled", &self.telemetry_enabled)
            .finish()
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            hubspot_access_token: None,
            telemetry_enabled: false,
        }
    }
}

impl CredentialsConfig {
    /// Resolve the access token through the ordered lookup chain: the
    /// explicitly configured value first, then the ambient
    /// `HUBSPOT_ACCESS_TOKEN` environment variable. Empty strings count
    /// as absent.
    pub fn resolve_access_token(&self) -> Option<String> {
        self.hubspot_access_token
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| {
                std::env::var("HUBSPOT_ACCESS_TOKEN")
                    .ok()
                    .filter(|t| !t.is_empty())
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "hubspot-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server-level variables are prefixed with `MCP_` (e.g.
    /// `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`). HubSpot credentials come from
    /// `HUBSPOT_ACCESS_TOKEN` and `TELEMETRY_ENABLED`, matching the names
    /// the OAuth session context provides.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        // Load HubSpot access token
        if let Ok(token) = std::env::var("HUBSPOT_ACCESS_TOKEN") {
            config.credentials.hubspot_access_token = Some(token);
            info!("HubSpot access token loaded from environment");
        } else {
            warn!(
                "HUBSPOT_ACCESS_TOKEN not set - CRM tools will report a \
                 missing-token error until one is configured"
            );
        }

        if let Ok(telemetry) = std::env::var("TELEMETRY_ENABLED") {
            config.credentials.telemetry_enabled =
                telemetry.to_lowercase() == "true" || telemetry == "1";
        }

        config
    }
}

// Mutex to ensure tests touching credential env vars run serially
#[cfg(test)]
pub(crate) static ENV_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("HUBSPOT_ACCESS_TOKEN", "pat-na1-test-token");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.hubspot_access_token.as_deref(),
            Some("pat-na1-test-token")
        );
        unsafe {
            std::env::remove_var("HUBSPOT_ACCESS_TOKEN");
        }
    }

    #[test]
    fn test_credentials_default_absent() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("HUBSPOT_ACCESS_TOKEN");
        }
        let config = Config::from_env();
        assert!(config.credentials.hubspot_access_token.is_none());
        assert!(config.credentials.resolve_access_token().is_none());
    }

    #[test]
    fn test_resolve_prefers_explicit_value() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("HUBSPOT_ACCESS_TOKEN", "from-env");
        }
        let creds = CredentialsConfig {
            hubspot_access_token: Some("from-config".to_string()),
            telemetry_enabled: false,
        };
        assert_eq!(creds.resolve_access_token().as_deref(), Some("from-config"));
        unsafe {
            std::env::remove_var("HUBSPOT_ACCESS_TOKEN");
        }
    }

    #[test]
    fn test_resolve_falls_back_to_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("HUBSPOT_ACCESS_TOKEN", "from-env");
        }
        let creds = CredentialsConfig {
            hubspot_access_token: None,
            telemetry_enabled: false,
        };
        assert_eq!(creds.resolve_access_token().as_deref(), Some("from-env"));
        unsafe {
            std::env::remove_var("HUBSPOT_ACCESS_TOKEN");
        }
    }

    #[test]
    fn test_resolve_treats_empty_as_absent() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("HUBSPOT_ACCESS_TOKEN");
        }
        let creds = CredentialsConfig {
            hubspot_access_token: Some(String::new()),
            telemetry_enabled: false,
        };
        assert!(creds.resolve_access_token().is_none());
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            hubspot_access_token: Some("super_secret_token".to_string()),
            telemetry_enabled: true,
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }

    #[test]
    fn test_telemetry_flag_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TELEMETRY_ENABLED", "true");
        }
        let config = Config::from_env();
        assert!(config.credentials.telemetry_enabled);
        unsafe {
            std::env::remove_var("TELEMETRY_ENABLED");
        }
    }
}
