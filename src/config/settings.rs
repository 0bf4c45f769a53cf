//! Configuration settings structures for courier-rs
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::logger::LoggerConfig;

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "courier-rs".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_keep_alive_timeout() -> u64 {
    75
}

fn default_sms_base_url() -> String {
    "https://api.twilio.com".to_string()
}

fn default_sms_request_timeout() -> u64 {
    30
}

fn default_sms_connect_timeout() -> u64 {
    10
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive_timeout")]
    pub keep_alive_timeout: u64,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
            keep_alive_timeout: default_keep_alive_timeout(),
        }
    }
}

// ============================================================================
// SMS Gateway Configuration
// ============================================================================

/// SMS gateway credentials and transport settings.
///
/// Account sid and auth token are process-wide settings, loaded once at
/// startup. Leaving them empty is allowed: the service still runs, and SMS
/// dispatch attempts fail with a contained configuration error. Set them via
/// `COURIER_SMS__ACCOUNT_SID` / `COURIER_SMS__AUTH_TOKEN` rather than
/// committing them to a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsConfig {
    /// Gateway account identifier
    #[serde(default)]
    pub account_sid: String,

    /// Gateway access key
    #[serde(default)]
    pub auth_token: String,

    /// Gateway API base URL
    #[serde(default = "default_sms_base_url")]
    pub base_url: String,

    /// Outbound request timeout in seconds
    #[serde(default = "default_sms_request_timeout")]
    pub request_timeout: u64,

    /// Outbound connect timeout in seconds
    #[serde(default = "default_sms_connect_timeout")]
    pub connect_timeout: u64,
}

impl SmsConfig {
    /// Whether both credentials are present.
    pub fn is_configured(&self) -> bool {
        !self.account_sid.is_empty() && !self.auth_token.is_empty()
    }
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            account_sid: String::new(),
            auth_token: String::new(),
            base_url: default_sms_base_url(),
            request_timeout: default_sms_request_timeout(),
            connect_timeout: default_sms_connect_timeout(),
        }
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root configuration for the whole application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub sms: SmsConfig,

    #[serde(default)]
    pub logger: LoggerConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_every_section() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.server.address(), "127.0.0.1:3000");
        assert_eq!(settings.sms.base_url, "https://api.twilio.com");
        assert!(!settings.sms.is_configured());
    }

    #[test]
    fn partial_sections_keep_the_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [server]
            port = 8080

            [sms]
            account_sid = "AC123"
            auth_token = "tok"
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert!(settings.sms.is_configured());
        assert_eq!(settings.sms.request_timeout, 30);
    }
}
