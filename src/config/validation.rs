//! Configuration validation logic
//!
//! Validation methods for configuration structures, run once after loading.

use crate::config::error::ConfigError;
use crate::config::settings::{ServerConfig, Settings, SmsConfig};

impl ServerConfig {
    /// Validate server configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.keep_alive_timeout == 0 {
            return Err(ConfigError::validation(
                "server.keep_alive_timeout",
                "Keep-alive timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl SmsConfig {
    /// Validate SMS gateway configuration
    ///
    /// Credentials may legitimately be absent (dispatch then fails with a
    /// contained configuration error), but the transport settings must be
    /// usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::validation(
                "sms.base_url",
                "Gateway base URL must not be empty.",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::validation(
                "sms.base_url",
                "Gateway base URL must use http or https.",
            ));
        }

        if self.request_timeout == 0 || self.connect_timeout == 0 {
            return Err(ConfigError::validation(
                "sms.request_timeout",
                "Gateway timeouts must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate the full configuration tree.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.sms.validate()?;
        self.logger
            .validate()
            .map_err(|reason| ConfigError::validation("logger", reason))?;
        Ok(())
    }
}
