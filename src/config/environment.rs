//! Application environment detection.

use std::fmt;
use std::str::FromStr;

/// Environment variable that selects the application environment.
pub const APP_ENV_VAR: &str = "COURIER_APP_ENV";

/// The environment the application is running in.
///
/// Selects which layered configuration file (`{environment}.toml`) is loaded
/// on top of `default.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl Environment {
    /// Reads the environment from `COURIER_APP_ENV`, defaulting to
    /// development when unset or unrecognized.
    pub fn from_env() -> Self {
        std::env::var(APP_ENV_VAR)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "prod" | "production" => Ok(Environment::Production),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
