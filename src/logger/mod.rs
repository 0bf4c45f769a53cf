//! Logger module
//!
//! A logging setup based on `tracing-subscriber` with support for:
//! - Console output with color control
//! - An optional append-only file sink with multiple formats (Full, Compact, JSON)
//! - Level filtering through `EnvFilter` directives

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

fn default_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> PathBuf {
    PathBuf::from("logs/courier.log")
}

/// Output format for the file sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Full,
    Compact,
    #[default]
    Json,
}

/// Console output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// ANSI colors; only applied when stdout is a terminal.
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colored: true,
        }
    }
}

/// File output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_log_path")]
    pub path: PathBuf,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            format: LogFormat::default(),
        }
    }
}

/// Logger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Level filter; accepts a plain level ("info") or a full `EnvFilter`
    /// directive string ("info,courier_rs=debug").
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub console: ConsoleConfig,

    #[serde(default)]
    pub file: FileConfig,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            console: ConsoleConfig::default(),
            file: FileConfig::default(),
        }
    }
}

impl LoggerConfig {
    /// Checks the configuration without installing anything.
    pub fn validate(&self) -> Result<(), String> {
        EnvFilter::try_new(&self.level)
            .map_err(|e| format!("invalid level filter '{}': {e}", self.level))?;

        if !self.console.enabled && !self.file.enabled {
            return Err("at least one output (console or file) must be enabled".to_string());
        }

        Ok(())
    }
}

/// Initialize the global logger with the given configuration.
///
/// Must be called once at process start, before any request handling.
pub fn init_logger(config: &LoggerConfig) -> anyhow::Result<()> {
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let mut layers: Vec<BoxedLayer> = Vec::new();

    if config.console.enabled {
        let use_ansi = config.console.colored && std::io::stdout().is_terminal();
        layers.push(
            fmt::layer()
                .with_ansi(use_ansi)
                .with_target(true)
                .with_level(true)
                .boxed(),
        );
    }

    if config.file.enabled {
        layers.push(file_layer(&config.file)?);
    }

    tracing_subscriber::registry().with(layers).with(filter).init();

    Ok(())
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn file_layer(config: &FileConfig) -> anyhow::Result<BoxedLayer> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)?;
    let writer = Mutex::new(file);

    let layer = match config.format {
        LogFormat::Full => fmt::layer().with_ansi(false).with_writer(writer).boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_ansi(false)
            .with_writer(writer)
            .boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(writer).boxed(),
    };
    Ok(layer)
}
