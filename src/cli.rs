//! CLI argument parsing with clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Environment;

/// A notification recording and dispatch service
#[derive(Parser, Debug)]
#[command(name = "courier-rs")]
#[command(about = "A notification recording and dispatch service")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute; defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Use a single TOML file instead of the layered config directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override environment detection (development, test, production)
    #[arg(short, long, value_enum)]
    pub env: Option<EnvironmentArg>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    Serve {
        /// Host address to bind to
        #[arg(long, value_name = "ADDRESS")]
        host: Option<String>,

        /// Port number to listen on
        #[arg(long, value_name = "PORT")]
        port: Option<u16>,
    },
}

/// Environment selection on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum EnvironmentArg {
    #[value(alias = "dev")]
    Development,
    Test,
    #[value(alias = "prod")]
    Production,
}

impl From<EnvironmentArg> for Environment {
    fn from(arg: EnvironmentArg) -> Self {
        match arg {
            EnvironmentArg::Development => Environment::Development,
            EnvironmentArg::Test => Environment::Test,
            EnvironmentArg::Production => Environment::Production,
        }
    }
}
