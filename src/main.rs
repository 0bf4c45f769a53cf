use clap::Parser;

use courier_rs::cli::{Cli, Commands};
use courier_rs::config::ConfigLoader;
use courier_rs::logger::init_logger;
use courier_rs::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new()?;
    if let Some(env) = cli.env {
        loader = loader.with_environment(env.into());
    }
    if let Some(path) = cli.config {
        loader = loader.with_config_file(path);
    }
    let mut settings = loader.load()?;

    // CLI flags beat every configuration layer.
    if cli.verbose {
        settings.logger.level = "debug".to_string();
    } else if cli.quiet {
        settings.logger.level = "error".to_string();
    }

    let (host, port) = match cli.command {
        Some(Commands::Serve { host, port }) => (host, port),
        None => (None, None),
    };
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    init_logger(&settings.logger)?;

    Server::new(settings).run().await
}
