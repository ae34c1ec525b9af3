//! roster - agents, companies, customers and students over HTTP.
//!
//! Main entry point for the API server, the keyword echo function and config
//! checks.

mod cli;
mod server;

use clap::Parser;

use roster_config::{ConfigLoader, ConfigValidator};

use cli::{Cli, Commands, DEFAULT_CONFIG};
use server::{init_tracing, run_api, run_echo, validate};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // A missing file is only an error when the path was given explicitly.
    let required = cli.config.as_os_str() != DEFAULT_CONFIG;
    let mut config = ConfigLoader::load_or_default(&cli.config, required)?;

    match cli.command {
        None => {
            init_tracing(&config.logging)?;
            validate(&config)?;
            run_api(config).await
        }
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            init_tracing(&config.logging)?;
            validate(&config)?;
            run_api(config).await
        }
        Some(Commands::Echo { host, port }) => {
            if let Some(host) = host {
                config.echo.host = host;
            }
            if let Some(port) = port {
                config.echo.port = port;
            }
            init_tracing(&config.logging)?;
            validate(&config)?;
            run_echo(config).await
        }
        Some(Commands::Check) => {
            let result = ConfigValidator::validate(&config)?;
            for warning in &result.warnings {
                println!("warning: {}: {}", warning.path, warning.message);
            }
            for error in &result.errors {
                println!("error: {}: {}", error.path, error.message);
            }
            if !result.is_valid() {
                return Err(format!("{} has {} error(s)", cli.config.display(), result.errors.len()).into());
            }
            println!("{}: ok", cli.config.display());
            Ok(())
        }
    }
}
