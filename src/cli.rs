//! CLI definitions for roster.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub(crate) const DEFAULT_CONFIG: &str = "roster.toml";

/// roster CLI.
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Agents, companies, customers and students over HTTP")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG, global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the API server (default)
    Serve {
        /// Override server.host
        #[arg(long)]
        host: Option<String>,

        /// Override server.port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run the keyword echo function
    Echo {
        /// Override echo.host
        #[arg(long)]
        host: Option<String>,

        /// Override echo.port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate the configuration
    Check,
}
