//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Endpoint of the keyword echo function the API proxies to.
pub const DEFAULT_SAY_URL: &str = "https://us-east1-itis6177-474223.cloudfunctions.net/say";

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub echo: EchoConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub say: SayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Keyword echo function listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EchoConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_echo_port")]
    pub port: u16,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_echo_port(),
        }
    }
}

fn default_echo_port() -> u16 {
    8081
}

/// Relational store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite database file, or `:memory:` for a shared in-memory database.
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Maximum number of simultaneously checked-out connections.
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,

    /// How long SQLite waits on a locked database before failing.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,

    /// Insert the sample data set when the tables are created.
    #[serde(default)]
    pub seed: bool,
}

impl DatabaseConfig {
    /// True when the configured path names an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            pool_size: default_pool_size(),
            busy_timeout_ms: default_busy_timeout_ms(),
            seed: false,
        }
    }
}

fn default_db_path() -> String {
    "sample.db".to_string()
}

fn default_pool_size() -> usize {
    5
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

/// Outbound keyword service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SayConfig {
    #[serde(default = "default_say_url")]
    pub url: String,
}

impl Default for SayConfig {
    fn default() -> Self {
        Self {
            url: default_say_url(),
        }
    }
}

fn default_say_url() -> String {
    DEFAULT_SAY_URL.to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for daily rolling log files. Console only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            directory: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
