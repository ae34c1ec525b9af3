//! Process startup for the API and the echo function.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use roster_api::{ApiServer, AppState, ListenConfig, SayClient};
use roster_config::{Config, ConfigValidator, LoggingConfig};
use roster_store::{Database, PoolOptions};

/// Initialize tracing with console output and, when a log directory is
/// configured, a daily rotated file.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&logging.level))?;

    let file_layer = match &logging.directory {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("roster")
                .filename_suffix("log")
                .max_log_files(30)
                .build(dir)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Flushes on drop; must live for the whole process.
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(file_layer)
        .init();

    Ok(())
}

/// Log validation warnings and fail on the first error.
pub(crate) fn validate(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let warnings = ConfigValidator::validate(config)?.into_result()?;
    for warning in warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
    }
}

/// Run the API server in the foreground.
pub(crate) async fn run_api(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting roster v{}", env!("CARGO_PKG_VERSION"));

    let database = &config.database;
    let options = if database.is_in_memory() {
        PoolOptions::in_memory()
    } else {
        PoolOptions::file(&database.path)
    }
    .with_size(database.pool_size)
    .with_busy_timeout(Duration::from_millis(database.busy_timeout_ms));

    let db = Database::open(options, database.seed).await?;
    let say = SayClient::new(&config.say.url)?;
    info!("Keyword service: {}", say.url());

    let state = Arc::new(AppState::new(db, say));
    let listen = ListenConfig::new(config.server.host.clone(), config.server.port);

    ApiServer::api(listen, state).run(shutdown_signal()).await?;
    Ok(())
}

/// Run the keyword echo function in the foreground.
pub(crate) async fn run_echo(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting roster echo v{}", env!("CARGO_PKG_VERSION"));

    let listen = ListenConfig::new(config.echo.host.clone(), config.echo.port);
    ApiServer::echo(listen).run(shutdown_signal()).await?;
    Ok(())
}
