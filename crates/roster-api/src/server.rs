//! HTTP listeners.
//!
//! The API and the echo function run the same way: bind, log the address,
//! serve until the shutdown signal resolves.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::echo::create_echo_router;
use crate::error::ServerError;
use crate::http::routes::create_router;
use crate::state::AppState;

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenConfig {
    pub host: String,
    pub port: u16,
}

impl ListenConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// A router bound to a listen address.
pub struct ApiServer {
    name: &'static str,
    config: ListenConfig,
    router: Router,
}

impl ApiServer {
    /// The API server over the shared state.
    pub fn api(config: ListenConfig, state: Arc<AppState>) -> Self {
        Self {
            name: "API",
            config,
            router: create_router(state),
        }
    }

    /// The keyword echo function.
    pub fn echo(config: ListenConfig) -> Self {
        Self {
            name: "Echo",
            config,
            router: create_echo_router(),
        }
    }

    /// Get the server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Bind the listener without serving yet.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        let addr: SocketAddr = self.addr().parse().map_err(|source| ServerError::Address {
            addr: self.addr(),
            source,
        })?;

        TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: self.addr(),
                source,
            })
    }

    /// Bind and serve until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = self.bind().await?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local = listener.local_addr().map_err(ServerError::Serve)?;
        info!("{} server listening on {}", self.name, local);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(ServerError::Serve)?;

        info!("{} server stopped", self.name);
        Ok(())
    }
}
