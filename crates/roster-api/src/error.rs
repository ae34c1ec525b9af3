//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use roster_store::StoreError;

use crate::say::SayError;

/// Body sent to callers when the keyword service cannot be reached.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Error calling Cloud Function";

/// Errors a handler can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed client input.
    #[error("{0}")]
    InvalidInput(String),

    /// The targeted row does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The database rejected or failed the statement.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The keyword service failed.
    #[error(transparent)]
    Upstream(#[from] SayError),
}

impl ApiError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ApiError::InvalidInput(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::InvalidInput(msg) | ApiError::NotFound(msg) => {
                debug!("Rejected request ({}): {}", status, msg);
            }
            ApiError::Store(e) => error!("Database operation failed: {}", e),
            ApiError::Upstream(e) => {
                error!("Keyword service call failed: {}", e);
                return (status, UPSTREAM_FAILURE_MESSAGE).into_response();
            }
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Listener errors.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid listen address {addr}: {source}")]
    Address {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
