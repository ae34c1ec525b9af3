//! Keyword echo function.
//!
//! Served on its own listener by `roster echo`; the API's `/say` proxy calls
//! it over HTTP.

mod handler;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use handler::{echo, keyword_of, MISSING_KEYWORD};

/// Router for the echo function. It answers on `/` as well as `/say`, so the
/// proxy URL may point at either.
pub fn create_echo_router() -> Router {
    Router::new()
        .route("/", get(echo).post(echo))
        .route("/say", get(echo).post(echo))
        .layer(TraceLayer::new_for_http())
}
