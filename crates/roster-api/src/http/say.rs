//! Keyword proxy handler.

use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use url::form_urlencoded;

use crate::error::ApiError;
use crate::state::AppState;

/// First `keyword` in the query string, or `""` when there is none.
pub fn proxy_keyword(query: Option<&str>) -> String {
    query
        .and_then(|q| {
            form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "keyword")
                .map(|(_, value)| value.into_owned())
        })
        .unwrap_or_default()
}

/// Forward `keyword` to the echo function and relay its answer.
///
/// GET /say
pub async fn say(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    let keyword = proxy_keyword(query.as_deref());
    let reply = state.say.say(&keyword).await?;
    let content_type = reply
        .content_type
        .unwrap_or_else(|| HeaderValue::from_static("text/plain; charset=utf-8"));

    Ok((reply.status, [(header::CONTENT_TYPE, content_type)], reply.body).into_response())
}
