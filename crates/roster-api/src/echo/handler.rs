use axum::body::Bytes;
use axum::extract::RawQuery;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value as JsonValue;
use tracing::debug;
use url::form_urlencoded;

pub const MISSING_KEYWORD: &str = "Missing query parameter: keyword";

/// Keyword from the query string, falling back to a JSON body.
///
/// A body value counts when it is a non-empty string, a non-zero number or
/// `true`. Anything else, including an unparseable body, is absent.
pub fn keyword_of(query: Option<&str>, body: &[u8]) -> Option<String> {
    let from_query = query.and_then(|q| {
        form_urlencoded::parse(q.as_bytes())
            .find(|(key, _)| key == "keyword")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
    });
    if from_query.is_some() {
        return from_query;
    }

    let body: JsonValue = serde_json::from_slice(body).ok()?;
    match body.get("keyword")? {
        JsonValue::String(s) if !s.is_empty() => Some(s.clone()),
        JsonValue::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        JsonValue::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// GET /say
pub async fn echo(RawQuery(query): RawQuery, body: Bytes) -> Response {
    match keyword_of(query.as_deref(), &body) {
        Some(keyword) => (StatusCode::OK, format!("Sania says '{}' :D", keyword)).into_response(),
        None => {
            debug!("Echo request without keyword");
            (StatusCode::BAD_REQUEST, MISSING_KEYWORD).into_response()
        }
    }
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
