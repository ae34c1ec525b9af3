//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::http::agents::{create_agent, delete_agent, replace_agent, update_agent};
use crate::http::docs::{docs_index, openapi_json};
use crate::http::handlers::{company_agents, company_customers, list_agents, list_students};
use crate::http::say::say;
use crate::state::AppState;

/// Create the API router.
///
/// ## Route Structure
///
/// ```text
/// GET    /say                  - Forward keyword to the echo function
/// GET    /students             - List students
/// GET    /companies/agents     - Companies with agents in their city
/// GET    /companies/customers  - Companies with customers in their city
/// GET    /agents               - List agents
/// POST   /agents/create        - Create agent
/// PATCH  /agents/{id}          - Update phone and/or commission
/// PUT    /agents/{id}          - Replace agent
/// DELETE /agents/{id}          - Delete agent
/// GET    /docs                 - HTML docs
/// GET    /docs/openapi.json    - OpenAPI document
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/say", get(say))
        .route("/students", get(list_students))
        .route("/companies/agents", get(company_agents))
        .route("/companies/customers", get(company_customers))
        .route("/agents", get(list_agents))
        .route("/agents/create", post(create_agent))
        .route(
            "/agents/{id}",
            patch(update_agent).put(replace_agent).delete(delete_agent),
        )
        .route("/docs", get(docs_index))
        .route("/docs/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
