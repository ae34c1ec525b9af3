//! Read handlers.
//!
//! Each handler runs one `SELECT` and renders the rows, reshaping the company
//! joins into one entry per company.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use roster_store::statements::{
    AGENT_NAME, CUST_NAME, SELECT_AGENTS, SELECT_COMPANY_AGENTS, SELECT_COMPANY_CUSTOMERS,
    SELECT_STUDENTS,
};
use roster_store::{group_rows, CompanyGroup, Row};

use crate::error::ApiError;
use crate::state::AppState;

/// A company and the agents working in its city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyAgents {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub agents: Vec<String>,
}

impl From<CompanyGroup> for CompanyAgents {
    fn from(group: CompanyGroup) -> Self {
        Self {
            id: group.id,
            name: group.name,
            city: group.city,
            agents: group.members,
        }
    }
}

/// A company and the customers located in its city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyCustomers {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub customers: Vec<String>,
}

impl From<CompanyGroup> for CompanyCustomers {
    fn from(group: CompanyGroup) -> Self {
        Self {
            id: group.id,
            name: group.name,
            city: group.city,
            customers: group.members,
        }
    }
}

/// List all students.
///
/// GET /students
pub async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Row>>, ApiError> {
    let rows = state.db.query(SELECT_STUDENTS, Vec::new()).await?;
    Ok(Json(rows))
}

/// List all agents.
///
/// GET /agents
pub async fn list_agents(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Row>>, ApiError> {
    let rows = state.db.query(SELECT_AGENTS, Vec::new()).await?;
    Ok(Json(rows))
}

/// Companies with the agents working in their city.
///
/// GET /companies/agents
pub async fn company_agents(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CompanyAgents>>, ApiError> {
    let rows = state.db.query(SELECT_COMPANY_AGENTS, Vec::new()).await?;
    let groups = group_rows(&rows, AGENT_NAME)?;
    Ok(Json(groups.into_iter().map(CompanyAgents::from).collect()))
}

/// Companies with the customers located in their city.
///
/// GET /companies/customers
pub async fn company_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CompanyCustomers>>, ApiError> {
    let rows = state.db.query(SELECT_COMPANY_CUSTOMERS, Vec::new()).await?;
    let groups = group_rows(&rows, CUST_NAME)?;
    Ok(Json(groups.into_iter().map(CompanyCustomers::from).collect()))
}
