//! Agent write handlers.
//!
//! Bodies arrive as loosely typed JSON, are normalized here (trimmed strings,
//! numeric commission) and turn into exactly one statement each.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::info;

use roster_store::{AgentPatch, AgentReplacement, NewAgent, Statement};

use crate::error::ApiError;
use crate::http::extract::JsonBody;
use crate::state::AppState;

pub const AGENT_NOT_FOUND: &str = "Agent not found";

/// Agent fields as sent by clients. Every field is optional at this layer;
/// each handler decides what it requires.
#[derive(Debug, Default, Deserialize)]
pub struct AgentBody {
    #[serde(rename = "AGENT_CODE")]
    pub code: Option<String>,
    #[serde(rename = "AGENT_NAME")]
    pub name: Option<String>,
    #[serde(rename = "WORKING_AREA")]
    pub working_area: Option<String>,
    /// A JSON number or a numeric string.
    #[serde(rename = "COMMISSION")]
    pub commission: Option<JsonValue>,
    #[serde(rename = "PHONE_NO")]
    pub phone: Option<String>,
    #[serde(rename = "COUNTRY")]
    pub country: Option<String>,
}

/// `{ "message": ... }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// Parse a commission value. `null` is treated as absent by the caller.
pub fn parse_commission(value: &JsonValue) -> Option<f64> {
    let parsed = match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|c| c.is_finite())
}

fn required(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value.as_deref().map(|s| s.trim().to_string())
}

fn commission_of(body: &AgentBody) -> Option<f64> {
    body.commission
        .as_ref()
        .filter(|v| !v.is_null())
        .and_then(parse_commission)
}

impl AgentBody {
    /// Validate a creation request.
    pub fn into_new_agent(self) -> Result<NewAgent, ApiError> {
        let missing = || ApiError::invalid("Missing or invalid fields");
        Ok(NewAgent {
            code: required(&self.code).ok_or_else(missing)?,
            name: required(&self.name).ok_or_else(missing)?,
            working_area: required(&self.working_area).ok_or_else(missing)?,
            commission: commission_of(&self).ok_or_else(missing)?,
            phone: trimmed(&self.phone),
            country: trimmed(&self.country),
        })
    }

    /// Validate a full replacement.
    pub fn into_replacement(self) -> Result<AgentReplacement, ApiError> {
        let missing = || ApiError::invalid("Missing required fields");
        Ok(AgentReplacement {
            name: required(&self.name).ok_or_else(missing)?,
            working_area: required(&self.working_area).ok_or_else(missing)?,
            commission: commission_of(&self).ok_or_else(missing)?,
            phone: trimmed(&self.phone),
            country: trimmed(&self.country),
        })
    }

    /// Validate a partial update.
    ///
    /// An empty `PHONE_NO` counts as absent. A present, non-null `COMMISSION`
    /// must be numeric.
    pub fn into_patch(self) -> Result<AgentPatch, ApiError> {
        let phone = self
            .phone
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| s.trim().to_string());

        let commission = match self.commission.as_ref().filter(|v| !v.is_null()) {
            Some(value) => Some(
                parse_commission(value).ok_or_else(|| ApiError::invalid("Invalid COMMISSION"))?,
            ),
            None => None,
        };

        let patch = AgentPatch { phone, commission };
        if patch.is_empty() {
            return Err(ApiError::invalid("Nothing to update"));
        }
        Ok(patch)
    }
}

/// Run a single-row write; zero affected rows means the agent is unknown.
async fn execute_on_agent(state: &AppState, statement: Statement) -> Result<(), ApiError> {
    let affected = state.db.execute(&statement.sql, statement.params).await?;
    if affected == 0 {
        return Err(ApiError::not_found(AGENT_NOT_FOUND));
    }
    Ok(())
}

/// Create an agent.
///
/// POST /agents/create
pub async fn create_agent(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<AgentBody>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let agent = body.into_new_agent()?;
    let statement = agent.insert();
    state.db.execute(&statement.sql, statement.params).await?;

    info!("Created agent {}", agent.code);
    Ok((
        StatusCode::CREATED,
        MessageResponse::new("Agent created successfully"),
    ))
}

/// Update the phone number and/or commission of an agent.
///
/// PATCH /agents/{id}
pub async fn update_agent(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<AgentBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let patch = body.into_patch()?;
    let statement = patch
        .update(&id)
        .ok_or_else(|| ApiError::invalid("Nothing to update"))?;
    execute_on_agent(&state, statement).await?;

    info!("Updated agent {}", id);
    Ok(MessageResponse::new("Agent updated successfully"))
}

/// Replace every column of an agent except its code.
///
/// PUT /agents/{id}
pub async fn replace_agent(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<AgentBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let replacement = body.into_replacement()?;
    execute_on_agent(&state, replacement.replace(&id)).await?;

    info!("Replaced agent {}", id);
    Ok(MessageResponse::new("Agent replaced successfully"))
}

/// Delete an agent.
///
/// DELETE /agents/{id}
pub async fn delete_agent(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    execute_on_agent(&state, Statement::delete_agent(&id)).await?;

    info!("Deleted agent {}", id);
    Ok(MessageResponse::new("Agent deleted successfully"))
}

#[cfg(test)]
#[path = "agents_tests.rs"]
mod tests;
