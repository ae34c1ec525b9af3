//! Validated agent writes and the statements they turn into.

use rusqlite::types::Value;

use crate::statements::{text_or_null, Statement, INSERT_AGENT, REPLACE_AGENT};

/// A new agent row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAgent {
    pub code: String,
    pub name: String,
    pub working_area: String,
    pub commission: f64,
    pub phone: Option<String>,
    pub country: Option<String>,
}

impl NewAgent {
    pub fn insert(&self) -> Statement {
        Statement::new(
            INSERT_AGENT,
            vec![
                Value::Text(self.code.clone()),
                Value::Text(self.name.clone()),
                Value::Text(self.working_area.clone()),
                Value::Real(self.commission),
                text_or_null(&self.phone),
                text_or_null(&self.country),
            ],
        )
    }
}

/// Full replacement of every agent column except the code.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentReplacement {
    pub name: String,
    pub working_area: String,
    pub commission: f64,
    pub phone: Option<String>,
    pub country: Option<String>,
}

impl AgentReplacement {
    pub fn replace(&self, code: &str) -> Statement {
        Statement::new(
            REPLACE_AGENT,
            vec![
                Value::Text(self.name.clone()),
                Value::Text(self.working_area.clone()),
                Value::Real(self.commission),
                text_or_null(&self.phone),
                text_or_null(&self.country),
                Value::Text(code.to_string()),
            ],
        )
    }
}

/// Partial update. Only the fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentPatch {
    pub phone: Option<String>,
    pub commission: Option<f64>,
}

impl AgentPatch {
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.commission.is_none()
    }

    /// Build the `UPDATE`, or `None` when there is nothing to set.
    pub fn update(&self, code: &str) -> Option<Statement> {
        let mut assignments = Vec::new();
        let mut params = Vec::new();

        if let Some(phone) = &self.phone {
            assignments.push("PHONE_NO = ?");
            params.push(Value::Text(phone.clone()));
        }
        if let Some(commission) = self.commission {
            assignments.push("COMMISSION = ?");
            params.push(Value::Real(commission));
        }
        if assignments.is_empty() {
            return None;
        }

        params.push(Value::Text(code.to_string()));
        Some(Statement::new(
            format!(
                "UPDATE agents SET {} WHERE AGENT_CODE = ?",
                assignments.join(", ")
            ),
            params,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent() -> NewAgent {
        NewAgent {
            code: "A099".to_string(),
            name: "Test".to_string(),
            working_area: "City".to_string(),
            commission: 0.1,
            phone: None,
            country: Some("NL".to_string()),
        }
    }

    #[test]
    fn test_insert_binds_all_columns_in_order() {
        let stmt = agent().insert();
        assert!(stmt.sql.contains("INSERT INTO agents"));
        assert_eq!(
            stmt.params,
            vec![
                Value::Text("A099".to_string()),
                Value::Text("Test".to_string()),
                Value::Text("City".to_string()),
                Value::Real(0.1),
                Value::Null,
                Value::Text("NL".to_string()),
            ]
        );
    }

    #[test]
    fn test_replace_binds_code_last() {
        let replacement = AgentReplacement {
            name: "Jane".to_string(),
            working_area: "London".to_string(),
            commission: 0.25,
            phone: Some("555".to_string()),
            country: None,
        };
        let stmt = replacement.replace("A003");
        assert_eq!(stmt.params.len(), 6);
        assert_eq!(stmt.params[5], Value::Text("A003".to_string()));
        assert_eq!(stmt.params[4], Value::Null);
    }

    #[test]
    fn test_patch_empty() {
        let patch = AgentPatch::default();
        assert!(patch.is_empty());
        assert!(patch.update("A001").is_none());
    }

    #[test]
    fn test_patch_phone_only() {
        let patch = AgentPatch {
            phone: Some("987".to_string()),
            commission: None,
        };
        let stmt = patch.update("A001").unwrap();
        assert_eq!(stmt.sql, "UPDATE agents SET PHONE_NO = ? WHERE AGENT_CODE = ?");
        assert_eq!(
            stmt.params,
            vec![Value::Text("987".to_string()), Value::Text("A001".to_string())]
        );
    }

    #[test]
    fn test_patch_both_fields() {
        let patch = AgentPatch {
            phone: Some("987".to_string()),
            commission: Some(0.2),
        };
        let stmt = patch.update("A001").unwrap();
        assert_eq!(
            stmt.sql,
            "UPDATE agents SET PHONE_NO = ?, COMMISSION = ? WHERE AGENT_CODE = ?"
        );
        assert_eq!(stmt.params[1], Value::Real(0.2));
    }

    #[test]
    fn test_delete_statement() {
        let stmt = Statement::delete_agent("A010");
        assert_eq!(stmt.sql, "DELETE FROM agents WHERE AGENT_CODE = ?");
        assert_eq!(stmt.params, vec![Value::Text("A010".to_string())]);
    }
}
