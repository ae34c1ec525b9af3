//! SQL statements issued by the API.
//!
//! All statements are fixed text with `?` placeholders; values only ever
//! travel as parameters.

use rusqlite::types::Value;

pub const SELECT_STUDENTS: &str = "SELECT * FROM student";

pub const SELECT_AGENTS: &str = "SELECT * FROM agents";

/// Companies left-joined to the agents working in their city.
pub const SELECT_COMPANY_AGENTS: &str = "
    SELECT c.COMPANY_ID, c.COMPANY_NAME, c.COMPANY_CITY, a.AGENT_NAME
    FROM company c
    LEFT JOIN agents a
      ON TRIM(REPLACE(c.COMPANY_CITY, char(13), '')) = TRIM(a.WORKING_AREA)
    ORDER BY c.COMPANY_NAME, c.COMPANY_ID, a.rowid";

/// Companies left-joined to the customers located in their city.
pub const SELECT_COMPANY_CUSTOMERS: &str = "
    SELECT c.COMPANY_ID, c.COMPANY_NAME, c.COMPANY_CITY, cu.CUST_NAME
    FROM company c
    LEFT JOIN customer cu
      ON TRIM(REPLACE(c.COMPANY_CITY, char(13), '')) = TRIM(cu.CUST_CITY)
    ORDER BY c.COMPANY_NAME, c.COMPANY_ID, cu.rowid";

pub const AGENT_NAME: &str = "AGENT_NAME";
pub const CUST_NAME: &str = "CUST_NAME";

pub(crate) const INSERT_AGENT: &str = "
    INSERT INTO agents (AGENT_CODE, AGENT_NAME, WORKING_AREA, COMMISSION, PHONE_NO, COUNTRY)
    VALUES (?, ?, ?, ?, ?, ?)";

pub(crate) const REPLACE_AGENT: &str = "
    UPDATE agents
    SET AGENT_NAME = ?, WORKING_AREA = ?, COMMISSION = ?, PHONE_NO = ?, COUNTRY = ?
    WHERE AGENT_CODE = ?";

pub(crate) const DELETE_AGENT: &str = "DELETE FROM agents WHERE AGENT_CODE = ?";

/// A statement paired with its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Statement {
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// Delete one agent by code.
    pub fn delete_agent(code: &str) -> Self {
        Self::new(DELETE_AGENT, vec![Value::Text(code.to_string())])
    }
}

/// Bind an optional string as TEXT or NULL.
pub(crate) fn text_or_null(value: &Option<String>) -> Value {
    match value {
        Some(s) => Value::Text(s.clone()),
        None => Value::Null,
    }
}
