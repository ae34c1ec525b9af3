//! Row-to-entity aggregation for company join results.
//!
//! The company joins return one flat row per (company, member) pair, with the
//! member column NULL when the left join found nobody. [`group_by_company`]
//! folds those rows into one [`CompanyGroup`] per company in a single pass,
//! keeping companies in first-seen order and members in row order.
//!
//! Only NULL members are skipped. A member that is empty or blank is still
//! listed, as an empty name.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::database::Row;
use crate::error::StoreError;

pub const COMPANY_ID: &str = "COMPANY_ID";
pub const COMPANY_NAME: &str = "COMPANY_NAME";
pub const COMPANY_CITY: &str = "COMPANY_CITY";

/// One flat row of a company join.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinRow {
    pub company_id: i64,
    pub company_name: Option<String>,
    pub company_city: Option<String>,
    pub member: Option<String>,
}

impl JoinRow {
    /// Read the company columns plus `member_column` out of a result row.
    pub fn from_row(row: &Row, member_column: &str) -> Result<Self, StoreError> {
        let company_id = match row.get(COMPANY_ID) {
            Some(JsonValue::Number(n)) => n.as_i64(),
            Some(JsonValue::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
        .ok_or_else(|| StoreError::MalformedRow(format!("{} is not an integer", COMPANY_ID)))?;

        Ok(Self {
            company_id,
            company_name: text(row, COMPANY_NAME),
            company_city: text(row, COMPANY_CITY),
            member: text(row, member_column),
        })
    }
}

fn text(row: &Row, column: &str) -> Option<String> {
    match row.get(column) {
        Some(JsonValue::String(s)) => Some(s.clone()),
        Some(JsonValue::Null) | None => None,
        Some(other) => Some(other.to_string()),
    }
}

/// A company with the names of its matched members.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyGroup {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub members: Vec<String>,
}

impl CompanyGroup {
    fn first_seen(row: &JoinRow) -> Self {
        Self {
            id: row.company_id,
            name: row.company_name.as_deref().map(|n| n.trim().to_string()),
            city: row.company_city.as_deref().map(normalize_city),
            members: Vec::new(),
        }
    }
}

/// Strip every carriage return, then surrounding whitespace.
pub fn normalize_city(city: &str) -> String {
    city.replace('\r', "").trim().to_string()
}

/// Fold join rows into one group per company id.
pub fn group_by_company<I>(rows: I) -> Vec<CompanyGroup>
where
    I: IntoIterator<Item = JoinRow>,
{
    let mut groups: Vec<CompanyGroup> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for row in rows {
        let slot = *index.entry(row.company_id).or_insert_with(|| {
            groups.push(CompanyGroup::first_seen(&row));
            groups.len() - 1
        });

        if let Some(member) = row.member {
            groups[slot].members.push(member.trim().to_string());
        }
    }

    groups
}

/// Convenience over raw result rows.
pub fn group_rows(rows: &[Row], member_column: &str) -> Result<Vec<CompanyGroup>, StoreError> {
    let join_rows = rows
        .iter()
        .map(|row| JoinRow::from_row(row, member_column))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(group_by_company(join_rows))
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
